#![allow(dead_code)]

use topogen::topology::{LaunchKind, ServiceSpec};

/// Builder for `ServiceSpec` to simplify synthetic-catalogue setup.
pub struct ServiceSpecBuilder {
    name: &'static str,
    subdir: &'static str,
    port: u16,
    launch: LaunchKind,
    config_path: &'static str,
    extra_env: &'static [(&'static str, &'static str)],
}

impl ServiceSpecBuilder {
    /// A platform-resolved binary service; subdirectory and executable
    /// name default to the service name.
    pub fn binary(name: &'static str, port: u16) -> Self {
        Self {
            name,
            subdir: name,
            port,
            launch: LaunchKind::ResolvedBinary {
                exe: name,
                args: &[],
            },
            config_path: "./config.yaml",
            extra_env: &[],
        }
    }

    /// A fixed-command service; subdirectory defaults to the service name.
    pub fn command(name: &'static str, port: u16, program: &'static str) -> Self {
        Self {
            name,
            subdir: name,
            port,
            launch: LaunchKind::Command {
                program,
                args: &[],
            },
            config_path: "./config.yaml",
            extra_env: &[],
        }
    }

    pub fn subdir(mut self, subdir: &'static str) -> Self {
        self.subdir = subdir;
        self
    }

    pub fn args(mut self, args: &'static [&'static str]) -> Self {
        self.launch = match self.launch {
            LaunchKind::ResolvedBinary { exe, .. } => LaunchKind::ResolvedBinary { exe, args },
            LaunchKind::Command { program, .. } => LaunchKind::Command { program, args },
        };
        self
    }

    pub fn config_path(mut self, path: &'static str) -> Self {
        self.config_path = path;
        self
    }

    pub fn extra_env(mut self, env: &'static [(&'static str, &'static str)]) -> Self {
        self.extra_env = env;
        self
    }

    pub fn build(self) -> ServiceSpec {
        ServiceSpec {
            name: self.name,
            subdir: self.subdir,
            port: self.port,
            launch: self.launch,
            config_path: self.config_path,
            extra_env: self.extra_env,
        }
    }
}
