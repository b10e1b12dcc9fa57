// src/topology/catalogue.rs

//! Per-layout service catalogues, declared as data.
//!
//! Each [`LayoutMode`] owns a fixed list of [`ServiceSpec`]s. The lists
//! are plain consts so the full deployment surface of a layout is
//! readable in one place and the assembler stays free of per-service
//! conditionals. Names and ports must be unique within a catalogue;
//! the assembler rejects the whole topology if they are not.

use std::fmt;

/// One of the mutually exclusive deployment layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Checked-out source tree: compiled binaries run straight out of
    /// their per-service `target/` directories, Node services out of
    /// their subdirectories.
    Development,
    /// One deploy directory per service under a host root, every
    /// service launched through a bundled wrapper or interpreter.
    HostStandard,
    /// Consolidated Node tier: standalone builds side by side under a
    /// single shared directory.
    SingleSharedDirectory,
}

impl LayoutMode {
    /// The catalogued services for this layout, in launch-consideration
    /// order.
    pub fn services(&self) -> &'static [ServiceSpec] {
        match self {
            LayoutMode::Development => DEVELOPMENT,
            LayoutMode::HostStandard => HOST_STANDARD,
            LayoutMode::SingleSharedDirectory => SINGLE_SHARED,
        }
    }

    /// Default absolute root for host-rooted layouts; `None` for the
    /// development tree, which is relative to the invocation root.
    pub fn default_root(&self) -> Option<&'static str> {
        match self {
            LayoutMode::Development => None,
            LayoutMode::HostStandard => Some("/opt/api0"),
            LayoutMode::SingleSharedDirectory => Some("/opt/app"),
        }
    }

    /// Whether this layout launches platform-resolved compiled binaries
    /// and therefore needs a resolved artifact directory.
    pub fn uses_resolved_artifacts(&self) -> bool {
        matches!(self, LayoutMode::Development)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayoutMode::Development => "development",
            LayoutMode::HostStandard => "host-standard",
            LayoutMode::SingleSharedDirectory => "single-shared-directory",
        };
        f.write_str(s)
    }
}

/// How a catalogued service is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    /// A compiled binary found under the platform-resolved artifact
    /// directory inside the service's subdirectory. Only valid in
    /// layouts where [`LayoutMode::uses_resolved_artifacts`] holds.
    ResolvedBinary {
        exe: &'static str,
        args: &'static [&'static str],
    },
    /// A fixed command (interpreter or bundled wrapper) run from the
    /// service's directory; its location never depends on the platform.
    Command {
        program: &'static str,
        args: &'static [&'static str],
    },
}

/// Static description of one logical service within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: &'static str,
    /// Subdirectory under the layout root that holds the service.
    pub subdir: &'static str,
    /// Listening port, unique within the catalogue; also exported as
    /// the `PORT` environment variable.
    pub port: u16,
    pub launch: LaunchKind,
    /// Value of `CONFIG_PATH`, relative to the service's working
    /// directory.
    pub config_path: &'static str,
    /// Service-specific environment on top of the common set.
    pub extra_env: &'static [(&'static str, &'static str)],
}

const SEMANTIC_ENV: &[(&str, &str)] = &[
    ("PROVIDER", "cohere"),
    ("API_URL", "http://127.0.0.1:50057"),
];

/// Development tree: five compiled services plus the three Node
/// frontends, running where the build system leaves them.
const DEVELOPMENT: &[ServiceSpec] = &[
    ServiceSpec {
        name: "ai-uploader",
        subdir: "ai-uploader",
        port: 8080,
        launch: LaunchKind::ResolvedBinary {
            exe: "ai-uploader",
            args: &[],
        },
        config_path: "./ai-uploader/config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "store",
        subdir: "store",
        port: 3000,
        launch: LaunchKind::ResolvedBinary {
            exe: "store",
            args: &[],
        },
        config_path: "./store/config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "grpc-logger",
        subdir: "grpc-logger",
        port: 3001,
        launch: LaunchKind::ResolvedBinary {
            exe: "grpc-logger",
            args: &[],
        },
        config_path: "./grpc-logger/config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "semantic",
        subdir: "semantic",
        port: 3002,
        launch: LaunchKind::ResolvedBinary {
            exe: "semantic",
            args: &["--provider", "cohere", "--api", "http://127.0.0.1:50057"],
        },
        config_path: "./semantic/config.yaml",
        extra_env: SEMANTIC_ENV,
    },
    ServiceSpec {
        name: "gateway",
        subdir: "gateway",
        port: 3003,
        launch: LaunchKind::ResolvedBinary {
            exe: "gateway",
            args: &[],
        },
        config_path: "./gateway/config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "dashboard",
        subdir: "dashboard",
        port: 3004,
        launch: LaunchKind::Command {
            program: "npm",
            args: &["start"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "landing",
        subdir: "landing",
        port: 3005,
        launch: LaunchKind::Command {
            program: "npm",
            args: &["start"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "mayorana",
        subdir: "mayorana",
        port: 3006,
        launch: LaunchKind::Command {
            program: "node_modules/.bin/next",
            args: &["start", "-p", "3006"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
];

/// Host deployment with one directory per service under the root.
/// Compiled services ship a `run.sh` wrapper next to their binary, so
/// nothing here depends on the host platform.
const HOST_STANDARD: &[ServiceSpec] = &[
    ServiceSpec {
        name: "ai-uploader",
        subdir: "ai-uploader",
        port: 8080,
        launch: LaunchKind::Command {
            program: "./run.sh",
            args: &[],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "store",
        subdir: "store",
        port: 3000,
        launch: LaunchKind::Command {
            program: "./run.sh",
            args: &[],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "grpc-logger",
        subdir: "grpc-logger",
        port: 3001,
        launch: LaunchKind::Command {
            program: "./run.sh",
            args: &[],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "semantic",
        subdir: "semantic",
        port: 3002,
        launch: LaunchKind::Command {
            program: "./run.sh",
            args: &[],
        },
        config_path: "./config.yaml",
        extra_env: SEMANTIC_ENV,
    },
    ServiceSpec {
        name: "gateway",
        subdir: "gateway",
        port: 3003,
        launch: LaunchKind::Command {
            program: "./run.sh",
            args: &[],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "dashboard",
        subdir: "dashboard",
        port: 3004,
        launch: LaunchKind::Command {
            program: "npm",
            args: &["start"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "landing",
        subdir: "landing",
        port: 3005,
        launch: LaunchKind::Command {
            program: "npm",
            args: &["start"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "mayorana",
        subdir: "mayorana",
        port: 3006,
        launch: LaunchKind::Command {
            program: "node",
            args: &["server.js"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
];

/// Shared-directory deployment: only the Node tier, each service as a
/// standalone build started with `node server.js`.
const SINGLE_SHARED: &[ServiceSpec] = &[
    ServiceSpec {
        name: "dashboard",
        subdir: "dashboard",
        port: 3004,
        launch: LaunchKind::Command {
            program: "node",
            args: &["server.js"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "landing",
        subdir: "landing",
        port: 3005,
        launch: LaunchKind::Command {
            program: "node",
            args: &["server.js"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
    ServiceSpec {
        name: "mayorana",
        subdir: "mayorana",
        port: 3006,
        launch: LaunchKind::Command {
            program: "node",
            args: &["server.js"],
        },
        config_path: "./config.yaml",
        extra_env: &[],
    },
];
