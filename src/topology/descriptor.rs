// src/topology/descriptor.rs

//! Process descriptors and the topology that collects them.
//!
//! These records are the contract with the external process supervisor;
//! the serde field names follow the PM2 ecosystem schema (`script`,
//! `cwd`, `max_memory_restart`, `error_file`, ...) so the serialized
//! form can be handed to `pm2 start` unchanged.

use std::collections::BTreeMap;

use serde::Serialize;

/// Supervisor execution mode. Every catalogued service runs as a single
/// forked process; cluster mode is a supervisor feature we never use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    Fork,
}

/// What the supervisor should execute for one service.
///
/// `script` is either a path to a compiled binary or an interpreter
/// command like `npm`; `args` stays empty for plain binary launches and
/// is omitted from the serialized descriptor in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchTarget {
    pub script: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl LaunchTarget {
    pub fn new<I, S>(script: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LaunchTarget {
            script: script.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Restart behaviour shared by every managed service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestartPolicy {
    /// Filesystem-watch-triggered restarts are always disabled; the
    /// supervisor must not restart services when deploy files change.
    pub watch: bool,
    /// Timestamp every log line.
    pub time: bool,
    /// Resident-memory ceiling after which the supervisor restarts the
    /// process.
    pub max_memory_restart: String,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        RestartPolicy {
            watch: false,
            time: true,
            max_memory_restart: "500M".to_string(),
        }
    }
}

/// Log-file destinations for host-rooted layouts.
///
/// Absent in the development layout, where the supervisor's own default
/// logging applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRouting {
    pub error_file: String,
    pub out_file: String,
    pub log_file: String,
}

impl LogRouting {
    /// Route a service's streams under `{root}/logs/`.
    pub fn under(root: &str, name: &str) -> Self {
        LogRouting {
            error_file: format!("{root}/logs/{name}.error.log"),
            out_file: format!("{root}/logs/{name}.out.log"),
            log_file: format!("{root}/logs/{name}.log"),
        }
    }
}

/// Everything the supervisor needs to launch and manage one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub launch: LaunchTarget,
    pub cwd: String,
    pub instances: u32,
    pub exec_mode: ExecMode,
    pub env: BTreeMap<String, String>,
    #[serde(flatten)]
    pub restart: RestartPolicy,
    #[serde(flatten)]
    pub logs: Option<LogRouting>,
}

/// The ordered collection of descriptors for one invocation.
///
/// Serializes to the supervisor's `{"apps": [...]}` document. The
/// sequence is append-only during assembly and read-only afterwards;
/// insertion order is the order in which the supervisor will consider
/// the processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    apps: Vec<ProcessDescriptor>,
}

impl Topology {
    /// Build a topology from already-validated descriptors.
    ///
    /// Callers are responsible for having checked name and port
    /// uniqueness first (the assembler does).
    pub(crate) fn new_unchecked(apps: Vec<ProcessDescriptor>) -> Self {
        Topology { apps }
    }

    pub fn descriptors(&self) -> &[ProcessDescriptor] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Look up a descriptor by service name.
    pub fn get(&self, name: &str) -> Option<&ProcessDescriptor> {
        self.apps.iter().find(|d| d.name == name)
    }
}
