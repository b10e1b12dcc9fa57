// src/platform/facts.rs

//! Host platform facts: OS family and CPU architecture.
//!
//! Facts are read once at startup from `std::env::consts` and stay fixed
//! for the rest of the run. Parsing raw identifiers is total: anything
//! outside the known enumeration maps to `Other`, never an error. Both
//! Node-style spellings ("darwin", "arm64", "x64") and Rust-style ones
//! ("macos", "aarch64", "x86_64") are accepted so that CLI overrides
//! behave exactly like detected values.

use std::fmt;

use tracing::debug;

/// Operating-system family of the target host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    /// Anything that is neither macOS nor Linux.
    Other,
}

impl From<&str> for OsFamily {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "macos" | "darwin" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            _ => OsFamily::Other,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OsFamily::MacOs => "macos",
            OsFamily::Linux => "linux",
            OsFamily::Other => "other",
        };
        f.write_str(s)
    }
}

/// CPU architecture of the target host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuArch {
    Arm64,
    X86_64,
    /// Anything that is neither arm64 nor x86_64.
    Other,
}

impl From<&str> for CpuArch {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "arm64" | "aarch64" => CpuArch::Arm64,
            "x86_64" | "x64" | "amd64" => CpuArch::X86_64,
            _ => CpuArch::Other,
        }
    }
}

impl fmt::Display for CpuArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CpuArch::Arm64 => "arm64",
            CpuArch::X86_64 => "x86_64",
            CpuArch::Other => "other",
        };
        f.write_str(s)
    }
}

/// The pair of facts the resolver decides on.
///
/// Computed once per invocation and treated as read-only input from then
/// on; tests construct it directly with synthetic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFacts {
    pub os: OsFamily,
    pub arch: CpuArch,
}

impl HostFacts {
    /// Read the facts of the machine running topogen.
    pub fn detect() -> Self {
        let facts = HostFacts {
            os: OsFamily::from(std::env::consts::OS),
            arch: CpuArch::from(std::env::consts::ARCH),
        };
        debug!(os = %facts.os, arch = %facts.arch, "detected host platform");
        facts
    }
}
