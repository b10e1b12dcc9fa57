// src/platform/resolve.rs

//! Decision table mapping host facts to the build-artifact directory.
//!
//! The mapping is total: every `(OsFamily, CpuArch)` pair resolves to a
//! directory fragment, with `target/release` as the fallback for hosts we
//! do not cross-compile for. Resolution is pure; the same facts always
//! yield the same fragment.

use std::fmt;

use tracing::info;

use crate::platform::facts::{CpuArch, HostFacts, OsFamily};

/// Relative directory that holds the platform-specific release binaries.
///
/// Always a relative fragment like `target/release`; callers join it onto
/// a service's working directory to form the launch script path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildArtifactPath(&'static str);

impl BuildArtifactPath {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Join a binary name onto this fragment with a `/` separator.
    pub fn join(&self, binary: &str) -> String {
        format!("{}/{}", self.0, binary)
    }
}

impl fmt::Display for BuildArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolve the build-artifact directory for the given host facts.
pub fn resolve(facts: HostFacts) -> BuildArtifactPath {
    let fragment = match (facts.os, facts.arch) {
        (OsFamily::MacOs, CpuArch::Arm64) => "target/aarch64-apple-darwin/release",
        (OsFamily::Linux, CpuArch::Arm64) => "target/aarch64-unknown-linux-gnu/release",
        // Intel and unrecognized hosts build into the untargeted directory.
        (OsFamily::MacOs, CpuArch::X86_64 | CpuArch::Other)
        | (OsFamily::Linux, CpuArch::X86_64 | CpuArch::Other)
        | (OsFamily::Other, _) => "target/release",
    };
    let resolved = BuildArtifactPath(fragment);
    info!(os = %facts.os, arch = %facts.arch, path = %resolved, "resolved build artifact directory");
    resolved
}
