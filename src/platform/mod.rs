// src/platform/mod.rs

//! Host platform detection and build-artifact path resolution.
//!
//! - [`facts`] models the host's OS family and CPU architecture.
//! - [`resolve`] maps those facts onto the relative directory that holds
//!   the platform-specific release binaries.

pub mod facts;
pub mod resolve;

pub use facts::{CpuArch, HostFacts, OsFamily};
pub use resolve::{BuildArtifactPath, resolve};
