// src/topology/mod.rs

//! Deployment layouts and descriptor assembly.
//!
//! - [`descriptor`] defines the records handed to the process supervisor.
//! - [`catalogue`] declares each layout's services as static data.
//! - [`assemble`] builds and validates the ordered [`Topology`].

pub mod assemble;
pub mod catalogue;
pub mod descriptor;

pub use assemble::{assemble, assemble_catalogue};
pub use catalogue::{LaunchKind, LayoutMode, ServiceSpec};
pub use descriptor::{
    ExecMode, LaunchTarget, LogRouting, ProcessDescriptor, RestartPolicy, Topology,
};
