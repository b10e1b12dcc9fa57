// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::topology::LayoutMode;

/// Command-line arguments for `topogen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "topogen",
    version,
    about = "Generate process-supervisor descriptors for a deployment layout.",
    long_about = None
)]
pub struct CliArgs {
    /// Deployment layout to generate descriptors for.
    #[arg(long, value_enum, value_name = "LAYOUT", default_value = "development")]
    pub layout: Layout,

    /// Override the detected operating system (e.g. "darwin", "linux").
    ///
    /// Only consulted by layouts that launch platform-resolved
    /// binaries; unrecognized values select the default artifact
    /// directory.
    #[arg(long, value_name = "OS")]
    pub platform: Option<String>,

    /// Override the detected CPU architecture (e.g. "arm64", "x86_64").
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Override the base root of a host-rooted layout.
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Write the supervisor document to this path instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a human-readable plan instead of the JSON document.
    #[arg(long)]
    pub summary: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TOPOGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Deployment layout as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum Layout {
    /// Checked-out source tree with locally built binaries.
    #[value(alias = "dev")]
    Development,
    /// Per-service deploy directories under a host root.
    #[value(alias = "host")]
    HostStandard,
    /// Consolidated Node services under one shared directory.
    #[value(alias = "shared")]
    SingleSharedDirectory,
}

impl From<Layout> for LayoutMode {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Development => LayoutMode::Development,
            Layout::HostStandard => LayoutMode::HostStandard,
            Layout::SingleSharedDirectory => LayoutMode::SingleSharedDirectory,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
