// src/lib.rs

pub mod cli;
pub mod emit;
pub mod errors;
pub mod logging;
pub mod platform;
pub mod topology;

use anyhow::Result;
use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::platform::{CpuArch, HostFacts, OsFamily};
use crate::topology::{LayoutMode, Topology, assemble};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - host fact detection (with CLI overrides)
/// - build-artifact resolution (only for layouts that need it)
/// - descriptor assembly
/// - document emission (or the `--summary` plan view)
pub fn run(args: CliArgs) -> Result<()> {
    let layout = LayoutMode::from(args.layout);

    // Host layouts launch interpreters and wrappers, so nothing about
    // them depends on where this tool runs.
    let artifact = if layout.uses_resolved_artifacts() {
        Some(platform::resolve(host_facts(&args)))
    } else {
        if args.platform.is_some() || args.arch.is_some() {
            warn!(%layout, "--platform/--arch ignored: layout has no platform-resolved binaries");
        }
        None
    };

    let topology = assemble(layout, artifact.as_ref(), args.root.as_deref())?;

    if args.summary {
        print_summary(layout, &topology);
        return Ok(());
    }

    emit::write(&topology, args.output.as_deref())?;
    Ok(())
}

/// Facts of the machine the descriptors are generated for: detected
/// from the runtime, individually overridable from the CLI.
fn host_facts(args: &CliArgs) -> HostFacts {
    let mut facts = HostFacts::detect();
    if let Some(os) = args.platform.as_deref() {
        facts.os = OsFamily::from(os);
    }
    if let Some(arch) = args.arch.as_deref() {
        facts.arch = CpuArch::from(arch);
    }
    facts
}

/// Simple plan output: one block per service, no JSON.
fn print_summary(layout: LayoutMode, topology: &Topology) {
    println!("topogen plan for layout '{layout}'");
    println!();

    println!("services ({}):", topology.len());
    for descriptor in topology.descriptors() {
        println!("  - {}", descriptor.name);
        if descriptor.launch.args.is_empty() {
            println!("      launch: {}", descriptor.launch.script);
        } else {
            println!(
                "      launch: {} {}",
                descriptor.launch.script,
                descriptor.launch.args.join(" ")
            );
        }
        println!("      cwd: {}", descriptor.cwd);
        if let Some(port) = descriptor.env.get("PORT") {
            println!("      port: {port}");
        }
        if let Some(ref logs) = descriptor.logs {
            println!("      logs: {}", logs.log_file);
        }
    }

    debug!("summary complete (document not emitted)");
}
