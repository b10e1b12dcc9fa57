// src/topology/assemble.rs

//! Turns a layout catalogue into a supervisor-ready [`Topology`].
//!
//! Assembly is a pure function of its inputs: the same layout, artifact
//! directory and root always produce the same topology. All failure
//! modes are static-authoring defects (duplicate names or ports, a
//! malformed root, a platform-resolved binary in a layout that launches
//! commands only) and are reported as fatal configuration errors before
//! any descriptor is handed out.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::errors::{Result, TopogenError};
use crate::platform::BuildArtifactPath;
use crate::topology::catalogue::{LaunchKind, LayoutMode, ServiceSpec};
use crate::topology::descriptor::{
    ExecMode, LaunchTarget, LogRouting, ProcessDescriptor, RestartPolicy, Topology,
};

/// Assemble the topology for a layout's own catalogue.
///
/// `artifact` is required for layouts that launch platform-resolved
/// binaries and must be absent otherwise; `root_override` replaces the
/// layout's default base root and only applies to host-rooted layouts.
pub fn assemble(
    layout: LayoutMode,
    artifact: Option<&BuildArtifactPath>,
    root_override: Option<&str>,
) -> Result<Topology> {
    assemble_catalogue(layout, layout.services(), artifact, root_override)
}

/// Assemble an explicit catalogue under a layout's rules.
///
/// The shipped layouts go through [`assemble`]; this variant validates
/// and assembles any catalogue against the same invariants, which is
/// how hand-maintained service lists can be checked before deployment.
pub fn assemble_catalogue(
    layout: LayoutMode,
    services: &[ServiceSpec],
    artifact: Option<&BuildArtifactPath>,
    root_override: Option<&str>,
) -> Result<Topology> {
    validate_catalogue(services)?;
    check_artifact(layout, artifact)?;
    let root = resolve_root(layout, root_override)?;

    let mut apps = Vec::with_capacity(services.len());
    for spec in services {
        apps.push(build_descriptor(layout, spec, artifact, root.as_deref())?);
    }

    info!(
        layout = %layout,
        services = apps.len(),
        root = root.as_deref().unwrap_or("."),
        "assembled topology"
    );
    Ok(Topology::new_unchecked(apps))
}

/// Reject catalogues with colliding names or ports before building
/// anything; the supervisor cannot reconcile ambiguity on its own.
fn validate_catalogue(services: &[ServiceSpec]) -> Result<()> {
    let mut names = BTreeSet::new();
    let mut ports: BTreeMap<u16, &str> = BTreeMap::new();

    for spec in services {
        if !names.insert(spec.name) {
            return Err(TopogenError::DuplicateName(spec.name.to_string()));
        }
        if let Some(first) = ports.insert(spec.port, spec.name) {
            return Err(TopogenError::DuplicatePort {
                port: spec.port,
                first: first.to_string(),
                second: spec.name.to_string(),
            });
        }
    }
    Ok(())
}

fn check_artifact(layout: LayoutMode, artifact: Option<&BuildArtifactPath>) -> Result<()> {
    match (layout.uses_resolved_artifacts(), artifact) {
        (true, None) => Err(TopogenError::ConfigError(format!(
            "layout '{layout}' launches compiled binaries and needs a resolved build-artifact directory"
        ))),
        (false, Some(artifact)) => Err(TopogenError::ConfigError(format!(
            "layout '{layout}' does not use platform-resolved binaries (got '{artifact}')"
        ))),
        _ => Ok(()),
    }
}

/// Determine the base root: `None` for the development tree, a
/// validated absolute path for host-rooted layouts.
fn resolve_root(layout: LayoutMode, root_override: Option<&str>) -> Result<Option<String>> {
    let default = layout.default_root();
    match (default, root_override) {
        (None, None) => Ok(None),
        (None, Some(root)) => Err(TopogenError::ConfigError(format!(
            "layout '{layout}' runs relative to the invocation root and takes no base root (got '{root}')"
        ))),
        (Some(default), root_override) => {
            let raw = root_override.unwrap_or(default);
            if raw.is_empty() {
                return Err(TopogenError::ConfigError(
                    "base root must not be empty".to_string(),
                ));
            }
            if !raw.starts_with('/') {
                return Err(TopogenError::ConfigError(format!(
                    "base root '{raw}' must be an absolute path"
                )));
            }
            Ok(Some(raw.trim_end_matches('/').to_string()))
        }
    }
}

fn build_descriptor(
    layout: LayoutMode,
    spec: &ServiceSpec,
    artifact: Option<&BuildArtifactPath>,
    root: Option<&str>,
) -> Result<ProcessDescriptor> {
    let (launch, cwd) = launch_and_cwd(layout, spec, artifact, root)?;

    Ok(ProcessDescriptor {
        name: spec.name.to_string(),
        launch,
        cwd,
        instances: 1,
        exec_mode: ExecMode::Fork,
        env: build_env(spec)?,
        restart: RestartPolicy::default(),
        // Host-rooted layouts route logs under the root; the dev tree
        // leaves logging to the supervisor's defaults.
        logs: root.map(|root| LogRouting::under(root, spec.name)),
    })
}

fn launch_and_cwd(
    layout: LayoutMode,
    spec: &ServiceSpec,
    artifact: Option<&BuildArtifactPath>,
    root: Option<&str>,
) -> Result<(LaunchTarget, String)> {
    match (spec.launch, root) {
        // Compiled binary in the dev tree: script is the full relative
        // path into the service's target directory, run from the
        // invocation root so the relative CONFIG_PATH resolves.
        (LaunchKind::ResolvedBinary { exe, args }, None) => {
            let artifact = artifact.ok_or_else(|| {
                TopogenError::ConfigError(format!(
                    "service '{}' needs a resolved build-artifact directory",
                    spec.name
                ))
            })?;
            let script = format!("{}/{}", spec.subdir, artifact.join(exe));
            Ok((LaunchTarget::new(script, args.iter().copied()), ".".to_string()))
        }
        (LaunchKind::ResolvedBinary { .. }, Some(_)) => Err(TopogenError::ConfigError(format!(
            "service '{}' is a platform-resolved binary, but layout '{layout}' launches commands only",
            spec.name
        ))),
        // Command service in the dev tree runs from its own
        // subdirectory.
        (LaunchKind::Command { program, args }, None) => Ok((
            LaunchTarget::new(program, args.iter().copied()),
            format!("./{}", spec.subdir),
        )),
        (LaunchKind::Command { program, args }, Some(root)) => Ok((
            LaunchTarget::new(program, args.iter().copied()),
            format!("{}/{}", root, spec.subdir),
        )),
    }
}

/// Common environment (runtime mode, port, config pointer) plus the
/// service's extras. A key set twice is an authoring bug, not a merge.
fn build_env(spec: &ServiceSpec) -> Result<BTreeMap<String, String>> {
    let mut env = BTreeMap::new();
    env.insert("NODE_ENV".to_string(), "production".to_string());
    env.insert("PORT".to_string(), spec.port.to_string());
    env.insert("CONFIG_PATH".to_string(), spec.config_path.to_string());

    for (key, value) in spec.extra_env {
        if env.insert((*key).to_string(), (*value).to_string()).is_some() {
            return Err(TopogenError::ConfigError(format!(
                "service '{}' sets environment variable '{key}' twice",
                spec.name
            )));
        }
    }
    Ok(env)
}
