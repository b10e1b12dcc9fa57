// tests/assemble_defects.rs
//
// Static-authoring defects must surface as structured configuration
// errors, never as silently dropped or merged descriptors. These run
// against synthetic catalogues so the shipped data stays valid.

use topogen::errors::TopogenError;
use topogen::platform::{resolve, BuildArtifactPath, CpuArch, HostFacts, OsFamily};
use topogen::topology::{assemble, assemble_catalogue, LayoutMode};
use topogen_test_utils::builders::ServiceSpecBuilder;
use topogen_test_utils::init_tracing;

fn artifact() -> BuildArtifactPath {
    resolve(HostFacts {
        os: OsFamily::Linux,
        arch: CpuArch::X86_64,
    })
}

#[test]
fn test_duplicate_name_returns_structured_error() {
    init_tracing();
    let services = [
        ServiceSpecBuilder::command("api", 3100, "npm").build(),
        ServiceSpecBuilder::command("api", 3101, "npm").build(),
    ];

    let result = assemble_catalogue(LayoutMode::HostStandard, &services, None, None);

    match result {
        Err(TopogenError::DuplicateName(name)) => assert_eq!(name, "api"),
        Err(e) => panic!("Expected DuplicateName error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_port_returns_structured_error() {
    init_tracing();
    let services = [
        ServiceSpecBuilder::command("api", 3100, "npm").build(),
        ServiceSpecBuilder::command("worker", 3100, "npm").build(),
    ];

    let result = assemble_catalogue(LayoutMode::HostStandard, &services, None, None);

    match result {
        Err(TopogenError::DuplicatePort {
            port,
            first,
            second,
        }) => {
            assert_eq!(port, 3100);
            assert_eq!(first, "api");
            assert_eq!(second, "worker");
        }
        Err(e) => panic!("Expected DuplicatePort error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_colliding_env_key_is_rejected() {
    init_tracing();
    // PORT is part of the common set; redefining it must not merge.
    let services = [ServiceSpecBuilder::command("api", 3100, "npm")
        .extra_env(&[("PORT", "9999")])
        .build()];

    let result = assemble_catalogue(LayoutMode::HostStandard, &services, None, None);

    match result {
        Err(TopogenError::ConfigError(msg)) => {
            assert!(msg.contains("PORT"), "unexpected message: {msg}");
            assert!(msg.contains("twice"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_development_without_artifact_is_rejected() {
    init_tracing();
    let result = assemble(LayoutMode::Development, None, None);

    match result {
        Err(TopogenError::ConfigError(msg)) => {
            assert!(msg.contains("build-artifact"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_artifact_with_host_layout_is_rejected() {
    init_tracing();
    let artifact = artifact();
    let result = assemble(LayoutMode::HostStandard, Some(&artifact), None);

    assert!(matches!(result, Err(TopogenError::ConfigError(_))));
}

#[test]
fn test_resolved_binary_outside_development_is_rejected() {
    init_tracing();
    let services = [ServiceSpecBuilder::binary("store", 3000).build()];

    let result = assemble_catalogue(LayoutMode::SingleSharedDirectory, &services, None, None);

    match result {
        Err(TopogenError::ConfigError(msg)) => {
            assert!(msg.contains("store"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_root_is_rejected() {
    init_tracing();
    let result = assemble(LayoutMode::HostStandard, None, Some(""));

    match result {
        Err(TopogenError::ConfigError(msg)) => {
            assert!(msg.contains("empty"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_relative_root_is_rejected() {
    init_tracing();
    let result = assemble(LayoutMode::HostStandard, None, Some("opt/api0"));

    match result {
        Err(TopogenError::ConfigError(msg)) => {
            assert!(msg.contains("absolute"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_root_override_with_development_is_rejected() {
    init_tracing();
    let artifact = artifact();
    let result = assemble(LayoutMode::Development, Some(&artifact), Some("/opt/dev"));

    match result {
        Err(TopogenError::ConfigError(msg)) => {
            assert!(msg.contains("invocation root"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
