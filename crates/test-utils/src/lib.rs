pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

use topogen::topology::{ProcessDescriptor, Topology};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Fetch a descriptor by service name, panicking with a useful message.
pub fn descriptor<'a>(topology: &'a Topology, name: &str) -> &'a ProcessDescriptor {
    topology
        .get(name)
        .unwrap_or_else(|| panic!("no descriptor named '{name}' in topology"))
}

/// Fetch an environment value from a descriptor, panicking if absent.
pub fn env_value<'a>(descriptor: &'a ProcessDescriptor, key: &str) -> &'a str {
    descriptor
        .env
        .get(key)
        .map(String::as_str)
        .unwrap_or_else(|| panic!("descriptor '{}' has no env key '{key}'", descriptor.name))
}
