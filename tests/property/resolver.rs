use proptest::prelude::*;
use topogen::platform::{resolve, CpuArch, HostFacts, OsFamily};

// Everything the resolver may ever return.
const KNOWN_FRAGMENTS: &[&str] = &[
    "target/aarch64-apple-darwin/release",
    "target/aarch64-unknown-linux-gnu/release",
    "target/release",
];

fn any_os() -> impl Strategy<Value = OsFamily> {
    prop_oneof![
        Just(OsFamily::MacOs),
        Just(OsFamily::Linux),
        Just(OsFamily::Other),
    ]
}

fn any_arch() -> impl Strategy<Value = CpuArch> {
    prop_oneof![
        Just(CpuArch::Arm64),
        Just(CpuArch::X86_64),
        Just(CpuArch::Other),
    ]
}

proptest! {
    // Raw identifiers come straight from the runtime or the CLI; no
    // input may ever make resolution fail or leave the known table.
    #[test]
    fn test_resolve_is_total_for_raw_identifiers(os in ".*", arch in ".*") {
        let facts = HostFacts {
            os: OsFamily::from(os.as_str()),
            arch: CpuArch::from(arch.as_str()),
        };
        let path = resolve(facts);
        prop_assert!(!path.as_str().is_empty());
        prop_assert!(KNOWN_FRAGMENTS.contains(&path.as_str()));
    }

    #[test]
    fn test_resolve_is_deterministic(os in any_os(), arch in any_arch()) {
        let facts = HostFacts { os, arch };
        prop_assert_eq!(resolve(facts), resolve(facts));
    }

    // "darwin"/"macos" and "arm64"/"aarch64" are spellings of the same
    // fact and must never resolve differently.
    #[test]
    fn test_equivalent_spellings_resolve_identically(arch in any_arch()) {
        let darwin = resolve(HostFacts { os: OsFamily::from("darwin"), arch });
        let macos = resolve(HostFacts { os: OsFamily::from("macos"), arch });
        prop_assert_eq!(darwin, macos);

        let arm = resolve(HostFacts { os: OsFamily::Linux, arch: CpuArch::from("arm64") });
        let aarch = resolve(HostFacts { os: OsFamily::Linux, arch: CpuArch::from("aarch64") });
        prop_assert_eq!(arm, aarch);
    }
}
