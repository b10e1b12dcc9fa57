use proptest::prelude::*;
use proptest::sample::Index;

use topogen::errors::TopogenError;
use topogen::topology::{assemble_catalogue, LayoutMode, ServiceSpec};
use topogen_test_utils::builders::ServiceSpecBuilder;

// Fixed pool of names so generated catalogues stay 'static; distinct
// pool indices guarantee distinct names and ports.
const NAME_POOL: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

fn catalogue_strategy() -> impl Strategy<Value = Vec<ServiceSpec>> {
    proptest::sample::subsequence((0..NAME_POOL.len()).collect::<Vec<_>>(), 1..=NAME_POOL.len())
        .prop_map(|indices| {
            indices
                .into_iter()
                .map(|i| {
                    ServiceSpecBuilder::command(NAME_POOL[i], 3100 + i as u16, "npm")
                        .args(&["start"])
                        .build()
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn test_valid_catalogues_assemble_completely_and_in_order(
        services in catalogue_strategy()
    ) {
        let topology = assemble_catalogue(LayoutMode::HostStandard, &services, None, None)
            .expect("catalogue with unique names and ports must assemble");

        prop_assert_eq!(topology.len(), services.len());

        let names: Vec<&str> = topology.descriptors().iter().map(|d| d.name.as_str()).collect();
        let expected: Vec<&str> = services.iter().map(|s| s.name).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn test_assembly_is_idempotent_for_any_catalogue(
        services in catalogue_strategy()
    ) {
        let first = assemble_catalogue(LayoutMode::HostStandard, &services, None, Some("/srv/pool"))
            .expect("catalogue must assemble");
        let second = assemble_catalogue(LayoutMode::HostStandard, &services, None, Some("/srv/pool"))
            .expect("catalogue must assemble");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_name_is_always_rejected(
        services in catalogue_strategy(),
        pick in any::<Index>()
    ) {
        let mut services = services;
        let duplicate = services[pick.index(services.len())];
        // Fresh port, colliding name.
        services.push(
            ServiceSpecBuilder::command(duplicate.name, 9999, "npm").build(),
        );

        let result = assemble_catalogue(LayoutMode::HostStandard, &services, None, None);
        prop_assert!(matches!(result, Err(TopogenError::DuplicateName(_))));
    }

    #[test]
    fn test_repeated_port_is_always_rejected(
        services in catalogue_strategy(),
        pick in any::<Index>()
    ) {
        let mut services = services;
        let duplicate = services[pick.index(services.len())];
        // Fresh name, colliding port.
        services.push(
            ServiceSpecBuilder::command("zulu", duplicate.port, "npm").build(),
        );

        let result = assemble_catalogue(LayoutMode::HostStandard, &services, None, None);
        prop_assert!(
            matches!(result, Err(TopogenError::DuplicatePort { .. })),
            "expected Err(TopogenError::DuplicatePort)",
        );
    }
}
