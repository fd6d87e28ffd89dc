// Rust guideline compliant 2026-10-19

//! Property-based tests for canary config ID resolution.
//!
//! These tests validate the uniqueness, not-found, ambiguity, idempotence,
//! and order-independence properties of resolution over arbitrary catalogs.

use canary_core::{resolve_config_id, CanaryConfig, Error};
use proptest::prelude::*;

/// Generates names from a small alphabet so collisions are common.
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,2}").unwrap()
}

/// Generates application names from a small pool.
fn arb_application() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["app1", "app2", "App1", "app"]).prop_map(str::to_string)
}

/// Generates a catalog with unique IDs.
fn arb_catalog() -> impl Strategy<Value = Vec<CanaryConfig>> {
    prop::collection::vec(
        (arb_name(), prop::collection::vec(arb_application(), 0..3)),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, apps))| CanaryConfig::new(format!("c{}", i), name, apps))
            .collect()
    })
}

/// Generates a catalog together with an arbitrary permutation of it.
fn arb_catalog_with_permutation() -> impl Strategy<Value = (Vec<CanaryConfig>, Vec<CanaryConfig>)> {
    arb_catalog().prop_flat_map(|catalog| (Just(catalog.clone()), Just(catalog).prop_shuffle()))
}

fn matching_ids(name: &str, application: &str, catalog: &[CanaryConfig]) -> Vec<String> {
    catalog
        .iter()
        .filter(|c| c.name == name && c.applications.iter().any(|a| a == application))
        .map(|c| c.id.clone())
        .collect()
}

/// Reduces a result to a comparable outcome.
fn outcome(result: &Result<String, Error>) -> Result<String, &'static str> {
    match result {
        Ok(id) => Ok(id.clone()),
        Err(Error::NotFound { .. }) => Err("not_found"),
        Err(Error::Ambiguous { .. }) => Err("ambiguous"),
        Err(_) => Err("other"),
    }
}

proptest! {
    /// The outcome is determined by the number of matching records.
    #[test]
    fn test_outcome_follows_match_count(
        catalog in arb_catalog(),
        name in arb_name(),
        application in arb_application()
    ) {
        let expected = matching_ids(&name, &application, &catalog);
        let result = resolve_config_id(Some(&name), &application, &catalog);

        match expected.len() {
            0 => prop_assert!(
                matches!(result, Err(Error::NotFound { .. })),
                "Expected NotFound, got {:?}",
                result
            ),
            1 => prop_assert_eq!(result.unwrap(), expected[0].clone()),
            _ => match result {
                Err(Error::Ambiguous { matches, .. }) => prop_assert_eq!(matches, expected),
                other => prop_assert!(false, "Expected Ambiguous, got {:?}", other),
            },
        }
    }

    /// Resolving the same inputs twice yields the same outcome.
    #[test]
    fn test_resolution_is_idempotent(
        catalog in arb_catalog(),
        name in arb_name(),
        application in arb_application()
    ) {
        let first = resolve_config_id(Some(&name), &application, &catalog);
        let second = resolve_config_id(Some(&name), &application, &catalog);
        prop_assert_eq!(outcome(&first), outcome(&second));
    }

    /// Permuting the catalog does not change the outcome.
    #[test]
    fn test_resolution_is_order_independent(
        (catalog, shuffled) in arb_catalog_with_permutation(),
        name in arb_name(),
        application in arb_application()
    ) {
        let original = resolve_config_id(Some(&name), &application, &catalog);
        let permuted = resolve_config_id(Some(&name), &application, &shuffled);
        prop_assert_eq!(outcome(&original), outcome(&permuted));
    }

    /// Duplicating any matching record always makes the lookup ambiguous.
    #[test]
    fn test_duplicated_match_is_ambiguous(
        catalog in arb_catalog(),
        application in arb_application()
    ) {
        let mut catalog = catalog;
        let record = CanaryConfig::new("dup", "target", vec![application.clone()]);
        catalog.push(record.clone());
        catalog.push(record);

        let result = resolve_config_id(Some("target"), &application, &catalog);
        prop_assert!(
            matches!(result, Err(Error::Ambiguous { .. })),
            "Expected Ambiguous, got {:?}",
            result
        );
    }
}
