//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Lookup precedence between exact, prefix and universal rules
//! - Rule document validation
//! - Out-of-date scanning and scope exclusion

use crate::error::RegistryError;
use crate::policy::UpdatePolicy;
use crate::registry::RuleRegistry;
use crate::restriction::{Restriction, RestrictionKind};
use crate::stream::VersionStream;
use bumpguard_types::{Coordinate, DependencyRef};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for dotted group ids (`org.example.sub`).
fn arb_group() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}(\\.[a-z]{1,6}){0,3}").unwrap()
}

/// Strategy for artifact ids.
fn arb_artifact() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,11}").unwrap()
}

/// Strategy for version strings with an optional qualifier.
fn arb_version() -> impl Strategy<Value = String> {
    (0u32..30, 0u32..30, 0u32..30, prop::option::of("(Final|SP1|Beta2|CR1)")).prop_map(
        |(major, minor, micro, qualifier)| match qualifier {
            Some(q) => format!("{major}.{minor}.{micro}.{q}"),
            None => format!("{major}.{minor}.{micro}"),
        },
    )
}

fn arb_scope() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("compile".to_string()),
        Just("runtime".to_string()),
        Just("test".to_string()),
        Just("provided".to_string()),
    ]
}

fn arb_stream() -> impl Strategy<Value = VersionStream> {
    prop::sample::select(VersionStream::ALL.to_vec())
}

fn arb_dependency() -> impl Strategy<Value = DependencyRef> {
    (arb_group(), arb_artifact(), arb_version(), arb_scope())
        .prop_map(|(g, a, v, s)| DependencyRef::new(g, a, v, s))
}

fn registry(entries: &[(&str, &str, Restriction)]) -> RuleRegistry {
    let mut builder = RuleRegistry::builder();
    for (group, artifact, restriction) in entries {
        builder.push(&Coordinate::new(*group, *artifact), restriction.clone());
    }
    builder.build()
}

fn single_rule(key: String, value: Value) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert(key, value);
    doc
}

// ============================================================================
// Lookup precedence
// ============================================================================

proptest! {
    #[test]
    fn exact_rule_always_wins(group in arb_group(), artifact in arb_artifact()) {
        let reg = registry(&[
            ("*", "*", Restriction::prefix("universal")),
            ("*", artifact.as_str(), Restriction::prefix("any-group")),
            (group.as_str(), "*", Restriction::prefix("group-wide")),
            (group.as_str(), artifact.as_str(), Restriction::prefix("exact")),
        ]);
        prop_assert_eq!(
            reg.restrictions_for(&group, &artifact),
            &[Restriction::prefix("exact")][..]
        );
    }

    #[test]
    fn unrelated_registry_matches_nothing(group in arb_group(), artifact in arb_artifact()) {
        // Rule keys use upper-case ids; generated coordinates are lower-case.
        let reg = registry(&[
            ("ORG", "CORE", Restriction::Never),
            ("ORG.*", "*", Restriction::prefix("1.")),
            ("*", "CORE", Restriction::Never),
        ]);
        prop_assert!(reg.restrictions_for(&group, &artifact).is_empty());
    }

    #[test]
    fn prefix_pattern_matches_iff_group_starts_with_prefix(
        prefix in arb_group(),
        group in arb_group(),
        artifact in arb_artifact(),
    ) {
        let pattern = format!("{prefix}*");
        let reg = registry(&[(pattern.as_str(), "*", Restriction::Never)]);
        let matched = !reg.restrictions_for(&group, &artifact).is_empty();
        prop_assert_eq!(matched, group.starts_with(prefix.as_str()));
    }

    #[test]
    fn universal_rule_catches_everything(group in arb_group(), artifact in arb_artifact()) {
        let reg = registry(&[("*", "*", Restriction::qualifier(["Final"]))]);
        prop_assert_eq!(
            reg.restriction_for(&group, &artifact, RestrictionKind::Qualifier),
            Some(&Restriction::qualifier(["Final"]))
        );
    }
}

// ============================================================================
// Rule document validation
// ============================================================================

proptest! {
    #[test]
    fn prefix_with_stream_always_conflicts(
        group in arb_group(),
        artifact in arb_artifact(),
        stream in arb_stream(),
        prefix_first in any::<bool>(),
    ) {
        let mut table = Map::new();
        if prefix_first {
            table.insert("PREFIX".to_string(), json!("1."));
            table.insert("STREAM".to_string(), json!(stream.as_str()));
        } else {
            table.insert("STREAM".to_string(), json!(stream.as_str()));
            table.insert("PREFIX".to_string(), json!("1."));
        }
        let key = format!("{group}:{artifact}");
        let doc = single_rule(key.clone(), Value::Object(table));

        prop_assert_eq!(
            RuleRegistry::from_document(&doc).unwrap_err(),
            RegistryError::ConflictingRestriction { coordinate: key }
        );
    }

    #[test]
    fn bare_values_are_never_or_streams(
        group in arb_group(),
        artifact in arb_artifact(),
        value in "[A-Z]{3,10}",
    ) {
        let doc = single_rule(format!("{group}:{artifact}"), json!(value.clone()));
        let result = RuleRegistry::from_document(&doc);

        let expected = if value == "NEVER" {
            Some(Restriction::Never)
        } else {
            value.parse::<VersionStream>().ok().map(Restriction::VersionStream)
        };

        match expected {
            Some(restriction) => {
                let reg = result.unwrap();
                prop_assert_eq!(reg.restrictions_for(&group, &artifact), &[restriction][..]);
            }
            None => prop_assert!(result.is_err()),
        }
    }
}

// ============================================================================
// Out-of-date scan
// ============================================================================

proptest! {
    #[test]
    fn ignored_scopes_never_appear_in_results(
        deps in prop::collection::vec(arb_dependency(), 0..20),
    ) {
        let policy = UpdatePolicy::new(
            registry(&[("*", "*", Restriction::prefix("99."))]),
            vec!["test".to_string(), "provided".to_string()],
        );
        let out = policy.find_out_of_date(&deps);
        prop_assert!(out
            .iter()
            .all(|o| o.dependency.scope != "test" && o.dependency.scope != "provided"));
    }

    #[test]
    fn reported_iff_version_misses_prefix(dep in arb_dependency(), major in 0u32..30) {
        let prefix = format!("{major}.");
        let policy = UpdatePolicy::new(
            registry(&[("*", "*", Restriction::prefix(prefix.clone()))]),
            Vec::new(),
        );
        let out = policy.find_out_of_date([&dep]);
        prop_assert_eq!(out.is_empty(), dep.version.starts_with(&prefix));
        if let Some(found) = out.iter().next() {
            prop_assert_eq!(&found.required_prefix, &prefix);
            prop_assert_eq!(&found.dependency, &dep);
        }
    }

    #[test]
    fn scan_is_order_independent(mut deps in prop::collection::vec(arb_dependency(), 0..20)) {
        let policy = UpdatePolicy::new(
            registry(&[("*", "*", Restriction::prefix("3."))]),
            vec!["test".to_string()],
        );
        let forward = policy.find_out_of_date(&deps);
        deps.reverse();
        let backward = policy.find_out_of_date(&deps);
        prop_assert_eq!(forward, backward);
    }
}
