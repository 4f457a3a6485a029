//! Fuzz target for wildcard lookup.
//!
//! Builds a registry from arbitrary keys and probes it with arbitrary coordinates. Lookup must
//! never panic and an exact rule must always win over every wildcard tier.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_lookup
//! ```

#![no_main]

use arbitrary::Arbitrary;
use bumpguard_domain::{Restriction, RuleRegistry};
use bumpguard_types::Coordinate;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    keys: Vec<(String, String)>,
    group: String,
    artifact: String,
}

fuzz_target!(|input: Input| {
    let mut builder = RuleRegistry::builder();
    for (group, artifact) in &input.keys {
        builder.push(&Coordinate::new(group.as_str(), artifact.as_str()), Restriction::Never);
    }
    builder.push(
        &Coordinate::new(input.group.as_str(), input.artifact.as_str()),
        Restriction::prefix("exact"),
    );
    let registry = builder.build();

    let found = registry.restrictions_for(&input.group, &input.artifact);
    assert!(found.contains(&Restriction::prefix("exact")));
});
