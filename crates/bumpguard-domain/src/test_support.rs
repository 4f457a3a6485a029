use crate::policy::{FailOn, ScanPolicy, UpdatePolicy};
use bumpguard_types::{DependencyRef, Severity};
use serde_json::Value;

pub fn dep(group: &str, artifact: &str, version: &str, scope: &str) -> DependencyRef {
    DependencyRef::new(group, artifact, version, scope)
}

/// Build a policy from a JSON rule document; panics on invalid rules.
pub fn policy(rules: Value, ignore_scopes: &[&str]) -> UpdatePolicy {
    let Value::Object(rules) = rules else {
        panic!("rule document must be an object");
    };
    UpdatePolicy::from_document(
        &rules,
        ignore_scopes.iter().map(|s| s.to_string()).collect(),
    )
    .expect("test rules must be valid")
}

pub fn scan_policy(severity: Severity, fail_on: FailOn, max_findings: usize) -> ScanPolicy {
    ScanPolicy {
        severity,
        fail_on,
        max_findings,
    }
}
