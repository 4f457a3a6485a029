use crate::error::RegistryError;
use crate::registry::RuleRegistry;
use crate::restriction::{Restriction, RestrictionKind};
use bumpguard_types::{DependencyRef, Severity};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A dependency whose current version does not satisfy its `PREFIX` rule.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutOfDate {
    pub dependency: DependencyRef,
    pub required_prefix: String,
}

/// Restriction rules plus the scopes that are never evaluated.
///
/// Built once at startup; read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct UpdatePolicy {
    rules: RuleRegistry,
    ignore_scopes: Vec<String>,
}

impl UpdatePolicy {
    pub fn new(rules: RuleRegistry, ignore_scopes: Vec<String>) -> Self {
        Self {
            rules,
            ignore_scopes,
        }
    }

    pub fn from_document(
        rules: &Map<String, Value>,
        ignore_scopes: Vec<String>,
    ) -> Result<Self, RegistryError> {
        Ok(Self::new(RuleRegistry::from_document(rules)?, ignore_scopes))
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    pub fn restrictions_for(&self, group: &str, artifact: &str) -> &[Restriction] {
        self.rules.restrictions_for(group, artifact)
    }

    pub fn restriction_for(
        &self,
        group: &str,
        artifact: &str,
        kind: RestrictionKind,
    ) -> Option<&Restriction> {
        self.rules.restriction_for(group, artifact, kind)
    }

    pub fn ignore_scopes(&self) -> &[String] {
        &self.ignore_scopes
    }

    pub fn is_scope_ignored(&self, scope: &str) -> bool {
        self.ignore_scopes.iter().any(|s| s == scope)
    }

    /// Dependencies whose current version fails their `PREFIX` rule.
    ///
    /// Only `PREFIX` rules are consulted here. Dependencies in ignored scopes are skipped.
    pub fn find_out_of_date<'a>(
        &self,
        dependencies: impl IntoIterator<Item = &'a DependencyRef>,
    ) -> BTreeSet<OutOfDate> {
        let mut out = BTreeSet::new();

        for dep in dependencies {
            if self.is_scope_ignored(&dep.scope) {
                tracing::trace!(dependency = %dep, "scope ignored");
                continue;
            }

            let Some(prefix) = self
                .restriction_for(
                    &dep.group_id,
                    &dep.artifact_id,
                    RestrictionKind::VersionPrefix,
                )
                .and_then(Restriction::as_version_prefix)
            else {
                continue;
            };

            if !prefix.applies(&dep.version) {
                tracing::debug!(
                    dependency = %dep,
                    required_prefix = prefix.prefix_string(),
                    "dependency is out of date"
                );
                out.insert(OutOfDate {
                    dependency: dep.clone(),
                    required_prefix: prefix.prefix_string().to_string(),
                });
            }
        }

        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// How out-of-date findings are reported.
#[derive(Clone, Debug)]
pub struct ScanPolicy {
    pub severity: Severity,
    pub fail_on: FailOn,
    pub max_findings: usize,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            fail_on: FailOn::Error,
            max_findings: 200,
        }
    }
}
