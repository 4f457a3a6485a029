//! Rule registry: `group pattern -> artifact pattern -> restrictions`.
//!
//! Group patterns are a literal group id, a prefix pattern (`org.jboss.*`), or the bare
//! wildcard `*`. Artifact patterns are a literal artifact id or `*`.
//!
//! Lookup precedence, first tier with a match wins:
//! 1. `group:artifact`
//! 2. `group:*`
//! 3. `prefix*:artifact`
//! 4. `prefix*:*`
//! 5. `*:artifact`
//! 6. `*:*`
//!
//! Prefix patterns are tried in declaration order within tiers 3 and 4.

use crate::restriction::{find_kind, Restriction, RestrictionKind};
use bumpguard_types::ids::WILDCARD;
use bumpguard_types::Coordinate;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
enum GroupPattern {
    Literal,
    Prefix(String),
    Any,
}

impl GroupPattern {
    fn parse(group: &str) -> Self {
        if group == WILDCARD {
            return GroupPattern::Any;
        }
        match group.strip_suffix(WILDCARD) {
            Some(prefix) if !prefix.is_empty() => GroupPattern::Prefix(prefix.to_string()),
            _ => GroupPattern::Literal,
        }
    }
}

#[derive(Clone, Debug)]
struct GroupRules {
    pattern: GroupPattern,
    artifacts: HashMap<String, Vec<Restriction>>,
}

impl GroupRules {
    fn artifact(&self, artifact: &str) -> Option<&[Restriction]> {
        self.artifacts.get(artifact).map(Vec::as_slice)
    }

    fn artifact_or_wildcard(&self, artifact: &str) -> Option<&[Restriction]> {
        self.artifact(artifact).or_else(|| self.artifact(WILDCARD))
    }

    fn covers_group(&self, group: &str) -> bool {
        matches!(&self.pattern, GroupPattern::Prefix(prefix) if group.starts_with(prefix.as_str()))
    }
}

/// Immutable lookup structure built once from the rule document.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    /// Declaration order; drives prefix-pattern scanning.
    groups: Vec<GroupRules>,
    by_group: HashMap<String, usize>,
    rule_count: usize,
}

impl RuleRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Restrictions applying to `group:artifact`; empty when no pattern matches.
    pub fn restrictions_for(&self, group: &str, artifact: &str) -> &[Restriction] {
        self.resolve(group, artifact).unwrap_or(&[])
    }

    /// First restriction of `kind` applying to `group:artifact`.
    pub fn restriction_for(
        &self,
        group: &str,
        artifact: &str,
        kind: RestrictionKind,
    ) -> Option<&Restriction> {
        find_kind(self.restrictions_for(group, artifact), kind)
    }

    /// Number of distinct `group:artifact` keys that carry at least one restriction.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    fn group(&self, group: &str) -> Option<&GroupRules> {
        self.by_group.get(group).map(|&idx| &self.groups[idx])
    }

    fn resolve(&self, group: &str, artifact: &str) -> Option<&[Restriction]> {
        if let Some(found) = self
            .group(group)
            .and_then(|rules| rules.artifact_or_wildcard(artifact))
        {
            return Some(found);
        }

        let prefixed = || self.groups.iter().filter(|rules| rules.covers_group(group));
        if let Some(found) = prefixed().find_map(|rules| rules.artifact(artifact)) {
            return Some(found);
        }
        if let Some(found) = prefixed().find_map(|rules| rules.artifact(WILDCARD)) {
            return Some(found);
        }

        self.group(WILDCARD)
            .and_then(|rules| rules.artifact_or_wildcard(artifact))
    }
}

/// Mutable accumulator used while reading the rule document.
///
/// Restrictions are appended per key, never replaced. [`RegistryBuilder::build`] freezes the
/// result into a [`RuleRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: Vec<GroupRules>,
    by_group: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn push(&mut self, key: &Coordinate, restriction: Restriction) -> &mut Self {
        let idx = match self.by_group.get(&key.group) {
            Some(&idx) => idx,
            None => {
                self.groups.push(GroupRules {
                    pattern: GroupPattern::parse(&key.group),
                    artifacts: HashMap::new(),
                });
                let idx = self.groups.len() - 1;
                self.by_group.insert(key.group.clone(), idx);
                idx
            }
        };
        self.groups[idx]
            .artifacts
            .entry(key.artifact.clone())
            .or_default()
            .push(restriction);
        self
    }

    pub fn build(self) -> RuleRegistry {
        let rule_count = self.groups.iter().map(|g| g.artifacts.len()).sum();
        RuleRegistry {
            groups: self.groups,
            by_group: self.by_group,
            rule_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::VersionStream;

    fn registry(entries: &[(&str, &str, Restriction)]) -> RuleRegistry {
        let mut builder = RuleRegistry::builder();
        for (group, artifact, restriction) in entries {
            builder.push(&Coordinate::new(*group, *artifact), restriction.clone());
        }
        builder.build()
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let reg = RuleRegistry::default();
        assert!(reg.restrictions_for("org.foo", "bar").is_empty());
        assert!(reg.is_empty());
    }

    #[test]
    fn exact_outranks_group_wildcard() {
        let reg = registry(&[
            ("org.foo", "*", Restriction::prefix("B")),
            ("org.foo", "bar", Restriction::prefix("A")),
        ]);
        assert_eq!(reg.restrictions_for("org.foo", "bar"), &[Restriction::prefix("A")]);
        assert_eq!(reg.restrictions_for("org.foo", "baz"), &[Restriction::prefix("B")]);
    }

    #[test]
    fn prefix_pattern_requires_starts_with() {
        let reg = registry(&[("org.*", "bar", Restriction::prefix("C"))]);
        assert_eq!(reg.restrictions_for("org.foo", "bar"), &[Restriction::prefix("C")]);
        assert!(reg.restrictions_for("other", "bar").is_empty());
        assert!(reg.restrictions_for("org.foo", "baz").is_empty());
    }

    #[test]
    fn universal_rule_is_the_last_resort() {
        let reg = registry(&[
            ("*", "*", Restriction::prefix("D")),
            ("*", "bar", Restriction::prefix("E")),
            ("org.*", "*", Restriction::prefix("F")),
        ]);
        assert_eq!(reg.restrictions_for("com.x", "y"), &[Restriction::prefix("D")]);
        assert_eq!(reg.restrictions_for("com.x", "bar"), &[Restriction::prefix("E")]);
        assert_eq!(reg.restrictions_for("org.x", "bar"), &[Restriction::prefix("F")]);
    }

    #[test]
    fn tiers_are_not_merged() {
        let reg = registry(&[
            ("org.foo", "*", Restriction::Never),
            ("org.*", "bar", Restriction::prefix("1.")),
            ("*", "*", Restriction::qualifier(["Final"])),
        ]);
        assert_eq!(reg.restrictions_for("org.foo", "bar"), &[Restriction::Never]);
    }

    #[test]
    fn prefix_exact_artifact_beats_earlier_prefix_wildcard() {
        let reg = registry(&[
            ("org.*", "*", Restriction::prefix("wide")),
            ("org.jboss.*", "core", Restriction::prefix("narrow")),
        ]);
        assert_eq!(
            reg.restrictions_for("org.jboss.as", "core"),
            &[Restriction::prefix("narrow")]
        );
        assert_eq!(
            reg.restrictions_for("org.jboss.as", "other"),
            &[Restriction::prefix("wide")]
        );
    }

    #[test]
    fn overlapping_prefixes_use_declaration_order() {
        let reg = registry(&[
            ("org.*", "bar", Restriction::prefix("first")),
            ("org.jboss.*", "bar", Restriction::prefix("second")),
        ]);
        assert_eq!(
            reg.restrictions_for("org.jboss.as", "bar"),
            &[Restriction::prefix("first")]
        );
    }

    #[test]
    fn restrictions_accumulate_in_order_with_duplicates() {
        let reg = registry(&[
            ("g", "a", Restriction::qualifier(["Final"])),
            ("g", "a", Restriction::VersionStream(VersionStream::Minor)),
            ("g", "a", Restriction::qualifier(["Final"])),
        ]);
        assert_eq!(
            reg.restrictions_for("g", "a"),
            &[
                Restriction::qualifier(["Final"]),
                Restriction::VersionStream(VersionStream::Minor),
                Restriction::qualifier(["Final"]),
            ]
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn restriction_for_filters_by_kind() {
        let reg = registry(&[
            ("com.x", "y", Restriction::qualifier(["Final"])),
            ("com.x", "y", Restriction::prefix("2.")),
        ]);
        assert_eq!(
            reg.restriction_for("com.x", "y", RestrictionKind::VersionPrefix),
            Some(&Restriction::prefix("2."))
        );
        assert_eq!(reg.restriction_for("com.x", "y", RestrictionKind::Never), None);
        assert_eq!(
            reg.restriction_for("com.x", "z", RestrictionKind::Qualifier),
            None
        );
    }

    #[test]
    fn bare_star_suffix_is_not_a_prefix_pattern() {
        assert_eq!(GroupPattern::parse("*"), GroupPattern::Any);
        assert_eq!(
            GroupPattern::parse("org.*"),
            GroupPattern::Prefix("org.".to_string())
        );
        assert_eq!(GroupPattern::parse("org"), GroupPattern::Literal);
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleRegistry>();
    }
}
