//! Version-update restrictions.
//!
//! A restriction is a pure predicate over version strings. The set of variants is closed;
//! call sites that need one particular variant ask for it by [`RestrictionKind`].

use crate::stream::VersionStream;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RestrictionKind {
    Never,
    Ignore,
    Qualifier,
    VersionPrefix,
    VersionStream,
}

impl RestrictionKind {
    pub const ALL: [RestrictionKind; 5] = [
        RestrictionKind::Never,
        RestrictionKind::Ignore,
        RestrictionKind::Qualifier,
        RestrictionKind::VersionPrefix,
        RestrictionKind::VersionStream,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionKind::Never => "never",
            RestrictionKind::Ignore => "ignore",
            RestrictionKind::Qualifier => "qualifier",
            RestrictionKind::VersionPrefix => "prefix",
            RestrictionKind::VersionStream => "stream",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required leading text of acceptable versions, e.g. `7.` for "stay on 7.x".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionPrefix {
    prefix: String,
}

impl VersionPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix_string(&self) -> &str {
        &self.prefix
    }

    pub fn applies(&self, candidate: &str) -> bool {
        candidate.starts_with(&self.prefix)
    }
}

/// Qualifier fragments matched as ASCII case-insensitive substrings of a version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QualifierSet(BTreeSet<String>);

impl QualifierSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any qualifier occurs in `version`.
    pub fn matches(&self, version: &str) -> bool {
        let version = version.to_ascii_lowercase();
        self.0
            .iter()
            .any(|q| version.contains(&q.to_ascii_lowercase()))
    }
}

impl<S: Into<String>> FromIterator<S> for QualifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Restriction {
    /// Never upgrade.
    Never,
    /// Never upgrade to a version carrying one of these qualifiers.
    Ignore(QualifierSet),
    /// Only upgrade to versions carrying one of these qualifiers.
    Qualifier(QualifierSet),
    /// Only upgrade to versions starting with the prefix.
    VersionPrefix(VersionPrefix),
    /// Only upgrade within the stream of the current version.
    VersionStream(VersionStream),
}

impl Restriction {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Restriction::VersionPrefix(VersionPrefix::new(prefix))
    }

    pub fn qualifier<S: Into<String>>(qualifiers: impl IntoIterator<Item = S>) -> Self {
        Restriction::Qualifier(qualifiers.into_iter().collect())
    }

    pub fn ignore<S: Into<String>>(qualifiers: impl IntoIterator<Item = S>) -> Self {
        Restriction::Ignore(qualifiers.into_iter().collect())
    }

    pub fn kind(&self) -> RestrictionKind {
        match self {
            Restriction::Never => RestrictionKind::Never,
            Restriction::Ignore(_) => RestrictionKind::Ignore,
            Restriction::Qualifier(_) => RestrictionKind::Qualifier,
            Restriction::VersionPrefix(_) => RestrictionKind::VersionPrefix,
            Restriction::VersionStream(_) => RestrictionKind::VersionStream,
        }
    }

    /// Whether upgrading from `current` to `candidate` is acceptable under this restriction.
    pub fn applies(&self, candidate: &str, current: &str) -> bool {
        match self {
            Restriction::Never => false,
            Restriction::Ignore(qualifiers) => !qualifiers.matches(candidate),
            Restriction::Qualifier(qualifiers) => qualifiers.matches(candidate),
            Restriction::VersionPrefix(prefix) => prefix.applies(candidate),
            Restriction::VersionStream(stream) => stream.contains(candidate, current),
        }
    }

    pub fn as_version_prefix(&self) -> Option<&VersionPrefix> {
        match self {
            Restriction::VersionPrefix(prefix) => Some(prefix),
            _ => None,
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::Never => f.write_str("never"),
            Restriction::Ignore(q) => {
                write!(f, "ignore [{}]", q.iter().collect::<Vec<_>>().join(", "))
            }
            Restriction::Qualifier(q) => {
                write!(f, "qualifier [{}]", q.iter().collect::<Vec<_>>().join(", "))
            }
            Restriction::VersionPrefix(p) => write!(f, "prefix '{}'", p.prefix_string()),
            Restriction::VersionStream(s) => write!(f, "stream {s}"),
        }
    }
}

/// First restriction of `kind` in `restrictions`.
pub fn find_kind(restrictions: &[Restriction], kind: RestrictionKind) -> Option<&Restriction> {
    restrictions.iter().find(|r| r.kind() == kind)
}
