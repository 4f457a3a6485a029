use crate::stream::UnknownStream;

/// A single rule value that could not be turned into a restriction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error(transparent)]
    UnknownStream(#[from] UnknownStream),

    #[error("unknown rule kind")]
    UnknownRuleKind,

    #[error("{expected} expected, {found} given")]
    InvalidValueType {
        expected: &'static str,
        found: &'static str,
    },
}

/// Rule document rejected while building the registry.
///
/// Construction is all-or-nothing: any of these aborts the build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid rule key '{key}': expected 'group:artifact'")]
    MalformedKey { key: String },

    #[error("only one of STREAM and PREFIX keys can be defined for {coordinate}")]
    ConflictingRestriction { coordinate: String },

    #[error("configuration error for rule {coordinate}:{rule}: {source}")]
    Rule {
        coordinate: String,
        rule: String,
        #[source]
        source: RuleError,
    },
}

impl RegistryError {
    pub(crate) fn rule(coordinate: &str, rule: &str, source: impl Into<RuleError>) -> Self {
        RegistryError::Rule {
            coordinate: coordinate.to_string(),
            rule: rule.to_string(),
            source: source.into(),
        }
    }

    /// The underlying rule failure, when the error is about one rule value.
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            RegistryError::Rule { source, .. } => Some(source),
            _ => None,
        }
    }
}
