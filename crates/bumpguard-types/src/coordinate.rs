use crate::ids::COORDINATE_SEPARATOR;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scope assumed for a dependency reference that does not declare one.
pub const DEFAULT_SCOPE: &str = "compile";

/// A `(group, artifact)` pair identifying a dependency or a rule key.
///
/// Either half may be a wildcard pattern when the coordinate is used as a rule key.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, COORDINATE_SEPARATOR, self.artifact)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate '{0}': expected 'group:artifact'")]
pub struct CoordinateParseError(pub String);

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    /// Parses `group:artifact`. Exactly one separator and a non-empty artifact are required;
    /// an empty group is kept as a literal empty group id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((group, artifact)) = s.split_once(COORDINATE_SEPARATOR) else {
            return Err(CoordinateParseError(s.to_string()));
        };
        if artifact.is_empty() || artifact.contains(COORDINATE_SEPARATOR) {
            return Err(CoordinateParseError(s.to_string()));
        }
        Ok(Coordinate::new(group, artifact))
    }
}

/// A dependency as it is currently used: coordinate plus version and scope.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

impl DependencyRef {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: scope.into(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} ({})",
            self.group_id, self.artifact_id, self.version, self.scope
        )
    }
}
