use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `bumpguard.json` schema v1.
///
/// This is a *user-facing* config model: `rules` stays a raw document so that rule validation
/// happens in one place (the domain registry build) with coordinate context attached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BumpguardConfigV1 {
    /// Optional schema string for tooling (`bumpguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of `group:artifact` -> `NEVER`, a stream name, or a table of rule keys.
    #[serde(default)]
    pub rules: Map<String, Value>,

    /// Dependency scopes that are never evaluated.
    #[serde(default)]
    pub ignore_scopes: Vec<String>,

    /// Display name -> repository base URL. Defaults to Maven Central when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<IndexMap<String, String>>,

    #[serde(default, rename = "gitHub", skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logger: Option<LoggerConfig>,

    /// Severity of out-of-date findings: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,
}

/// Pull-request target settings, consumed by the update job runner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitHubConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_base_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_branch: Option<String>,
}

/// Where upgrade events are logged for later reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
}
