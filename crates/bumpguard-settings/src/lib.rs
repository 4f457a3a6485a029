//! Config parsing and policy resolution.
//!
//! This crate is IO-free. It parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{BumpguardConfigV1, GitConfig, GitHubConfig, LoggerConfig};
pub use resolve::{
    Overrides, ResolvedConfig, DEFAULT_REPOSITORY_NAME, DEFAULT_REPOSITORY_URL,
};

/// Input format of a config document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `toml` is read as JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Parse `bumpguard.json` (or equivalent) into a typed model.
pub fn parse_config_json(input: &str) -> anyhow::Result<BumpguardConfigV1> {
    let cfg: BumpguardConfigV1 = serde_json::from_str(input)?;
    Ok(cfg)
}

/// Parse `bumpguard.toml` into the same typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<BumpguardConfigV1> {
    let cfg: BumpguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse config text; blank text yields the default (empty) config.
pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<BumpguardConfigV1> {
    if input.trim().is_empty() {
        return Ok(BumpguardConfigV1::default());
    }
    match format {
        ConfigFormat::Json => parse_config_json(input),
        ConfigFormat::Toml => parse_config_toml(input),
    }
}

/// Resolve the effective policy and report settings used by the engine.
pub fn resolve_config(
    cfg: BumpguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema of the config document.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(BumpguardConfigV1)
}
