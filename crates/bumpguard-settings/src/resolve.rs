use crate::model::{BumpguardConfigV1, GitConfig, GitHubConfig, LoggerConfig};
use anyhow::Context;
use bumpguard_domain::{FailOn, ScanPolicy, UpdatePolicy};
use bumpguard_types::Severity;
use indexmap::IndexMap;

pub const DEFAULT_REPOSITORY_NAME: &str = "Central";
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2/";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub severity: Option<String>,
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
}

/// Everything built from the config at startup. Immutable once resolved.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: UpdatePolicy,
    pub scan: ScanPolicy,
    pub repositories: IndexMap<String, String>,
    pub github: Option<GitHubConfig>,
    pub git: Option<GitConfig>,
    pub logger: Option<LoggerConfig>,
}

pub fn resolve_config(
    cfg: BumpguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let policy = UpdatePolicy::from_document(&cfg.rules, cfg.ignore_scopes)
        .context("invalid rules")?;

    let mut scan = ScanPolicy::default();

    if let Some(sev) = overrides.severity.as_deref().or(cfg.severity.as_deref()) {
        scan.severity = parse_severity(sev)?;
    }

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        scan.fail_on = parse_fail_on(fail_on)?;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        scan.max_findings = mf as usize;
    }

    let repositories = cfg.repositories.unwrap_or_else(default_repositories);

    Ok(ResolvedConfig {
        policy,
        scan,
        repositories,
        github: cfg.github,
        git: cfg.git,
        logger: cfg.logger,
    })
}

fn default_repositories() -> IndexMap<String, String> {
    IndexMap::from([(
        DEFAULT_REPOSITORY_NAME.to_string(),
        DEFAULT_REPOSITORY_URL.to_string(),
    )])
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
