//! The `check` use case: resolve the policy and report out-of-date dependencies.

use anyhow::Context;
use bumpguard_settings::{ConfigFormat, Overrides, ResolvedConfig};
use bumpguard_types::{BumpguardReport, DependencyRef, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
    /// JSON array of live dependencies.
    pub dependencies_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: BumpguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text. Blank text means defaults.
pub fn load_config(
    config_text: &str,
    format: ConfigFormat,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = bumpguard_settings::parse_config(config_text, format).context("parse config")?;
    bumpguard_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Parse the dependency list handed over by the build-tool integration.
pub fn parse_dependencies_json(text: &str) -> anyhow::Result<Vec<DependencyRef>> {
    serde_json::from_str(text).context("parse dependencies json")
}

/// Run the check use case: parse config, read dependencies, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.config_format, input.overrides)?;
    let dependencies = parse_dependencies_json(input.dependencies_text)?;

    tracing::info!(
        rules = resolved.policy.rules().len(),
        dependencies = dependencies.len(),
        "checking dependencies against update rules"
    );

    let domain_report =
        bumpguard_domain::evaluate(&resolved.policy, &dependencies, &resolved.scan);
    if domain_report.omitted() > 0 {
        tracing::warn!(
            omitted = domain_report.omitted(),
            max_findings = resolved.scan.max_findings,
            "out-of-date findings truncated"
        );
    }

    let report = BumpguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "bumpguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
