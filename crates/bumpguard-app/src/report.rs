use anyhow::Context;
use bumpguard_render::{
    RenderableData, RenderableDependency, RenderableFinding, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
use bumpguard_types::{
    ids, BumpguardData, BumpguardReport, Finding, Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<BumpguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse bumpguard report")
}

pub fn serialize_report(report: &BumpguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &BumpguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            dependencies_scanned: report.data.dependencies_scanned,
            dependencies_skipped: report.data.dependencies_skipped,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        dependency: f.dependency.as_ref().map(|d| RenderableDependency {
            coordinate: d.coordinate().to_string(),
            version: d.version.clone(),
            scope: d.scope.clone(),
        }),
        help: f.help.clone(),
    }
}

/// A failing report describing a runtime error, so CI always gets an artifact.
pub fn runtime_error_report(message: &str) -> BumpguardReport {
    let now = OffsetDateTime::now_utc();
    BumpguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "bumpguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            dependency: None,
            help: Some("Fix the configuration or input and re-run bumpguard.".to_string()),
            data: serde_json::Value::Null,
        }],
        data: BumpguardData {
            findings_total: 1,
            findings_emitted: 1,
            ..BumpguardData::default()
        },
    }
}
