use crate::policy::{OutOfDate, ScanPolicy, UpdatePolicy};
use crate::report::{verdict_for, DomainReport};
use bumpguard_types::{ids, BumpguardData, DependencyRef, Finding, Severity};
use serde_json::json;

/// Evaluate live dependencies against the update policy and produce findings + verdict.
pub fn evaluate(
    policy: &UpdatePolicy,
    dependencies: &[DependencyRef],
    scan: &ScanPolicy,
) -> DomainReport {
    let out_of_date = policy.find_out_of_date(dependencies);

    // `OutOfDate` orders by (group, artifact, version, scope, prefix), so the set
    // iteration order is already deterministic.
    let mut findings: Vec<Finding> = out_of_date
        .into_iter()
        .map(|o| to_finding(o, scan.severity))
        .collect();

    let total = findings.len() as u32;
    let verdict = verdict_for(findings.len(), scan.severity, scan.fail_on);

    let mut truncated_reason: Option<String> = None;
    if findings.len() > scan.max_findings {
        findings.truncate(scan.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            scan.max_findings
        ));
    }

    let skipped = dependencies
        .iter()
        .filter(|d| policy.is_scope_ignored(&d.scope))
        .count() as u32;

    let data = BumpguardData {
        rules_loaded: policy.rules().len() as u32,
        dependencies_scanned: dependencies.len() as u32 - skipped,
        dependencies_skipped: skipped,
        findings_total: total,
        findings_emitted: findings.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings,
        data,
    }
}

fn to_finding(out_of_date: OutOfDate, severity: Severity) -> Finding {
    let OutOfDate {
        dependency,
        required_prefix,
    } = out_of_date;

    Finding {
        severity,
        check_id: ids::CHECK_RULES_VERSION_PREFIX.to_string(),
        code: ids::CODE_PREFIX_MISMATCH.to_string(),
        message: format!(
            "dependency '{}' is at {}, which does not start with required prefix '{}'",
            dependency.coordinate(),
            dependency.version,
            required_prefix
        ),
        help: Some(format!(
            "Move '{}' to a version starting with '{}' or relax its PREFIX rule.",
            dependency.coordinate(),
            required_prefix
        )),
        data: json!({
            "coordinate": dependency.coordinate().to_string(),
            "version": dependency.version,
            "scope": dependency.scope,
            "required_prefix": required_prefix,
        }),
        dependency: Some(dependency),
    }
}
