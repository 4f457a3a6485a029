use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title={coordinate}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let check_id = f.check_id.as_deref().unwrap_or("bumpguard");
        let message = escape_data(&format!("[{}:{}] {}", check_id, f.code, f.message));

        match &f.dependency {
            Some(dep) => out.push(format!(
                "::{} title={}::{}",
                level,
                escape_property(&dep.coordinate),
                message
            )),
            None => out.push(format!("::{}::{}", level, message)),
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableData, RenderableDependency, RenderableFinding, RenderableVerdictStatus,
    };

    fn report(findings: Vec<RenderableFinding>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            data: RenderableData {
                dependencies_scanned: 1,
                dependencies_skipped: 0,
                findings_emitted: findings.len() as u32,
                findings_total: findings.len() as u32,
                truncated_reason: None,
            },
            findings,
        }
    }

    #[test]
    fn annotation_carries_coordinate_title() {
        let out = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Error,
            check_id: Some("rules.version_prefix".to_string()),
            code: "prefix_mismatch".to_string(),
            message: "100% out of date\nreally".to_string(),
            dependency: Some(RenderableDependency {
                coordinate: "org.jboss:core".to_string(),
                version: "6.9".to_string(),
                scope: "compile".to_string(),
            }),
            help: None,
        }]));

        assert_eq!(
            out,
            vec![
                "::error title=org.jboss%3Acore::[rules.version_prefix:prefix_mismatch] 100%25 out of date%0Areally"
                    .to_string()
            ]
        );
    }

    #[test]
    fn annotation_without_dependency_has_no_properties() {
        let out = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Info,
            check_id: None,
            code: "note".to_string(),
            message: "hello".to_string(),
            dependency: None,
            help: None,
        }]));
        assert_eq!(out, vec!["::notice::[bumpguard:note] hello".to_string()]);
    }
}
