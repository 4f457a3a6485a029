//! Render use cases over a finished bumpguard report.

use crate::report::to_renderable;
use bumpguard_types::BumpguardReport;

pub fn render_markdown(report: &BumpguardReport) -> String {
    bumpguard_render::render_markdown(&to_renderable(report))
}

/// GitHub Actions annotations for at most `max` findings.
///
/// When findings were left out (by `max` here or by `maxFindings` during the check) a single
/// `::notice::` line saying how many follows the annotations.
pub fn render_annotations(report: &BumpguardReport, max: usize) -> Vec<String> {
    let mut out: Vec<String> =
        bumpguard_render::render_github_annotations(&to_renderable(report))
            .into_iter()
            .take(max)
            .collect();

    let not_annotated = (report.data.findings_total as usize).saturating_sub(out.len());
    if not_annotated > 0 {
        out.push(format!(
            "::notice title=bumpguard::{not_annotated} more out-of-date dependencies not \
             annotated; see the report"
        ));
    }
    out
}
