use crate::policy::FailOn;
use bumpguard_types::{BumpguardData, Finding, Severity, Verdict};

/// Outcome of one out-of-date scan.
///
/// `findings` may be cut short by `max_findings`; `verdict` and `data.findings_total` always
/// describe every out-of-date dependency.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: BumpguardData,
}

impl DomainReport {
    /// Out-of-date dependencies that were found but not emitted.
    pub fn omitted(&self) -> u32 {
        self.data.findings_total - self.data.findings_emitted
    }
}

/// Verdict for `out_of_date` dependencies all reported at `severity`.
pub(crate) fn verdict_for(out_of_date: usize, severity: Severity, fail_on: FailOn) -> Verdict {
    if out_of_date == 0 {
        return Verdict::Pass;
    }
    match (severity, fail_on) {
        (Severity::Error, _) | (_, FailOn::Warning) => Verdict::Fail,
        (Severity::Warning | Severity::Info, FailOn::Error) => Verdict::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_out_of_date_always_passes() {
        for severity in [Severity::Info, Severity::Warning, Severity::Error] {
            for fail_on in [FailOn::Error, FailOn::Warning] {
                assert_eq!(verdict_for(0, severity, fail_on), Verdict::Pass);
            }
        }
    }

    #[test]
    fn error_severity_fails_regardless_of_fail_on() {
        assert_eq!(verdict_for(1, Severity::Error, FailOn::Error), Verdict::Fail);
        assert_eq!(verdict_for(3, Severity::Error, FailOn::Warning), Verdict::Fail);
    }

    #[test]
    fn lower_severities_warn_unless_fail_on_warning() {
        assert_eq!(verdict_for(2, Severity::Warning, FailOn::Error), Verdict::Warn);
        assert_eq!(verdict_for(2, Severity::Info, FailOn::Error), Verdict::Warn);
        assert_eq!(verdict_for(2, Severity::Info, FailOn::Warning), Verdict::Fail);
    }
}
