//! Deterministic risk scoring.
//!
//! The composite score is a pure function of the finding list: severity
//! weight scaled by confidence, summed, capped at 100. Adding a finding or
//! raising any finding's severity/confidence never decreases the score, and
//! the output is always a finite non-negative number.

use crate::core::Finding;

pub const MAX_SCORE: f64 = 100.0;

pub fn score(findings: &[Finding]) -> f64 {
    if findings.is_empty() {
        return 0.0;
    }

    let raw: f64 = findings
        .iter()
        .map(|f| f.severity.weight() * f.confidence.factor())
        .sum();

    if !raw.is_finite() {
        return 0.0;
    }

    raw.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Confidence, Severity};

    fn finding(severity: Severity, confidence: Confidence) -> Finding {
        Finding::new("test", "Test", severity, confidence, "test finding")
    }

    #[test]
    fn empty_list_scores_zero() {
        assert_eq!(score(&[]), 0.0);
    }

    #[test]
    fn score_is_monotonic_in_count() {
        let mut findings = Vec::new();
        let mut previous = 0.0;
        for _ in 0..10 {
            findings.push(finding(Severity::Medium, Confidence::Medium));
            let current = score(&findings);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn score_is_monotonic_in_severity() {
        let low = score(&[finding(Severity::Low, Confidence::High)]);
        let medium = score(&[finding(Severity::Medium, Confidence::High)]);
        let high = score(&[finding(Severity::High, Confidence::High)]);
        let critical = score(&[finding(Severity::Critical, Confidence::High)]);
        assert!(low <= medium && medium <= high && high <= critical);
        assert!(low < critical);
    }

    #[test]
    fn score_is_capped_and_finite() {
        let findings: Vec<_> = (0..50)
            .map(|_| finding(Severity::Critical, Confidence::High))
            .collect();
        let result = score(&findings);
        assert!(result.is_finite());
        assert_eq!(result, MAX_SCORE);
    }

    #[test]
    fn confidence_scales_down() {
        let sure = score(&[finding(Severity::High, Confidence::High)]);
        let unsure = score(&[finding(Severity::High, Confidence::Low)]);
        assert!(unsure < sure);
        assert!(unsure > 0.0);
    }
}
