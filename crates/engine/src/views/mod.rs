//! Derived educational views over the authoritative finding list.
//!
//! Every generator is a pure function producing exactly one entry per
//! finding, in finding order. Views explain findings; they are never
//! consulted by the risk engine, and nothing positional leaves the pipeline:
//! the orchestrator re-keys each view by finding id.

pub mod attacker;
pub mod defender;
pub mod impact;
pub mod payloads;

pub use attacker::AttackerEntry;
pub use defender::DefenderFix;
pub use impact::ImpactEntry;
pub use payloads::SimulatedPayload;

#[cfg(test)]
mod tests {
    use crate::core::{Confidence, Finding, Severity};

    fn sample_findings() -> Vec<Finding> {
        vec![
            Finding::new(
                "sql-injection",
                "SQL Injection",
                Severity::High,
                Confidence::High,
                "concatenated query",
            ),
            Finding::new(
                "xss",
                "Cross-Site Scripting (XSS)",
                Severity::Medium,
                Confidence::Medium,
                "reflected output",
            ),
            Finding::new(
                "weak-crypto",
                "Weak Cryptography",
                Severity::Medium,
                Confidence::Medium,
                "md5 in use",
            ),
        ]
    }

    #[test]
    fn every_view_aligns_with_findings() {
        let findings = sample_findings();
        assert_eq!(super::attacker::generate(&findings).len(), findings.len());
        assert_eq!(super::defender::generate(&findings).len(), findings.len());
        assert_eq!(super::payloads::generate(&findings).len(), findings.len());
        assert_eq!(super::impact::generate(&findings).len(), findings.len());
    }

    #[test]
    fn empty_findings_yield_empty_views() {
        assert!(super::attacker::generate(&[]).is_empty());
        assert!(super::defender::generate(&[]).is_empty());
        assert!(super::payloads::generate(&[]).is_empty());
        assert!(super::impact::generate(&[]).is_empty());
    }

    #[test]
    fn payloads_are_labeled_non_functional() {
        let findings = sample_findings();
        for entry in super::payloads::generate(&findings) {
            assert!(entry
                .payloads
                .iter()
                .all(|p| p.contains("illustrative") || p.contains("non-functional")));
        }
    }
}
