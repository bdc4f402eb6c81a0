//! Dangerous dynamic-evaluation function detection for code input.

use super::Detector;
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::{ContentKind, NormalizedInput};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static DANGEROUS_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\beval\s*\(|\bnew\s+Function\s*\(|\bset(Timeout|Interval)\s*\(\s*["'`]|\bvm\s*\.\s*(runInContext|runInNewContext|runInThisContext)\s*\("#,
    )
    .expect("dangerous call pattern")
});

pub struct DangerousFunctionsDetector;

impl DangerousFunctionsDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DangerousFunctionsDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for DangerousFunctionsDetector {
    fn id(&self) -> &'static str {
        "dangerous-functions"
    }

    fn name(&self) -> &'static str {
        "Dangerous Functions Detector"
    }

    fn description(&self) -> &'static str {
        "Detects dynamic code evaluation (eval, new Function, string timers)"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn confidence(&self) -> Confidence {
        Confidence::High
    }

    fn detect(&self, input: &NormalizedInput) -> Result<Vec<Finding>> {
        if input.kind != ContentKind::Code {
            return Ok(Vec::new());
        }

        let mut findings = Vec::new();
        for block in &input.blocks {
            if !DANGEROUS_CALL.is_match(&block.content) {
                continue;
            }

            let mut finding = Finding::new(
                self.id(),
                "Dangerous Function Usage",
                self.severity(),
                self.confidence(),
                "Dynamic code evaluation executes whatever string it is given; any attacker influence over that string becomes code execution.",
            )
            .with_owasp("A03:2021 - Injection")
            .with_recommendation(
                "Remove eval-style constructs; use data structures, JSON parsing, or explicit function dispatch instead.",
            );
            if let Some(location) = &block.location {
                finding = finding.with_location(location.clone());
            }
            findings.push(finding);
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputKind;
    use crate::normalize::normalize;

    #[test]
    fn detects_eval() {
        let input = normalize(InputKind::Code, "eval('1+1')", "javascript");
        let findings = DangerousFunctionsDetector::new().detect(&input).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].confidence, Confidence::High);
    }

    #[test]
    fn detects_string_timer() {
        let input = normalize(
            InputKind::Code,
            r#"setTimeout("doWork()", 100);"#,
            "javascript",
        );
        assert_eq!(
            DangerousFunctionsDetector::new().detect(&input).unwrap().len(),
            1
        );
    }

    #[test]
    fn function_timer_is_clean() {
        let input = normalize(
            InputKind::Code,
            "setTimeout(() => doWork(), 100);",
            "javascript",
        );
        assert!(DangerousFunctionsDetector::new()
            .detect(&input)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn evaluate_identifier_is_not_eval() {
        let input = normalize(InputKind::Code, "evaluateRules(input);", "javascript");
        assert!(DangerousFunctionsDetector::new()
            .detect(&input)
            .unwrap()
            .is_empty());
    }
}
