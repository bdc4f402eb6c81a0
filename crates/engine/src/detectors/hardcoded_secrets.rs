//! Hardcoded credential detection for code and config input.

use super::Detector;
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::NormalizedInput;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static SECRET_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)["']?(password|passwd|pwd|secret|api[_-]?key|access[_-]?token|auth[_-]?token|private[_-]?key)["']?\s*[:=]\s*["']([^"']{4,})["']"#,
    )
    .expect("secret assignment pattern")
});

/// Values that are clearly placeholders, not credentials.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^(\$\{[^}]*\}|<[^>]*>|x+|\*+|changeme|placeholder|example|your[_-])"#)
        .expect("placeholder pattern")
});

pub struct HardcodedSecretsDetector;

impl HardcodedSecretsDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardcodedSecretsDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for HardcodedSecretsDetector {
    fn id(&self) -> &'static str {
        "hardcoded-secrets"
    }

    fn name(&self) -> &'static str {
        "Hardcoded Secrets Detector"
    }

    fn description(&self) -> &'static str {
        "Detects credentials embedded as literals in code or configuration"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn confidence(&self) -> Confidence {
        Confidence::Medium
    }

    fn detect(&self, input: &NormalizedInput) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for block in &input.blocks {
            for caps in SECRET_ASSIGNMENT.captures_iter(&block.content) {
                let value = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                if PLACEHOLDER.is_match(value) {
                    continue;
                }

                let key = caps.get(1).map(|m| m.as_str()).unwrap_or("credential");
                let mut finding = Finding::new(
                    self.id(),
                    "Hardcoded Secret",
                    self.severity(),
                    self.confidence(),
                    format!(
                        "A value assigned to '{}' is embedded as a literal; anyone with read access to this text holds the credential.",
                        key.to_ascii_lowercase()
                    ),
                )
                .with_owasp("A07:2021 - Identification and Authentication Failures")
                .with_recommendation(
                    "Load credentials from the environment or a secret manager; never commit them to source or config files.",
                );
                if let Some(location) = &block.location {
                    finding = finding.with_location(location.clone());
                }
                findings.push(finding);
            }
        }

        Ok(findings)
    }
}
