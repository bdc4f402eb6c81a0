//! SQL injection detection over code and SQL input.
//!
//! For code-family blocks the detector looks for a SQL verb inside a string
//! that is built by concatenation or interpolation. For pure SQL statements
//! it looks for injection evidence left in the statement itself (tautologies,
//! stacked statements, UNION-based extraction).

use super::{promote_if_tainted, DetectionWindow, Detector};
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::{ContentKind, NormalizedInput};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static SQL_SINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(select|insert|update|delete)\b[^;]*\b(from|into|set|where)\b"#)
        .expect("sql sink pattern")
});

static CONCAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(["'`]\s*\+)|(\+\s*["'`])|(\$\{[^}]*\})"#).expect("concat pattern")
});

static TAINTED_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(req\.(query|body|params|headers|cookies)|userinput|user_input|request\.(args|form|get)|process\.argv)\b"#)
        .expect("source pattern")
});

static SQL_EVIDENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\bor\b\s+'?\d+'?\s*=\s*'?\d+'?)|(\bunion\b\s+(all\s+)?select\b)|('\s*--)"#)
        .expect("sql evidence pattern")
});

pub struct SqlInjectionDetector;

impl SqlInjectionDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlInjectionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SqlInjectionDetector {
    fn id(&self) -> &'static str {
        "sql-injection"
    }

    fn name(&self) -> &'static str {
        "SQL Injection Detector"
    }

    fn description(&self) -> &'static str {
        "Detects SQL statements built from untrusted input via concatenation or interpolation"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn confidence(&self) -> Confidence {
        Confidence::Medium
    }

    fn window(&self) -> DetectionWindow {
        DetectionWindow::Input
    }

    fn detect(&self, input: &NormalizedInput) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        // The source may sit in a different block than the sink; the window
        // for this class spans the whole input.
        let tainted = input.any_block(|content| TAINTED_SOURCE.is_match(content));

        for block in &input.blocks {
            let code = &block.content;

            let hit = match input.kind {
                ContentKind::Sql => SQL_EVIDENCE.is_match(code),
                _ => SQL_SINK.is_match(code) && CONCAT.is_match(code),
            };
            if !hit {
                continue;
            }

            let (severity, confidence) =
                promote_if_tainted(self.severity(), self.confidence(), tainted);

            let description = if tainted {
                "Untrusted input is concatenated into a SQL statement, allowing an attacker to alter the query structure."
            } else if input.kind == ContentKind::Sql {
                "SQL statement contains injection-style constructs (tautology, stacked statement, or UNION extraction)."
            } else {
                "Potential SQL injection: a query string is built by concatenation. Verify the concatenated data is trusted or parameterized."
            };

            let mut finding = Finding::new(
                self.id(),
                "SQL Injection",
                severity,
                confidence,
                description,
            )
            .with_owasp("A03:2021 - Injection")
            .with_recommendation(
                "Use parameterized queries or prepared statements; never build SQL from raw input.",
            );
            if let Some(location) = &block.location {
                finding = finding.with_location(location.clone());
            }
            findings.push(finding);
        }

        Ok(findings)
    }
}
