//! Cross-site scripting detection for code input.

use super::{promote_if_tainted, DetectionWindow, Detector};
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::{ContentKind, NormalizedInput};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static HTML_SINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(res\.send|res\.write|res\.end|innerHTML|outerHTML|document\.write|document\.writeln|insertAdjacentHTML|dangerouslySetInnerHTML)\b"#,
    )
    .expect("html sink pattern")
});

static CONCAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\+)|(\$\{[^}]*\})"#).expect("concat pattern"));

static USER_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\breq\.(query|body|params|headers|cookies)\b"#).expect("source pattern")
});

pub struct XssDetector;

impl XssDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XssDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for XssDetector {
    fn id(&self) -> &'static str {
        "xss"
    }

    fn name(&self) -> &'static str {
        "Cross-Site Scripting Detector"
    }

    fn description(&self) -> &'static str {
        "Detects data concatenated into HTML sinks without encoding"
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
        if input.kind != ContentKind::Code {
            return Ok(Vec::new());
        }

        // A `req.query.user` read bound on one line and reflected many lines
        // later must still count as an explicit source.
        let tainted = input.any_block(|content| USER_INPUT.is_match(content));

        let mut findings = Vec::new();
        for block in &input.blocks {
            let code = &block.content;
            if !(HTML_SINK.is_match(code) && CONCAT.is_match(code)) {
                continue;
            }

            let (severity, confidence) =
                promote_if_tainted(self.severity(), self.confidence(), tainted);

            let description = if tainted {
                "User-controlled input is reflected into HTML output without proper encoding, enabling script injection."
            } else {
                "Potential XSS: data is concatenated into an HTML sink. Verify the data source is trusted or encoded."
            };

            let mut finding = Finding::new(
                self.id(),
                "Cross-Site Scripting (XSS)",
                severity,
                confidence,
                description,
            )
            .with_owasp("A03:2021 - Injection")
            .with_recommendation(
                "Encode or sanitize output before rendering and avoid constructing HTML directly from user input.",
            );
            if let Some(location) = &block.location {
                finding = finding.with_location(location.clone());
            }
            findings.push(finding);
        }

        Ok(findings)
    }
}
