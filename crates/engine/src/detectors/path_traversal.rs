//! Path traversal detection for code input.

use super::{promote_if_tainted, DetectionWindow, Detector};
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::{ContentKind, NormalizedInput};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static FS_SINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(fs\s*\.\s*(readFile|readFileSync|writeFile|writeFileSync|createReadStream|createWriteStream|unlink|unlinkSync)|res\.sendFile|open)\s*\("#,
    )
    .expect("fs sink pattern")
});

static CONCAT_OR_DOTDOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(["'`]\s*\+)|(\+\s*["'`])|(\$\{[^}]*\})|(\.\./)"#).expect("path pattern")
});

static TAINTED_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\breq\.(query|body|params|headers|cookies)\b"#).expect("source pattern")
});

pub struct PathTraversalDetector;

impl PathTraversalDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathTraversalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for PathTraversalDetector {
    fn id(&self) -> &'static str {
        "path-traversal"
    }

    fn name(&self) -> &'static str {
        "Path Traversal Detector"
    }

    fn description(&self) -> &'static str {
        "Detects filesystem access with attacker-influenceable paths"
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

        let tainted = input.any_block(|content| TAINTED_SOURCE.is_match(content));

        let mut findings = Vec::new();
        for block in &input.blocks {
            let code = &block.content;
            if !(FS_SINK.is_match(code) && CONCAT_OR_DOTDOT.is_match(code)) {
                continue;
            }

            let (severity, confidence) =
                promote_if_tainted(self.severity(), self.confidence(), tainted);

            let description = if tainted {
                "A filesystem path is built from untrusted input, allowing access outside the intended directory."
            } else {
                "Potential path traversal: a filesystem path is built by concatenation. Verify the path components are trusted."
            };

            let mut finding = Finding::new(
                self.id(),
                "Path Traversal",
                severity,
                confidence,
                description,
            )
            .with_owasp("A01:2021 - Broken Access Control")
            .with_recommendation(
                "Resolve and canonicalize paths, then verify they stay under the intended base directory.",
            );
            if let Some(location) = &block.location {
                finding = finding.with_location(location.clone());
            }
            findings.push(finding);
        }

        Ok(findings)
    }
}
