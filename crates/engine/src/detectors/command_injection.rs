//! OS command injection detection for code input.

use super::{promote_if_tainted, DetectionWindow, Detector};
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::{ContentKind, NormalizedInput};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static SHELL_SINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(child_process\s*\.\s*)?(exec|execSync|spawn|spawnSync|execFile|system|popen)\s*\("#,
    )
    .expect("shell sink pattern")
});

static CONCAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(["'`]\s*\+)|(\+\s*["'`])|(\$\{[^}]*\})"#).expect("concat pattern")
});

static TAINTED_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(req\.(query|body|params|headers|cookies)|process\.argv|userinput|user_input)\b"#)
        .expect("source pattern")
});

pub struct CommandInjectionDetector;

impl CommandInjectionDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandInjectionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for CommandInjectionDetector {
    fn id(&self) -> &'static str {
        "command-injection"
    }

    fn name(&self) -> &'static str {
        "Command Injection Detector"
    }

    fn description(&self) -> &'static str {
        "Detects shell commands built from untrusted input"
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
            if !(SHELL_SINK.is_match(code) && CONCAT.is_match(code)) {
                continue;
            }

            let (severity, confidence) =
                promote_if_tainted(self.severity(), self.confidence(), tainted);

            let description = if tainted {
                "Untrusted input flows into a shell command, allowing arbitrary command execution."
            } else {
                "Potential command injection: a shell command is built by concatenation. Verify the concatenated data is trusted."
            };

            let mut finding = Finding::new(
                self.id(),
                "Command Injection",
                severity,
                confidence,
                description,
            )
            .with_owasp("A03:2021 - Injection")
            .with_recommendation(
                "Pass arguments as an array to the process API instead of interpolating into a shell string.",
            );
            if let Some(location) = &block.location {
                finding = finding.with_location(location.clone());
            }
            findings.push(finding);
        }

        Ok(findings)
    }
}
