use crate::core::{Confidence, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a normalized block or finding within the submitted text.
///
/// Lines are 1-based; a missing location means the finding applies to the
/// input as a whole (serialized as `"global"` in derived identifiers).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub end_line: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Location {
    pub fn line(line: usize) -> Self {
        Self {
            line,
            end_line: None,
            snippet: None,
        }
    }

    pub fn with_end(mut self, end_line: usize) -> Self {
        self.end_line = Some(end_line);
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_line {
            Some(end) if end != self.line => write!(f, "line-{}-{}", self.line, end),
            _ => write!(f, "line-{}", self.line),
        }
    }
}

/// A single authoritative static detection.
///
/// Findings are produced fresh per run and never mutated after creation,
/// with one exception: the orchestrator assigns the stable `id` exactly once
/// before anything downstream sees the finding. Two runs over identical
/// input yield identical findings and ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Stable identifier, empty until assigned by the orchestrator.
    #[serde(default)]
    pub id: String,

    pub detector: String,

    /// Vulnerability class name, e.g. "SQL Injection".
    #[serde(rename = "type")]
    pub vuln_type: String,

    pub severity: Severity,

    pub confidence: Confidence,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owasp: Option<String>,

    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Finding {
    pub fn new(
        detector: impl Into<String>,
        vuln_type: impl Into<String>,
        severity: Severity,
        confidence: Confidence,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            detector: detector.into(),
            vuln_type: vuln_type.into(),
            severity,
            confidence,
            owasp: None,
            description: description.into(),
            recommendation: None,
            location: None,
        }
    }

    pub fn with_owasp(mut self, owasp: impl Into<String>) -> Self {
        self.owasp = Some(owasp.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Derive the stable identifier for this finding at position `ordinal`
    /// in the run's finding list: `vuln-<type>-<location|global>-<ordinal>`,
    /// lowercased and restricted to `[a-z0-9-_]`.
    pub fn derive_id(&self, ordinal: usize) -> String {
        let locator = self
            .location
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "global".to_string());
        slugify(&format!("vuln-{}-{}-{}", self.vuln_type, locator, ordinal))
    }
}

fn slugify(raw: &str) -> String {
    raw.to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
