//! Response shape contract for the advisory endpoint.
//!
//! The endpoint must return strict JSON in exactly this shape. Anything
//! else degrades to [`AdvisoryResult::placeholder`] — a malformed advisory
//! response can never fail the analysis that it annotates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub summary: String,

    #[serde(default)]
    pub per_vulnerability: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSuggestion {
    pub guidance: String,

    #[serde(default)]
    pub snippet: Option<String>,

    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypothesisConfidence {
    Low,
    Medium,
}

/// A speculative observation the model is allowed to offer. Always labeled
/// unverified; never a confirmed finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    pub title: String,
    pub confidence: HypothesisConfidence,
    pub reasoning: String,
    pub unverified: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResult {
    pub explanation: Explanation,

    #[serde(default)]
    pub code_suggestions: BTreeMap<String, CodeSuggestion>,

    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
}

impl AdvisoryResult {
    /// Safe fallback when the endpoint returns something unparseable.
    pub fn placeholder() -> Self {
        Self {
            explanation: Explanation {
                summary: "AI explanation unavailable (invalid response format).".to_string(),
                per_vulnerability: BTreeMap::new(),
            },
            code_suggestions: BTreeMap::new(),
            hypotheses: Vec::new(),
        }
    }

    /// The schema text embedded in the system instruction.
    pub fn schema_definition() -> &'static str {
        r#"{
  "explanation": {
    "summary": string,
    "perVulnerability": { "<vulnId>": string }
  },
  "codeSuggestions": {
    "<vulnId>": {
      "guidance": string,
      "snippet": string | null,
      "language": string
    }
  },
  "hypotheses": [
    {
      "title": string,
      "confidence": "low" | "medium",
      "reasoning": string,
      "unverified": true
    }
  ]
}"#
    }
}
