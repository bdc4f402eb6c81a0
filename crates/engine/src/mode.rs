//! Analysis mode decision.

use serde::{Deserialize, Serialize};

/// Whether a request runs static-only or static-plus-advisory analysis.
/// There is no AI-only mode: the static engine always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisMode {
    SecurityOnly,
    SecurityPlusAi,
}

/// Decide the analysis mode from the caller's opt-in flag alone.
///
/// The signature is the guarantee: risk score and finding content cannot
/// reach this decision, so the advisory layer can never be triggered by the
/// data it is meant to explain.
pub fn decide_mode(use_ai: bool) -> AnalysisMode {
    if use_ai {
        AnalysisMode::SecurityPlusAi
    } else {
        AnalysisMode::SecurityOnly
    }
}
