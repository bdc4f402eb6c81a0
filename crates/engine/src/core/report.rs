use crate::advisory::AdvisoryResult;
use crate::core::{Finding, Severity};
use crate::syntax::SyntaxResult;
use crate::views::{AttackerEntry, DefenderFix, ImpactEntry, SimulatedPayload};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineDecision {
    HaltedAtSyntaxStage,
    Completed,
}

/// Contractual guarantees asserted on every report. Downstream report
/// rendering checks these flags; they are always true.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicsFlags {
    pub static_analysis_only: bool,
    pub no_execution: bool,
    pub no_live_attacks: bool,
    pub ai_advisory_only: bool,
}

impl Default for EthicsFlags {
    fn default() -> Self {
        Self {
            static_analysis_only: true,
            no_execution: true,
            no_live_attacks: true,
            ai_advisory_only: true,
        }
    }
}

/// Counts by severity plus the total. Field casing follows the persisted
/// report contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,

    #[serde(rename = "CRITICAL")]
    pub critical: usize,

    #[serde(rename = "HIGH")]
    pub high: usize,

    #[serde(rename = "MEDIUM")]
    pub medium: usize,

    #[serde(rename = "LOW")]
    pub low: usize,
}

impl Summary {
    pub fn count(findings: &[Finding]) -> Self {
        let mut summary = Self {
            total: findings.len(),
            ..Default::default()
        };
        for finding in findings {
            match finding.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }
}

/// Advisory namespace of the report. Disabled unless the advisory pass ran
/// and returned a well-formed result; advisory content never feeds back into
/// the authoritative fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSection {
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub advisory_only: Option<bool>,

    #[serde(flatten)]
    pub advisory: Option<AdvisoryResult>,
}

impl AiSection {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            advisory_only: None,
            advisory: None,
        }
    }

    pub fn enabled(advisory: AdvisoryResult) -> Self {
        Self {
            enabled: true,
            advisory_only: Some(true),
            advisory: Some(advisory),
        }
    }
}

/// The single authoritative result of one analysis run. Produced once,
/// immutable, persisted by an external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub success: bool,

    pub engine_decision: EngineDecision,

    pub syntax: SyntaxResult,

    pub findings: Vec<Finding>,

    pub risk_score: f64,

    pub attacker_view: BTreeMap<String, AttackerEntry>,

    pub defender_fixes: BTreeMap<String, DefenderFix>,

    pub payloads: BTreeMap<String, SimulatedPayload>,

    pub impact_analysis: BTreeMap<String, ImpactEntry>,

    pub summary: Summary,

    pub processing_time_ms: f64,

    pub ethics: EthicsFlags,

    pub ai: AiSection,
}

impl AnalysisReport {
    /// Terminal report for syntactically invalid input: no findings, zero
    /// score, empty views.
    pub fn halted(syntax: SyntaxResult, processing_time_ms: f64) -> Self {
        Self {
            success: true,
            engine_decision: EngineDecision::HaltedAtSyntaxStage,
            syntax,
            findings: Vec::new(),
            risk_score: 0.0,
            attacker_view: BTreeMap::new(),
            defender_fixes: BTreeMap::new(),
            payloads: BTreeMap::new(),
            impact_analysis: BTreeMap::new(),
            summary: Summary::default(),
            processing_time_ms,
            ethics: EthicsFlags::default(),
            ai: AiSection::disabled(),
        }
    }
}
