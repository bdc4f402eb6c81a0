//! Analysis orchestration.
//!
//! The pipeline is a fixed state machine:
//!
//! ```text
//! INIT → SYNTAX_CHECK → (HALTED | NORMALIZE → DETECT → SCORE → DERIVE_VIEWS → COMPLETED)
//! ```
//!
//! Syntactically invalid input halts the run — no detector ever sees it.
//! The static stages are synchronous and request-scoped; the optional
//! advisory pass afterwards is the only await point and can never change
//! the authoritative result. Any internal fault between NORMALIZE and
//! DERIVE_VIEWS is caught here and reported as a generic engine failure.

use crate::advisory::Advisor;
use crate::audit::AuditLog;
use crate::core::{
    AiSection, AnalysisReport, AnalysisRequest, EngineDecision, EthicsFlags, Finding, Summary,
};
use crate::detectors::DetectorRegistry;
use crate::error::EngineError;
use crate::mode::{decide_mode, AnalysisMode};
use crate::normalize::normalize;
use crate::syntax::{detect_language, validate, SyntaxResult};
use crate::{risk, views};
use serde_json::json;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use tracing::debug;

pub struct AnalysisPipeline {
    detectors: DetectorRegistry,
    audit: AuditLog,
    advisor: Option<Advisor>,
}

impl AnalysisPipeline {
    pub fn new(audit: AuditLog) -> Self {
        Self {
            detectors: DetectorRegistry::with_defaults(),
            audit,
            advisor: None,
        }
    }

    pub fn with_registry(mut self, detectors: DetectorRegistry) -> Self {
        self.detectors = detectors;
        self
    }

    pub fn with_advisor(mut self, advisor: Advisor) -> Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn detectors(&self) -> &DetectorRegistry {
        &self.detectors
    }

    /// Run the static pipeline to a report. Never runs the advisory pass.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, EngineError> {
        let started = Instant::now();

        let language = detect_language(
            request.kind,
            &request.content,
            request.declared_language.as_deref(),
        );
        let syntax = validate(&request.content, &language);
        self.audit.record(
            "syntax_check",
            json!({ "language": syntax.language, "valid": syntax.valid }),
        );

        if !syntax.valid {
            self.audit.record("halted_at_syntax", json!({}));
            return Ok(AnalysisReport::halted(syntax, elapsed_ms(started)));
        }

        let stages = catch_unwind(AssertUnwindSafe(|| {
            self.run_stages(request, syntax.clone(), started)
        }));

        match stages {
            Ok(report) => Ok(report),
            Err(_) => {
                self.audit.record("engine_failure", json!({}));
                Err(EngineError::EngineFailure)
            }
        }
    }

    /// Run the static pipeline and, when the mode gate allows it, the
    /// advisory pass. Advisory failures never affect the returned report
    /// beyond `ai: {enabled: false}`.
    pub async fn analyze_with_advisory(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, EngineError> {
        let mut report = self.analyze(request)?;

        if report.engine_decision == EngineDecision::HaltedAtSyntaxStage {
            return Ok(report);
        }

        let mode = decide_mode(request.use_ai);
        self.audit.record(
            "mode_decision",
            json!({ "useAI": request.use_ai, "mode": mode }),
        );

        if mode != AnalysisMode::SecurityPlusAi {
            return Ok(report);
        }

        let Some(advisor) = &self.advisor else {
            self.audit.record(
                "ai_execute_error",
                json!({ "errorType": "provider_unconfigured" }),
            );
            return Ok(report);
        };

        self.audit.record("ai_execute_attempt", json!({}));
        match advisor
            .advise(
                &request.content,
                &report.syntax.language,
                &report.findings,
                request.use_ai,
            )
            .await
        {
            Ok(advisory) => {
                self.audit.record("ai_execute_success", json!({}));
                report.ai = AiSection::enabled(advisory);
            }
            Err(err) => {
                debug!(kind = err.kind(), "advisory pass degraded");
                self.audit
                    .record("ai_execute_error", json!({ "errorType": err.kind() }));
            }
        }

        Ok(report)
    }

    fn run_stages(
        &self,
        request: &AnalysisRequest,
        syntax: SyntaxResult,
        started: Instant,
    ) -> AnalysisReport {
        let normalized = normalize(request.kind, &request.content, &syntax.language);
        self.audit
            .record("normalize", json!({ "blocks": normalized.blocks.len() }));

        let mut findings = self.detectors.run_all(&normalized);
        assign_ids(&mut findings);
        self.audit
            .record("detect", json!({ "findings": findings.len() }));

        let risk_score = risk::score(&findings);
        self.audit.record("score", json!({ "riskScore": risk_score }));

        let ids: Vec<String> = findings.iter().map(|f| f.id.clone()).collect();
        let attacker_view = keyed(&ids, views::attacker::generate(&findings));
        let defender_fixes = keyed(&ids, views::defender::generate(&findings));
        let payloads = keyed(&ids, views::payloads::generate(&findings));
        let impact_analysis = keyed(&ids, views::impact::generate(&findings));
        let summary = Summary::count(&findings);
        self.audit.record("derive_views", json!({}));

        self.audit.record("completed", json!({}));

        AnalysisReport {
            success: true,
            engine_decision: EngineDecision::Completed,
            syntax,
            findings,
            risk_score,
            attacker_view,
            defender_fixes,
            payloads,
            impact_analysis,
            summary,
            processing_time_ms: elapsed_ms(started),
            ethics: EthicsFlags::default(),
            ai: AiSection::disabled(),
        }
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

/// Assign the stable id to each finding exactly once, in list order.
fn assign_ids(findings: &mut [Finding]) {
    for (ordinal, finding) in findings.iter_mut().enumerate() {
        finding.id = finding.derive_id(ordinal);
    }
}

/// Re-key a positional view by finding id. A misaligned view is dropped to
/// empty rather than published partially.
fn keyed<T>(ids: &[String], entries: Vec<T>) -> BTreeMap<String, T> {
    if entries.len() != ids.len() {
        return BTreeMap::new();
    }
    ids.iter().cloned().zip(entries).collect()
}
