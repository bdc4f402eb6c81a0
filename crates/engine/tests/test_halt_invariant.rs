use sentra_engine::{
    AnalysisPipeline, AnalysisRequest, AuditLog, EngineDecision, InputKind,
};

fn analyze(kind: InputKind, content: &str) -> sentra_engine::AnalysisReport {
    AnalysisPipeline::new(AuditLog::disabled())
        .analyze(&AnalysisRequest::new(kind, content).unwrap())
        .unwrap()
}

#[test]
fn malformed_json_halts_with_single_positioned_error() {
    let report = analyze(InputKind::Config, "{ invalid");

    assert_eq!(report.engine_decision, EngineDecision::HaltedAtSyntaxStage);
    assert_eq!(report.syntax.errors.len(), 1);
    assert_eq!(report.syntax.errors[0].line, 1);
    assert!(report.syntax.errors[0].column > 0);
    assert!(report.findings.is_empty());
    assert_eq!(report.risk_score, 0.0);
    assert!(report.attacker_view.is_empty());
    assert!(!report.ai.enabled);
}

#[test]
fn malformed_javascript_halts() {
    let report = analyze(InputKind::Code, "function broken( {\n  return 1;\n}");

    assert_eq!(report.engine_decision, EngineDecision::HaltedAtSyntaxStage);
    assert!(report.findings.is_empty());
    assert_eq!(report.risk_score, 0.0);
}

#[test]
fn malformed_sql_halts() {
    let report = analyze(InputKind::Sql, "SELEC * FORM users");

    assert_eq!(report.engine_decision, EngineDecision::HaltedAtSyntaxStage);
    assert!(report.findings.is_empty());
    assert_eq!(report.risk_score, 0.0);
}

#[test]
fn detectors_never_run_on_invalid_input() {
    // Content that would trip several detectors if it were ever normalized.
    let report = analyze(
        InputKind::Code,
        "eval('x'); res.send(\"<b>\" + req.query.q + \"</b>\"); function broken( {",
    );

    assert_eq!(report.engine_decision, EngineDecision::HaltedAtSyntaxStage);
    assert!(report.findings.is_empty());
    assert_eq!(report.summary.total, 0);
}

#[test]
fn halted_reports_keep_ethics_flags() {
    let report = analyze(InputKind::Config, "{ invalid");
    assert!(report.ethics.static_analysis_only);
    assert!(report.ethics.no_execution);
    assert!(report.ethics.no_live_attacks);
    assert!(report.ethics.ai_advisory_only);
}

#[test]
fn unknown_language_skips_validation_and_completes() {
    let report = AnalysisPipeline::new(AuditLog::disabled())
        .analyze(
            &AnalysisRequest::new(InputKind::Code, "fn main() { println!(\"hi\"); }")
                .unwrap()
                .with_language("rust"),
        )
        .unwrap();
    assert_eq!(report.engine_decision, EngineDecision::Completed);
}
