//! End-to-end scenario coverage over representative submissions.

use sentra_engine::{
    detectors::{Detector, SqlInjectionDetector},
    normalize, AnalysisPipeline, AnalysisRequest, AuditLog, Confidence, EngineDecision,
    InputKind, Severity,
};

#[test]
fn concatenated_sql_yields_a_high_injection_finding() {
    // The classic string-built query, with the explicit untrusted source
    // bound in a separate statement.
    let code = r#"
const userInput = req.query.name;
const query = "SELECT * FROM users WHERE name = '" + userInput + "'";
execute(query);
"#;
    let input = normalize(InputKind::Code, code, "javascript");
    let findings = SqlInjectionDetector::new().detect(&input).unwrap();

    assert!(!findings.is_empty());
    assert_eq!(findings[0].vuln_type, "SQL Injection");
    assert_eq!(findings[0].severity, Severity::High);
    assert_eq!(findings[0].confidence, Confidence::High);
}

#[test]
fn xss_survives_source_and_sink_on_distant_lines() {
    let code = r#"
const user = req.query.user;

logRequest();
checkRateLimit();
recordMetrics();

res.send("<div>" + user + "</div>");
"#;
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());
    let report = pipeline
        .analyze(&AnalysisRequest::new(InputKind::Code, code).unwrap())
        .unwrap();

    assert_eq!(report.engine_decision, EngineDecision::Completed);
    let xss: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.detector == "xss")
        .collect();
    assert!(!xss.is_empty());
    assert_eq!(xss[0].severity, Severity::High);
    assert!(report.risk_score > 0.0);
}

#[test]
fn tautology_in_pure_sql_is_detected_end_to_end() {
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());
    let report = pipeline
        .analyze(
            &AnalysisRequest::new(
                InputKind::Sql,
                "SELECT * FROM users WHERE name = 'x' OR 1=1",
            )
            .unwrap(),
        )
        .unwrap();

    assert_eq!(report.engine_decision, EngineDecision::Completed);
    assert!(report
        .findings
        .iter()
        .any(|f| f.vuln_type == "SQL Injection"));
}

#[test]
fn hardcoded_secret_in_config_is_detected() {
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());
    let report = pipeline
        .analyze(
            &AnalysisRequest::new(
                InputKind::Config,
                r#"{"database": {"host": "db.internal", "password": "s3cr3t-pa55word"}}"#,
            )
            .unwrap(),
        )
        .unwrap();

    assert_eq!(report.engine_decision, EngineDecision::Completed);
    assert!(report
        .findings
        .iter()
        .any(|f| f.vuln_type == "Hardcoded Secret"));
}

#[test]
fn report_serializes_with_wire_field_names() {
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());
    let report = pipeline
        .analyze(
            &AnalysisRequest::new(InputKind::Code, "eval('1+1')").unwrap(),
        )
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["engineDecision"], "COMPLETED");
    assert!(json["riskScore"].as_f64().unwrap() > 0.0);
    assert!(json["ethics"]["staticAnalysisOnly"].as_bool().unwrap());
    assert!(json["ethics"]["noExecution"].as_bool().unwrap());
    assert!(json["ethics"]["noLiveAttacks"].as_bool().unwrap());
    assert!(json["ethics"]["aiAdvisoryOnly"].as_bool().unwrap());
    assert_eq!(json["ai"]["enabled"], false);
    assert!(json["summary"]["HIGH"].as_u64().unwrap() >= 1);

    let finding = &json["findings"][0];
    assert!(finding["id"].as_str().unwrap().starts_with("vuln-"));
    assert_eq!(finding["type"], "Dangerous Function Usage");
}

#[test]
fn scoring_rises_with_more_and_worse_findings() {
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());

    let small = pipeline
        .analyze(
            &AnalysisRequest::new(
                InputKind::Code,
                r#"res.send("<b>" + title + "</b>");"#,
            )
            .unwrap(),
        )
        .unwrap();

    let large = pipeline
        .analyze(
            &AnalysisRequest::new(
                InputKind::Code,
                r#"
const user = req.query.user;
res.send("<b>" + user + "</b>");
eval(user);
"#,
            )
            .unwrap(),
        )
        .unwrap();

    assert!(small.risk_score > 0.0);
    assert!(large.risk_score > small.risk_score);
}
