use sentra_engine::{AnalysisPipeline, AnalysisRequest, AuditLog, InputKind};

const VULNERABLE_CODE: &str = r#"
const user = req.query.user;
const query = "SELECT * FROM users WHERE name = '" + user + "'";
db.run(query);
res.send("<div>" + user + "</div>");
eval(payload);
"#;

fn code_request(content: &str) -> AnalysisRequest {
    // The content embeds SQL keywords, so the language is declared rather
    // than left to the keyword heuristic.
    AnalysisRequest::new(InputKind::Code, content)
        .unwrap()
        .with_language("javascript")
}

#[test]
fn identical_input_yields_identical_reports() {
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());
    let request = code_request(VULNERABLE_CODE);

    let first = pipeline.analyze(&request).unwrap();
    let second = pipeline.analyze(&request).unwrap();

    assert_eq!(first.findings.len(), second.findings.len());
    assert!(!first.findings.is_empty());

    for (a, b) in first.findings.iter().zip(&second.findings) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.detector, b.detector);
        assert_eq!(a.vuln_type, b.vuln_type);
        assert_eq!(a.severity, b.severity);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.location, b.location);
    }

    assert_eq!(first.risk_score, second.risk_score);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.attacker_view.len(), second.attacker_view.len());
    assert_eq!(first.defender_fixes.len(), second.defender_fixes.len());
    assert_eq!(first.payloads.len(), second.payloads.len());
    assert_eq!(first.impact_analysis.len(), second.impact_analysis.len());
}

#[test]
fn separate_pipelines_agree() {
    let request = code_request(VULNERABLE_CODE);

    let first = AnalysisPipeline::new(AuditLog::disabled())
        .analyze(&request)
        .unwrap();
    let second = AnalysisPipeline::new(AuditLog::disabled())
        .analyze(&request)
        .unwrap();

    let ids_a: Vec<_> = first.findings.iter().map(|f| f.id.clone()).collect();
    let ids_b: Vec<_> = second.findings.iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids_a, ids_b);
    assert_eq!(first.risk_score, second.risk_score);
}

#[test]
fn finding_ids_are_unique_within_a_run() {
    let pipeline = AnalysisPipeline::new(AuditLog::disabled());
    let request = code_request(VULNERABLE_CODE);

    let report = pipeline.analyze(&request).unwrap();
    let mut ids: Vec<_> = report.findings.iter().map(|f| f.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
