//! Instruction contract for the advisory endpoint.

use crate::advisory::schemas::AdvisoryResult;
use crate::core::Finding;

/// The non-negotiable rules sent with every advisory request. The model
/// explains; it does not detect.
pub fn system_prompt() -> String {
    format!(
        r#"You are a secure coding assistant.

CRITICAL RULES:
- You do NOT perform vulnerability detection.
- You do NOT invent new confirmed vulnerabilities.
- The provided findings are authoritative.
- You may ONLY explain, suggest defensive fixes, and propose unverified hypotheses.
- Do NOT generate exploit payloads.
- Do NOT provide step-by-step attack instructions.
- Do NOT rewrite entire files.

OUTPUT FORMAT (STRICT):
Return JSON with the following structure:
{}
If there are no hypotheses, return an empty array."#,
        AdvisoryResult::schema_definition()
    )
}

pub fn user_prompt(language: &str, findings: &[Finding], code: &str) -> String {
    let findings_json =
        serde_json::to_string_pretty(findings).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"Language: {language}

AUTHORITATIVE ENGINE FINDINGS:
{findings_json}

READ-ONLY CODE CONTEXT (DO NOT ANALYZE FOR NEW ISSUES):
{code}

Tasks:
1. Explain each confirmed vulnerability clearly.
2. Provide secure coding guidance per vulnerability.
3. Include short illustrative snippets ONLY if helpful.
4. Optionally suggest unverified security hypotheses."#
    )
}
