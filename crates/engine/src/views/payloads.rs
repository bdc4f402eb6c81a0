//! Illustrative payload examples.
//!
//! Every entry is a textbook-shape example labeled non-functional. Nothing
//! here is a working exploit and nothing is derived from the analyzed
//! content.

use crate::core::Finding;
use serde::{Deserialize, Serialize};

const LABEL: &str = "(illustrative, non-functional)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedPayload {
    pub payloads: Vec<String>,
}

pub fn generate(findings: &[Finding]) -> Vec<SimulatedPayload> {
    findings.iter().map(entry_for).collect()
}

fn entry_for(finding: &Finding) -> SimulatedPayload {
    let examples: &[&str] = match finding.detector.as_str() {
        "sql-injection" => &["' OR '1'='1' -- ", "'; SELECT ... -- "],
        "xss" => &["<script>/* attacker script */</script>", "\"><img src=x onerror=...>"],
        "command-injection" => &["; extra-command", "$(extra-command)"],
        "path-traversal" => &["../../secret.txt", "..%2f..%2fsecret"],
        "dangerous-functions" => &["attacker-controlled-expression"],
        "hardcoded-secrets" => &["reuse of the embedded credential"],
        "weak-crypto" => &["precomputed collision input"],
        _ => &["class-typical probe input"],
    };

    SimulatedPayload {
        payloads: examples
            .iter()
            .map(|example| format!("{} {}", example, LABEL))
            .collect(),
    }
}
