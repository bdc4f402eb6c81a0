//! Attacker-perspective abuse narratives.

use crate::core::Finding;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackerEntry {
    pub abuse_logic: String,
    pub kill_chain_stage: String,
}

pub fn generate(findings: &[Finding]) -> Vec<AttackerEntry> {
    findings.iter().map(entry_for).collect()
}

fn entry_for(finding: &Finding) -> AttackerEntry {
    let (abuse_logic, kill_chain_stage) = match finding.detector.as_str() {
        "sql-injection" => (
            "An attacker submits crafted input that closes the intended string context and appends their own SQL, reading or modifying data the query was never meant to touch.",
            "Exploitation",
        ),
        "xss" => (
            "An attacker places script content in the reflected field; when a victim's browser renders the response, the script runs with the victim's session.",
            "Delivery",
        ),
        "command-injection" => (
            "An attacker appends shell metacharacters to the interpolated value, chaining their own command onto the one the application intended to run.",
            "Exploitation",
        ),
        "path-traversal" => (
            "An attacker supplies parent-directory segments in the path component, walking out of the intended directory to read or overwrite other files.",
            "Exploitation",
        ),
        "dangerous-functions" => (
            "Any attacker influence over the evaluated string becomes direct code execution inside the application process.",
            "Exploitation",
        ),
        "hardcoded-secrets" => (
            "An attacker with access to the source or configuration text reuses the embedded credential against the live system.",
            "Credential Access",
        ),
        "weak-crypto" => (
            "An attacker applies well-known collision or brute-force attacks against the weak primitive to forge or recover protected data.",
            "Actions on Objectives",
        ),
        _ => (
            "An attacker abuses the detected weakness to move beyond the access the application intended to grant.",
            "Exploitation",
        ),
    };

    AttackerEntry {
        abuse_logic: abuse_logic.to_string(),
        kill_chain_stage: kill_chain_stage.to_string(),
    }
}
