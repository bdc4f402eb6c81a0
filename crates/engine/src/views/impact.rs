//! Technical and business impact narratives.

use crate::core::{Finding, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEntry {
    pub kill_chain_stage: String,
    pub technical_impact: String,
    pub business_impact: String,
}

pub fn generate(findings: &[Finding]) -> Vec<ImpactEntry> {
    findings.iter().map(entry_for).collect()
}

fn entry_for(finding: &Finding) -> ImpactEntry {
    let (stage, technical) = match finding.detector.as_str() {
        "sql-injection" => (
            "Exploitation",
            "Unauthorized read or write access to the backing database, up to full data exfiltration or destruction.",
        ),
        "xss" => (
            "Delivery",
            "Arbitrary script execution in victim browsers: session theft, credential capture, content forgery.",
        ),
        "command-injection" => (
            "Exploitation",
            "Arbitrary command execution on the host with the application's privileges.",
        ),
        "path-traversal" => (
            "Exploitation",
            "Disclosure or modification of files outside the intended directory, including configuration and credentials.",
        ),
        "dangerous-functions" => (
            "Exploitation",
            "In-process code execution if any evaluated string is attacker-influenceable.",
        ),
        "hardcoded-secrets" => (
            "Credential Access",
            "Direct authentication to protected systems using the embedded credential.",
        ),
        "weak-crypto" => (
            "Actions on Objectives",
            "Forgery or recovery of data the primitive was supposed to protect.",
        ),
        _ => (
            "Exploitation",
            "Compromise of the confidentiality or integrity guarantees of the affected component.",
        ),
    };

    let business = match finding.severity {
        Severity::Critical | Severity::High => {
            "High exposure: likely data breach obligations, incident response cost, and reputational damage if exploited in production."
        }
        Severity::Medium => {
            "Moderate exposure: exploitation requires additional conditions, but remediation should be scheduled promptly."
        }
        Severity::Low => {
            "Limited exposure: low direct risk, worth fixing as part of routine hardening."
        }
    };

    ImpactEntry {
        kill_chain_stage: stage.to_string(),
        technical_impact: technical.to_string(),
        business_impact: business.to_string(),
    }
}
