//! Defender remediation guidance with illustrative secure snippets.

use crate::core::Finding;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenderFix {
    pub secure_fix: String,
    /// Illustrative, non-executable snippet showing the safe construct.
    pub secure_example: String,
}

pub fn generate(findings: &[Finding]) -> Vec<DefenderFix> {
    findings.iter().map(entry_for).collect()
}

fn entry_for(finding: &Finding) -> DefenderFix {
    let (secure_fix, secure_example) = match finding.detector.as_str() {
        "sql-injection" => (
            "Replace string-built queries with parameterized statements so input can never change the query structure.",
            "db.query(\"SELECT * FROM users WHERE name = ?\", [name])",
        ),
        "xss" => (
            "Encode output for the HTML context it lands in, or render through a templating engine that escapes by default.",
            "res.send(`<div>${escapeHtml(user)}</div>`)",
        ),
        "command-injection" => (
            "Invoke the process API with an argument array and a fixed executable; never hand user input to a shell.",
            "execFile(\"cat\", [fileName], callback)",
        ),
        "path-traversal" => (
            "Canonicalize the resolved path and reject anything that escapes the intended base directory.",
            "const p = path.resolve(BASE, name); if (!p.startsWith(BASE)) reject();",
        ),
        "dangerous-functions" => (
            "Remove dynamic evaluation; parse data with JSON.parse and dispatch behavior through an explicit function map.",
            "const handler = handlers[action]; handler(payload);",
        ),
        "hardcoded-secrets" => (
            "Move the credential to the environment or a secret manager and rotate the exposed value.",
            "const apiKey = process.env.API_KEY;",
        ),
        "weak-crypto" => (
            "Switch to a current primitive: SHA-256 for digests, AES-GCM for encryption, a memory-hard KDF for passwords.",
            "crypto.createHash(\"sha256\").update(data).digest(\"hex\")",
        ),
        _ => (
            "Apply the least-privilege fix for the detected weakness and add a regression test covering the vulnerable pattern.",
            "// validate, encode, and constrain all external input",
        ),
    };

    DefenderFix {
        secure_fix: secure_fix.to_string(),
        secure_example: secure_example.to_string(),
    }
}
