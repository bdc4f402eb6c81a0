//! Weak cryptographic primitive detection.

use super::Detector;
use crate::core::{Confidence, Finding, Severity};
use crate::normalize::NormalizedInput;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static WEAK_PRIMITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)createHash\s*\(\s*["'](md5|sha1)["']\s*\)|createCipheriv\s*\(\s*["'](des|des3|rc4)[^"']*["']|\b(md5|sha1)\s*\(|algorithm["']?\s*[:=]\s*["'](md5|sha1|des|rc4)["']"#,
    )
    .expect("weak primitive pattern")
});

pub struct WeakCryptoDetector;

impl WeakCryptoDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeakCryptoDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for WeakCryptoDetector {
    fn id(&self) -> &'static str {
        "weak-crypto"
    }

    fn name(&self) -> &'static str {
        "Weak Cryptography Detector"
    }

    fn description(&self) -> &'static str {
        "Detects use of broken hash and cipher primitives (MD5, SHA-1, DES, RC4)"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn confidence(&self) -> Confidence {
        Confidence::Medium
    }

    fn detect(&self, input: &NormalizedInput) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for block in &input.blocks {
            if !WEAK_PRIMITIVE.is_match(&block.content) {
                continue;
            }

            let mut finding = Finding::new(
                self.id(),
                "Weak Cryptography",
                self.severity(),
                self.confidence(),
                "A broken cryptographic primitive is in use; MD5, SHA-1, DES and RC4 are practically attackable and unsuitable for security purposes.",
            )
            .with_owasp("A02:2021 - Cryptographic Failures")
            .with_recommendation(
                "Use SHA-256 or stronger for hashing and an AEAD cipher such as AES-GCM for encryption; use a dedicated KDF for passwords.",
            );
            if let Some(location) = &block.location {
                finding = finding.with_location(location.clone());
            }
            findings.push(finding);
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputKind;
    use crate::normalize::normalize;

    #[test]
    fn detects_md5_hash() {
        let input = normalize(
            InputKind::Code,
            r#"const digest = crypto.createHash("md5").update(data).digest("hex");"#,
            "javascript",
        );
        assert_eq!(WeakCryptoDetector::new().detect(&input).unwrap().len(), 1);
    }

    #[test]
    fn detects_weak_algorithm_in_config() {
        let input = normalize(
            InputKind::Config,
            r#"{"hashing": {"algorithm": "sha1"}}"#,
            "json",
        );
        assert_eq!(WeakCryptoDetector::new().detect(&input).unwrap().len(), 1);
    }

    #[test]
    fn sha256_is_clean() {
        let input = normalize(
            InputKind::Code,
            r#"crypto.createHash("sha256").update(data);"#,
            "javascript",
        );
        assert!(WeakCryptoDetector::new().detect(&input).unwrap().is_empty());
    }
}
