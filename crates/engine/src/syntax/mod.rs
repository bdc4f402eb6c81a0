//! Parse-only syntax validation.
//!
//! One adapter per parser (JavaScript, SQL, JSON) so that the best-effort
//! scraping of line/column information out of parser errors stays isolated:
//! a parser upgrade can only break position reporting inside its own
//! adapter. Validation never fails as an operation — every failure mode,
//! including validator initialization problems, is returned as a structured
//! `SyntaxResult` with `valid: false`.
//!
//! Unrecognized languages pass validation (skip, not reject): novel input
//! kinds flow through to detection rather than being bounced at the door.

mod javascript;
mod json;
mod sql;

use crate::core::InputKind;
use serde::{Deserialize, Serialize};

/// How far into the content the SQL keyword heuristic looks.
const DETECTION_WINDOW: usize = 512;

const SQL_HINTS: [&str; 8] = [
    "SELECT ", "INSERT ", "UPDATE ", "DELETE ", "CREATE ", "DROP ", "ALTER ", "WITH ",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxResult {
    pub valid: bool,
    pub language: String,
    pub errors: Vec<SyntaxIssue>,
}

impl SyntaxResult {
    pub fn valid(language: impl Into<String>) -> Self {
        Self {
            valid: true,
            language: language.into(),
            errors: Vec::new(),
        }
    }

    pub fn invalid(
        language: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            valid: false,
            language: language.into(),
            errors: vec![SyntaxIssue {
                message: message.into(),
                line,
                column,
            }],
        }
    }
}

/// Validate `content` for `language` with a parse-only pass.
pub fn validate(content: &str, language: &str) -> SyntaxResult {
    let normalized = language.trim().to_ascii_lowercase();

    if content.trim().is_empty() {
        return SyntaxResult::invalid(normalized, "empty or invalid content", 0, 0);
    }

    match normalized.as_str() {
        "javascript" | "js" | "typescript" | "ts" => javascript::validate(content),
        "sql" => sql::validate(content),
        "json" => json::validate(content),
        _ => SyntaxResult::valid(normalized),
    }
}

/// Resolve the effective language for a submission: the declared language
/// wins; otherwise kind and content heuristics decide.
pub fn detect_language(kind: InputKind, content: &str, declared: Option<&str>) -> String {
    if let Some(lang) = declared {
        let lang = lang.trim();
        if !lang.is_empty() {
            return lang.to_ascii_lowercase();
        }
    }

    match kind {
        InputKind::Sql => return "sql".to_string(),
        InputKind::Config => return "json".to_string(),
        InputKind::Code | InputKind::Api => {}
    }

    let trimmed = content.trim();
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return "json".to_string();
    }

    let head: String = trimmed
        .chars()
        .take(DETECTION_WINDOW)
        .collect::<String>()
        .to_ascii_uppercase();
    if SQL_HINTS.iter().any(|hint| head.contains(hint)) {
        return "sql".to_string();
    }

    "javascript".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_is_skipped_not_rejected() {
        let result = validate("fn main() {}", "rust");
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_content_is_invalid() {
        let result = validate("   ", "javascript");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn declared_language_wins() {
        assert_eq!(
            detect_language(InputKind::Code, "SELECT 1", Some("JavaScript")),
            "javascript"
        );
    }

    #[test]
    fn kind_drives_detection() {
        assert_eq!(detect_language(InputKind::Sql, "anything", None), "sql");
        assert_eq!(detect_language(InputKind::Config, "{}", None), "json");
    }

    #[test]
    fn content_heuristics_fall_through_to_javascript() {
        assert_eq!(
            detect_language(InputKind::Code, "{\"a\": 1}", None),
            "json"
        );
        assert_eq!(
            detect_language(InputKind::Code, "select * from users", None),
            "sql"
        );
        assert_eq!(
            detect_language(InputKind::Code, "console.log('ok')", None),
            "javascript"
        );
    }
}
