//! Strict JSON validation via serde_json.

use super::SyntaxResult;

pub(super) fn validate(content: &str) -> SyntaxResult {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(_) => SyntaxResult::valid("json"),
        Err(err) => {
            // serde_json reports positions natively; no message scraping.
            SyntaxResult::invalid("json", err.to_string(), err.line() as u32, err.column() as u32)
        }
    }
}
