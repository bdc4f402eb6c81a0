//! Parse-only SQL validation via sqlparser.

use super::SyntaxResult;
use regex::Regex;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
use std::sync::LazyLock;

// sqlparser embeds positions in its error text ("... at Line: 2, Column: 7").
// Scraping that text is fragile; it lives here and only here.
static POSITION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Line:\s*(\d+),\s*Column:?\s*(\d+)").ok());

pub(super) fn validate(content: &str) -> SyntaxResult {
    match Parser::parse_sql(&GenericDialect {}, content) {
        Ok(_) => SyntaxResult::valid("sql"),
        Err(err) => {
            let message = err.to_string();
            let (line, column) = scrape_position(&message);
            SyntaxResult::invalid("sql", message, line, column)
        }
    }
}

fn scrape_position(message: &str) -> (u32, u32) {
    let Some(re) = POSITION.as_ref() else {
        return (0, 0);
    };
    re.captures(message)
        .and_then(|caps| {
            let line = caps.get(1)?.as_str().parse().ok()?;
            let column = caps.get(2)?.as_str().parse().ok()?;
            Some((line, column))
        })
        .unwrap_or((0, 0))
}
