//! Input normalization.
//!
//! Every input kind is converted to the same shape — an ordered sequence of
//! located content blocks — so detectors stay kind-agnostic. Normalization
//! is a pure function: identical input always yields the identical block
//! sequence in the identical order. Empty and whitespace-only blocks are
//! dropped before detection.

mod code;

use crate::core::{InputKind, Location};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Code,
    Sql,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub kind: ContentKind,
    pub blocks: Vec<Block>,
}

impl NormalizedInput {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when any block matches the predicate. Used by detectors with an
    /// input-wide window to correlate a source with a sink across blocks.
    pub fn any_block(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.blocks.iter().any(|b| predicate(&b.content))
    }
}

/// Normalize raw content for detection. `language` is the effective
/// language resolved by the syntax stage; the kind decides the block
/// granularity for ambiguous cases.
pub fn normalize(kind: InputKind, content: &str, language: &str) -> NormalizedInput {
    match (kind, language) {
        (InputKind::Sql, _) | (_, "sql") => normalize_sql(content),
        (InputKind::Config, _) | (_, "json") => normalize_whole(content, ContentKind::Json),
        _ => code::normalize(content),
    }
}

/// SQL content is statement-split on `;`, each statement located at its
/// first line.
fn normalize_sql(content: &str) -> NormalizedInput {
    let mut blocks = Vec::new();
    let mut line = 1usize;

    for statement in content.split(';') {
        let leading_newlines = statement
            .chars()
            .take_while(|c| c.is_whitespace())
            .filter(|c| *c == '\n')
            .count();
        let start_line = line + leading_newlines;
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            blocks.push(Block {
                content: trimmed.to_string(),
                location: Some(Location::line(start_line)),
            });
        }
        line += statement.matches('\n').count();
    }

    NormalizedInput {
        kind: ContentKind::Sql,
        blocks,
    }
}

fn normalize_whole(content: &str, kind: ContentKind) -> NormalizedInput {
    let trimmed = content.trim();
    let blocks = if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![Block {
            content: trimmed.to_string(),
            location: Some(Location::line(1)),
        }]
    };
    NormalizedInput { kind, blocks }
}
