//! Code-family normalization: comment stripping and line-block splitting.

use super::{Block, ContentKind, NormalizedInput};
use crate::core::Location;

pub(super) fn normalize(content: &str) -> NormalizedInput {
    let stripped = strip_comments(content);

    let blocks = stripped
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(Block {
                content: trimmed.to_string(),
                location: Some(Location::line(idx + 1)),
            })
        })
        .collect();

    NormalizedInput {
        kind: ContentKind::Code,
        blocks,
    }
}

/// Remove `//` and `/* */` comments while preserving newlines, so block
/// locations keep pointing at the original source lines. String and
/// template literals are honored: comment markers inside them are content.
fn strip_comments(source: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Source,
        Str(char),
        LineComment,
        BlockComment,
    }

    let mut out = String::with_capacity(source.len());
    let mut state = State::Source;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Source => match c {
                '"' | '\'' | '`' => {
                    state = State::Str(c);
                    out.push(c);
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        state = State::LineComment;
                    }
                    Some('*') => {
                        chars.next();
                        state = State::BlockComment;
                    }
                    _ => out.push(c),
                },
                _ => out.push(c),
            },
            State::Str(quote) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == quote || (c == '\n' && quote != '`') {
                    state = State::Source;
                }
            }
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Source;
                }
            }
            State::BlockComment => {
                if c == '\n' {
                    out.push('\n');
                } else if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Source;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comments_are_stripped() {
        let input = normalize("let a = 1; // trailing\n// whole line\nlet b = 2;");
        assert_eq!(input.blocks.len(), 2);
        assert_eq!(input.blocks[0].content, "let a = 1;");
        assert_eq!(input.blocks[1].content, "let b = 2;");
        assert_eq!(input.blocks[1].location.as_ref().unwrap().line, 3);
    }

    #[test]
    fn block_comments_preserve_line_numbers() {
        let input = normalize("let a = 1;\n/* spans\nlines */\nlet b = 2;");
        assert_eq!(input.blocks.len(), 2);
        assert_eq!(input.blocks[1].location.as_ref().unwrap().line, 4);
    }

    #[test]
    fn comment_markers_inside_strings_survive() {
        let stripped = strip_comments("const url = \"http://example.com\";");
        assert!(stripped.contains("http://example.com"));
    }

    #[test]
    fn template_literals_keep_content() {
        let stripped = strip_comments("const q = `a // not a comment`;");
        assert!(stripped.contains("// not a comment"));
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        let input = normalize("let a = 1;\n   \n\t\nlet b = 2;");
        assert_eq!(input.blocks.len(), 2);
    }
}
