//! Parse-only JavaScript validation via tree-sitter.

use super::SyntaxResult;
use tree_sitter::{Node, Parser};

pub(super) fn validate(content: &str) -> SyntaxResult {
    let mut parser = Parser::new();
    let language = tree_sitter_javascript::LANGUAGE.into();
    if parser.set_language(&language).is_err() {
        // Grammar/ABI mismatch: still a structured result, never a crash.
        return SyntaxResult::invalid("javascript", "JavaScript parser not initialized", 0, 0);
    }

    let tree = match parser.parse(content, None) {
        Some(tree) => tree,
        None => return SyntaxResult::invalid("javascript", "parse did not complete", 0, 0),
    };

    let root = tree.root_node();
    if !root.has_error() {
        return SyntaxResult::valid("javascript");
    }

    match first_error(root, content) {
        Some((message, line, column)) => {
            SyntaxResult::invalid("javascript", message, line, column)
        }
        None => SyntaxResult::invalid("javascript", "invalid JavaScript syntax", 0, 0),
    }
}

/// Depth-first search for the first ERROR or MISSING node in source order.
fn first_error(node: Node<'_>, source: &str) -> Option<(String, u32, u32)> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let text = source[node.byte_range()]
                .chars()
                .take(20)
                .collect::<String>();
            let token = text.split_whitespace().next().unwrap_or("input");
            format!("unexpected token near '{}'", token)
        };
        return Some((message, pos.row as u32 + 1, pos.column as u32));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.has_error() && !child.is_missing() {
            continue;
        }
        if let Some(found) = first_error(child, source) {
            return Some(found);
        }
    }
    None
}
