//! Splits a page body into its layout tree.
//!
//! `___` dividers split the body into vertical segments; inside each segment
//! `***` dividers split it into horizontal columns. Deeper nesting is not
//! supported. Dividers inside fenced regions are literal text, following the
//! same fence rule as pagination.

use crate::models::{Chunk, Direction};
use crate::parsing::kinds::{Divider, DividerKind, FenceTracker};

/// Splits `text` on standalone dividers of `kind` outside fenced regions.
///
/// Always yields at least one segment. Text after the final divider forms a
/// trailing segment even when it is empty, so `a\n***` gives `["a", ""]`.
pub fn split_by_divider(text: &str, kind: DividerKind) -> Vec<String> {
    let mut segments: Vec<Vec<&str>> = vec![Vec::new()];
    let mut fence = FenceTracker::new();

    for line in text.lines() {
        let escaped = fence.advance_line(line);
        if !escaped && Divider::is(line, kind) {
            segments.push(Vec::new());
        } else if let Some(current) = segments.last_mut() {
            current.push(line);
        }
    }

    segments.into_iter().map(|lines| lines.join("\n")).collect()
}

/// Builds the chunk tree for a (preprocessed) page body.
///
/// A body without dividers is a single paragraph leaf. Anything else is a
/// vertical node whose children are leaves, or horizontal nodes where a
/// segment contained `***` dividers.
pub fn build_chunk_tree(raw_md: &str) -> Chunk {
    let mut rows: Vec<Chunk> = split_by_divider(raw_md, DividerKind::Underscore)
        .into_iter()
        .map(split_columns)
        .collect();

    if rows.len() == 1 && rows[0].is_paragraph() {
        return rows.remove(0);
    }
    Chunk::node(rows, Direction::Vertical)
}

fn split_columns(segment: String) -> Chunk {
    let columns = split_by_divider(&segment, DividerKind::Asterisk);
    if columns.len() > 1 {
        Chunk::node(
            columns.into_iter().map(Chunk::paragraph).collect(),
            Direction::Horizontal,
        )
    } else {
        Chunk::paragraph(segment)
    }
}
