//! # Line-Level Parsing
//!
//! Everything the compositor needs to know about individual lines and the
//! small grammars embedded in a deck document.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter types with owned syntax (`CodeFence`, `Divider`, `Heading`)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`value`**: `Value`, the loosely typed option value, and its coercion rules
//! - **`frontmatter`**: the leading YAML block, resolved into the baseline `PageOption`
//! - **`decorator`**: `@(key=value, ...)` overlays folded into a page's options
//!
//! Comment stripping and title extraction operate on the whole document and
//! live here.

pub mod classify;
pub mod decorator;
pub mod frontmatter;
pub mod kinds;
pub mod value;

use std::sync::OnceLock;

use regex::Regex;

pub use classify::{LineClass, MarkdownLineClassifier, is_comment, is_decorator, is_empty};
pub use decorator::{apply_decorator, decorator_entries, parse_decorator};
pub use frontmatter::{parse_frontmatter, split_frontmatter};
pub use value::Value;

/// Removes `<!-- ... -->` comments (which may span lines) and `%%` line
/// comments, then trims the document.
pub fn strip_comments(document: &str) -> String {
    static HTML_COMMENT: OnceLock<Regex> = OnceLock::new();
    static LINE_COMMENT: OnceLock<Regex> = OnceLock::new();
    let html = HTML_COMMENT
        .get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));
    let line = LINE_COMMENT
        .get_or_init(|| Regex::new(r"(?m)^%%.*$").expect("Invalid line comment regex"));

    let document = html.replace_all(document, "");
    line.replace_all(&document, "").trim().to_string()
}

/// The first h1 or h2 in the document, used as the deck title.
pub fn extract_title(document: &str) -> Option<String> {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    let re = TITLE
        .get_or_init(|| Regex::new(r"(?m)^(?:#|##)[ \t]+(.*?)\r?$").expect("Invalid title regex"));
    re.captures(document).map(|caps| caps[1].trim().to_string())
}
