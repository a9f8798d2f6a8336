//! `@(key=value, ...)` lines overriding options for the page they sit on.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CompositeError, Result};
use crate::models::PageOption;

use super::Value;

fn decorator_regex() -> &'static Regex {
    static DECORATOR: OnceLock<Regex> = OnceLock::new();
    DECORATOR.get_or_init(|| Regex::new(r"^\s*@\((.*)\)\s*$").expect("Invalid decorator regex"))
}

/// Parses a decorator line into its ordered `(key, value)` entries.
///
/// Entries are separated by commas outside quotes. Quoted values have their
/// quotes stripped and escaped quotes unescaped before coercion.
pub fn decorator_entries(line: &str) -> Result<Vec<(String, Value)>> {
    let syntax = |reason: String| CompositeError::DecoratorSyntax {
        line: line.to_string(),
        reason,
    };

    let caps = decorator_regex()
        .captures(line)
        .ok_or_else(|| syntax("expected `@(key=value, ...)`".to_string()))?;
    let body = caps.get(1).map_or("", |m| m.as_str());

    let mut entries = Vec::new();
    for entry in split_entries(body).map_err(syntax)? {
        if entry.trim().is_empty() {
            continue;
        }
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| syntax(format!("expected `key=value`, found `{}`", entry.trim())))?;
        let key = key.trim();
        if !is_key(key) {
            return Err(syntax(format!("invalid key `{key}`")));
        }
        entries.push((key.to_string(), Value::coerce(&unquote(value.trim()))));
    }
    Ok(entries)
}

/// Folds a decorator into `option` in place.
pub fn apply_decorator(line: &str, option: &mut PageOption) -> Result<()> {
    for (key, value) in decorator_entries(line)? {
        log::trace!("Decorator sets `{key}` = {value}");
        option.set(&key, value)?;
    }
    Ok(())
}

/// Applies a decorator on top of `base` (or the defaults), returning a new,
/// independently owned option. `base` is never modified.
pub fn parse_decorator(line: &str, base: Option<&PageOption>) -> Result<PageOption> {
    let mut option = base.cloned().unwrap_or_default();
    apply_decorator(line, &mut option)?;
    option.validate()?;
    Ok(option)
}

fn is_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '\\'))
}

fn split_entries(body: &str) -> std::result::Result<Vec<&str>, String> {
    let mut entries = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, ',') => {
                entries.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    entries.push(&body[start..]);
    Ok(entries)
}

fn unquote(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if !quoted {
        return value.to_string();
    }

    let inner = &value[1..value.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(next) = chars.next()
        {
            if !matches!(next, '"' | '\'' | '\\') {
                out.push(c);
            }
            out.push(next);
        } else {
            out.push(c);
        }
    }
    out
}
