//! Leading `---`-delimited YAML block carrying the document-wide options.

use crate::error::Result;
use crate::models::PageOption;

use super::Value;

pub const DELIMITER: &str = "---";

/// Splits a leading frontmatter block from `document`.
///
/// Returns `(yaml, body)` when the first line is `---` and a later line closes
/// the block; `None` when there is no complete block.
pub fn split_frontmatter(document: &str) -> Option<(&str, &str)> {
    let mut lines = document.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some((&document[start..offset], &document[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parses the frontmatter into the document baseline options.
///
/// Returns the trimmed body (frontmatter removed) and the baseline. Recognised
/// keys populate typed fields, everything else lands in `styles`. YAML that
/// fails to parse, or is not a mapping, falls back to the defaults.
pub fn parse_frontmatter(document: &str) -> Result<(String, PageOption)> {
    let document = document.trim();
    let Some((yaml, body)) = split_frontmatter(document) else {
        return Ok((document.to_string(), PageOption::default()));
    };

    let option = options_from_yaml(yaml)?;
    Ok((body.trim().to_string(), option))
}

fn options_from_yaml(yaml: &str) -> Result<PageOption> {
    let mut option = PageOption::default();
    if yaml.trim().is_empty() {
        return Ok(option);
    }

    let mapping = match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
        Ok(serde_yaml::Value::Mapping(mapping)) => mapping,
        Ok(serde_yaml::Value::Null) => return Ok(option),
        Ok(_) => {
            log::warn!("Frontmatter is not a key/value mapping, using default options");
            return Ok(option);
        }
        Err(e) => {
            log::warn!("Malformed frontmatter, using default options: {e}");
            return Ok(option);
        }
    };

    for (key, value) in mapping {
        let Some(key) = scalar_text(&key) else {
            log::warn!("Ignoring frontmatter entry with non-scalar key");
            continue;
        };
        if let Some(value) = to_value(&key, value) {
            option.set(&key, value)?;
        }
    }

    option.validate()?;
    Ok(option)
}

fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_value(key: &str, value: serde_yaml::Value) -> Option<Value> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Bool(b) => Some(Value::Bool(b)),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Int(i)),
            None => n.as_f64().map(Value::Float),
        },
        serde_yaml::Value::String(s) => Some(Value::Str(s)),
        serde_yaml::Value::Tagged(tagged) => to_value(key, tagged.value),
        nested @ (serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_)) => {
            log::warn!("Frontmatter value for `{key}` is not a scalar, keeping it as text");
            serde_yaml::to_string(&nested)
                .ok()
                .map(|text| Value::Str(text.trim().to_string()))
        }
    }
}
