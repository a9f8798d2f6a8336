use serde::Serialize;

use crate::compositing::build_chunk_tree;
use crate::parsing::kinds::Heading;

use super::{Chunk, PageOption};

/// One slide: resolved headings, its own options, and the body text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Body with decorators and h1..h3 lines removed, blank edges trimmed.
    pub raw_md: String,
    /// Owned by this page; never shared with another page or the baseline.
    pub option: PageOption,
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
}

impl Page {
    /// Builds a page, dropping h1..h3 lines from the body (they are carried
    /// as metadata) and trimming leading/trailing blank lines.
    pub fn new(
        raw_md: &str,
        option: PageOption,
        h1: Option<String>,
        h2: Option<String>,
        h3: Option<String>,
    ) -> Self {
        Self {
            raw_md: strip_page_headings(raw_md),
            option,
            h1,
            h2,
            h3,
        }
    }

    /// The shallowest heading present.
    pub fn title(&self) -> Option<&str> {
        self.h1
            .as_deref()
            .or(self.h2.as_deref())
            .or(self.h3.as_deref())
    }

    /// The next heading below the title, if any.
    pub fn subtitle(&self) -> Option<&str> {
        if self.h1.is_some() {
            self.h2.as_deref().or(self.h3.as_deref())
        } else if self.h2.is_some() {
            self.h3.as_deref()
        } else {
            None
        }
    }

    /// Layout tree of the body. Recomputed on every call.
    pub fn chunk(&self) -> Chunk {
        build_chunk_tree(&self.raw_md)
    }
}

fn strip_page_headings(raw_md: &str) -> String {
    let lines: Vec<&str> = raw_md
        .lines()
        .filter(|line| !Heading::structures_page(line))
        .collect();

    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n").trim_end().to_string(),
        _ => String::new(),
    }
}
