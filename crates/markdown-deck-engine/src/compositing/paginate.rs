//! The pagination state machine.
//!
//! Lines are pushed one at a time; a page is emitted whenever a boundary is
//! reached. Boundaries are:
//!
//! - an h1..h3 when no heading has been seen since the last content line, or
//!   one at the same or a shallower level than the previous heading (a
//!   strictly deeper heading directly after another one joins its page)
//! - a standalone `---` divider, which is dropped
//! - the end of the document
//!
//! Inside fenced regions headings, dividers and decorators are literal text.

use crate::error::Result;
use crate::models::{Page, PageOption};
use crate::parsing::kinds::{DividerKind, FenceTracker, Heading};
use crate::parsing::{MarkdownLineClassifier, apply_decorator, is_decorator, is_empty};

#[derive(Debug, Clone)]
struct BufferedLine {
    text: String,
    escaped: bool,
}

/// The h1..h3 seen so far for the page in progress.
#[derive(Debug, Default, Clone)]
struct HeadingContext {
    h1: Option<String>,
    h2: Option<String>,
    h3: Option<String>,
}

impl HeadingContext {
    /// Setting a level clears every deeper one.
    fn set(&mut self, level: u8, text: &str) {
        let text = Some(text.to_string());
        match level {
            1 => {
                self.h1 = text;
                self.h2 = None;
                self.h3 = None;
            }
            2 => {
                self.h2 = text;
                self.h3 = None;
            }
            3 => self.h3 = text,
            _ => {}
        }
    }
}

/// Scan state threaded through the line loop.
#[derive(Debug, Default)]
struct ScanContext {
    buffer: Vec<BufferedLine>,
    headings: HeadingContext,
    fence: FenceTracker,
    /// Level of the latest h1..h3 since the last content line; 0 if none.
    prev_heading_level: u8,
}

pub struct Paginator<'a> {
    classifier: MarkdownLineClassifier,
    baseline: &'a PageOption,
    ctx: ScanContext,
    out: Vec<Page>,
}

impl<'a> Paginator<'a> {
    /// `baseline` is cloned for every page before its decorators are applied.
    pub fn new(baseline: &'a PageOption) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            baseline,
            ctx: ScanContext::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) -> Result<()> {
        let c = self.classifier.classify(line);
        let escaped = self.ctx.fence.advance(c.fence_sig);
        let heading = if escaped {
            None
        } else {
            c.page_heading_level()
        };

        if let Some(level) = heading
            && (self.ctx.prev_heading_level == 0 || level <= self.ctx.prev_heading_level)
        {
            self.flush()?;
        }

        if !escaped && c.divider == Some(DividerKind::Hyphen) {
            self.flush()?;
            self.ctx.prev_heading_level = 0;
            return Ok(());
        }

        self.ctx.buffer.push(BufferedLine {
            text: line.to_string(),
            escaped,
        });

        if let Some(level) = heading {
            self.ctx.headings.set(level, Heading::text(line));
            self.ctx.prev_heading_level = level;
        } else {
            let structural = !escaped && (c.is_decorator || c.heading_level > 0);
            if !c.is_empty() && !structural {
                self.ctx.prev_heading_level = 0;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<Page>> {
        // EOF flush
        self.flush()?;
        Ok(self.out)
    }

    fn flush(&mut self) -> Result<()> {
        let buffer = std::mem::take(&mut self.ctx.buffer);
        if buffer.iter().all(|l| is_empty(&l.text)) {
            if !buffer.is_empty() {
                log::debug!("Discarding blank page buffer of {} lines", buffer.len());
            }
            return Ok(());
        }

        let mut option = self.baseline.clone();
        let mut body = Vec::with_capacity(buffer.len());
        for line in &buffer {
            if !line.escaped && is_decorator(&line.text) {
                apply_decorator(&line.text, &mut option)?;
            } else {
                body.push(line.text.as_str());
            }
        }
        option.validate()?;

        let HeadingContext { h1, h2, h3 } = std::mem::take(&mut self.ctx.headings);
        let page = Page::new(&body.join("\n"), option, h1, h2, h3);
        log::debug!(
            "Composed page {} ({})",
            self.out.len(),
            page.title().unwrap_or("untitled")
        );
        self.out.push(page);
        Ok(())
    }
}

/// Paginates a comment- and frontmatter-free body against `baseline`.
///
/// Headings on the returned pages are as written; inheritance is applied
/// separately.
pub fn paginate(body: &str, baseline: &PageOption) -> Result<Vec<Page>> {
    let mut paginator = Paginator::new(baseline);
    for line in body.lines() {
        paginator.push(line)?;
    }
    paginator.finish()
}
