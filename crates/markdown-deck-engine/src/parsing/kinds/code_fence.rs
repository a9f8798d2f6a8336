/// The two fence flavours; a region opened by one is only closed by the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence opener/closer. Leading indentation is ignored.
    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }
}

/// Tracks whether the scan is inside an escaped (fenced) region.
///
/// Pagination, decorator folding and chunk splitting all drive one of these
/// line by line, so the three agree on which lines are literal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FenceTracker {
    open: Option<FenceKind>,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line and returns whether the scan is escaped *after* it.
    ///
    /// The opening fence line itself reports `true`; the closing fence line
    /// reports `false`.
    pub fn advance(&mut self, sig: Option<FenceKind>) -> bool {
        match (self.open, sig) {
            (None, Some(kind)) => self.open = Some(kind),
            (Some(open), Some(kind)) if open == kind => self.open = None,
            _ => {}
        }
        self.is_escaped()
    }

    /// Convenience over [`FenceTracker::advance`] for raw text.
    pub fn advance_line(&mut self, line: &str) -> bool {
        self.advance(CodeFence::sig(line))
    }

    pub fn is_escaped(&self) -> bool {
        self.open.is_some()
    }
}
