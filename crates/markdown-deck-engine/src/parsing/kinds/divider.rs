/// The three divider flavours, each significant at 3+ repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerKind {
    /// `---`: page boundary.
    Hyphen,
    /// `___`: vertical split inside a page.
    Underscore,
    /// `***`: horizontal split inside a vertical segment.
    Asterisk,
}

impl DividerKind {
    fn from_marker(c: char) -> Option<Self> {
        match c {
            '-' => Some(DividerKind::Hyphen),
            '_' => Some(DividerKind::Underscore),
            '*' => Some(DividerKind::Asterisk),
            _ => None,
        }
    }
}

pub struct Divider;

impl Divider {
    pub const MIN_RUN: usize = 3;

    /// Returns the divider kind when the line is a standalone divider: surrounding
    /// whitespace allowed, 3+ copies of one marker, nothing in between.
    pub fn sig(line: &str) -> Option<DividerKind> {
        let t = line.trim();
        let first = t.chars().next()?;
        let kind = DividerKind::from_marker(first)?;
        let run = t.chars().take_while(|&c| c == first).count();
        (run == t.chars().count() && run >= Self::MIN_RUN).then_some(kind)
    }

    pub fn is(line: &str, kind: DividerKind) -> bool {
        Self::sig(line) == Some(kind)
    }
}
