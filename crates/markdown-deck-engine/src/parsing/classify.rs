use super::kinds::{CodeFence, Divider, DividerKind, FenceKind, Heading};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; whether a heading or divider is
/// actually honoured depends on the escape state the caller tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub text: &'a str,
    /// Whitespace only.
    pub is_blank: bool,
    /// A single-line `<!-- ... -->` comment.
    pub is_comment: bool,
    /// ATX heading level (0 when not a heading).
    pub heading_level: u8,
    pub divider: Option<DividerKind>,
    /// Starts with `@(`; the full grammar is checked when the decorator is parsed.
    pub is_decorator: bool,
    pub fence_sig: Option<FenceKind>,
}

impl LineClass<'_> {
    /// Blank or comment-only.
    pub fn is_empty(&self) -> bool {
        self.is_blank || self.is_comment
    }

    /// h1..h3, the levels that structure pages.
    pub fn page_heading_level(&self) -> Option<u8> {
        (1..=Heading::MAX_PAGE_LEVEL)
            .contains(&self.heading_level)
            .then_some(self.heading_level)
    }
}

/// Classifies individual lines for pagination.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        LineClass {
            text: line,
            is_blank: line.trim().is_empty(),
            is_comment: is_comment(line),
            heading_level: Heading::level(line),
            divider: Divider::sig(line),
            is_decorator: is_decorator(line),
            fence_sig: CodeFence::sig(line),
        }
    }
}

pub fn is_comment(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("<!--") && t.ends_with("-->")
}

/// Blank or comment-only.
pub fn is_empty(line: &str) -> bool {
    line.trim().is_empty() || is_comment(line)
}

/// Whether the line opens a decorator. Lines that open one but break its
/// grammar still count, so parsing reports them instead of keeping them as text.
pub fn is_decorator(line: &str) -> bool {
    line.trim_start().starts_with("@(")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<!-- This is a comment -->", true)]
    #[case("This is not a comment", false)]
    #[case("  <!-- padded -->  ", true)]
    fn comment_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_comment(line), expected);
    }

    #[rstest]
    #[case("<!-- This is a comment -->", true)]
    #[case("This is not a comment", false)]
    #[case(" \n", true)]
    #[case("", true)]
    fn empty_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_empty(line), expected);
    }

    #[rstest]
    #[case("@(layout=split, background=blue)", true)]
    #[case("  @(layout=default)  ", true)]
    #[case("This is not a deco", false)]
    #[case("@(key=value) Some text", true)]
    #[case("@(layout=split", true)]
    #[case("Some text @(key=value)", false)]
    #[case("@ (layout=split)", false)]
    #[case("@()", true)]
    fn decorator_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_decorator(line), expected);
    }

    #[test]
    fn classify_collects_local_facts() {
        let c = MarkdownLineClassifier.classify("## Agenda");
        assert_eq!(c.heading_level, 2);
        assert_eq!(c.page_heading_level(), Some(2));
        assert!(!c.is_empty());
        assert_eq!(c.divider, None);

        let c = MarkdownLineClassifier.classify("#### Detail");
        assert_eq!(c.page_heading_level(), None);

        let c = MarkdownLineClassifier.classify(" --- ");
        assert_eq!(c.divider, Some(DividerKind::Hyphen));
    }
}
