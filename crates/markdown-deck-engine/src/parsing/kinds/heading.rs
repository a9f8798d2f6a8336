pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;
    /// Deepest level that structures pages (h1..h3).
    pub const MAX_PAGE_LEVEL: u8 = 3;

    /// ATX heading level of a line, or 0 when the line is not a heading.
    ///
    /// The `#` run must start the line and be followed by whitespace or the
    /// end of the line.
    pub fn level(line: &str) -> u8 {
        let run = line.bytes().take_while(|&b| b == b'#').count();
        if run == 0 || run > Self::MAX_LEVEL as usize {
            return 0;
        }
        match line[run..].chars().next() {
            None => run as u8,
            Some(c) if c.is_whitespace() => run as u8,
            Some(_) => 0,
        }
    }

    /// Whether the line is an h1, h2 or h3.
    pub fn structures_page(line: &str) -> bool {
        (1..=Self::MAX_PAGE_LEVEL).contains(&Self::level(line))
    }

    /// Heading text with the `#` run and surrounding whitespace removed.
    pub fn text(line: &str) -> &str {
        line.trim_start_matches('#').trim()
    }
}
