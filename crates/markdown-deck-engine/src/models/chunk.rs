use serde::Serialize;

/// How an internal node lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Side by side (columns), from `***` dividers.
    Horizontal,
    /// Stacked (rows), from `___` dividers.
    Vertical,
}

/// Display hint for a chunk's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A node in a page's layout tree.
///
/// A chunk is either a paragraph leaf holding Markdown text or a node holding
/// child chunks; the two never mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chunk {
    Paragraph {
        paragraph: String,
        alignment: Alignment,
    },
    Node {
        children: Vec<Chunk>,
        direction: Direction,
        alignment: Alignment,
    },
}

impl Chunk {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Chunk::Paragraph {
            paragraph: text.into(),
            alignment: Alignment::default(),
        }
    }

    pub fn node(children: Vec<Chunk>, direction: Direction) -> Self {
        Chunk::Node {
            children,
            direction,
            alignment: Alignment::default(),
        }
    }

    /// Replaces the display hint, keeping the content.
    pub fn aligned(mut self, hint: Alignment) -> Self {
        match &mut self {
            Chunk::Paragraph { alignment, .. } | Chunk::Node { alignment, .. } => *alignment = hint,
        }
        self
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Chunk::Paragraph { .. })
    }

    /// Leaf text; `None` for nodes.
    pub fn text(&self) -> Option<&str> {
        match self {
            Chunk::Paragraph { paragraph, .. } => Some(paragraph),
            Chunk::Node { .. } => None,
        }
    }

    /// Child chunks; empty for leaves.
    pub fn children(&self) -> &[Chunk] {
        match self {
            Chunk::Paragraph { .. } => &[],
            Chunk::Node { children, .. } => children,
        }
    }

    /// Node direction; `None` for leaves.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Chunk::Paragraph { .. } => None,
            Chunk::Node { direction, .. } => Some(*direction),
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self {
            Chunk::Paragraph { alignment, .. } | Chunk::Node { alignment, .. } => *alignment,
        }
    }

    /// All leaf texts, depth first.
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            Chunk::Paragraph { paragraph, .. } => vec![paragraph.as_str()],
            Chunk::Node { children, .. } => children.iter().flat_map(Chunk::paragraphs).collect(),
        }
    }
}
