//! # Compositing
//!
//! Turns a deck document into pages, in one direction:
//!
//! 1. comment stripping and frontmatter split (`parsing`)
//! 2. **`paginate`**: the line-scanning state machine emitting pages at
//!    boundaries, with decorators folded into a clone of the baseline options
//! 3. **`inherit`**: forward pass filling headings pages did not set themselves
//! 4. **`chunking`**: on demand, a page body split into its layout tree
//!
//! **`structure`** indexes the finished pages by heading.
//!
//! The whole pipeline is synchronous and pure; a document either composes
//! completely or fails with no partial result.

pub mod chunking;
pub mod inherit;
pub mod paginate;
pub mod structure;

pub use chunking::{build_chunk_tree, split_by_divider};
pub use inherit::inherit_headings;
pub use paginate::{Paginator, paginate};
pub use structure::{DeckStructure, HeadingEntry, PageMeta};

use crate::error::Result;
use crate::models::{Page, PageOption};
use crate::parsing::{parse_frontmatter, strip_comments};

/// Composites a Markdown document into slide pages.
///
/// Splitting criteria:
/// - a new h1/h2/h3, except a deeper one directly following another heading
/// - a `---` divider (`___` and `***` split layout, not pages)
pub fn composite(document: &str) -> Result<Vec<Page>> {
    let document = strip_comments(document);
    let (body, baseline) = parse_frontmatter(&document)?;

    let mut pages = paginate(&body, &baseline)?;
    inherit_headings(&mut pages);
    Ok(pages)
}

/// Resolves only the document-level options from the frontmatter.
pub fn read_options(document: &str) -> Result<PageOption> {
    let (_, baseline) = parse_frontmatter(&strip_comments(document))?;
    Ok(baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositeError;
    use crate::models::{Chunk, Direction};
    use crate::parsing::Value;
    use insta::assert_yaml_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn frontmatter_reaches_every_page() {
        let doc = "
---
layout: split
default_h1: true
default_h2: false
---
# Main Title

## Subtitle

Content of the first slide.

---

## Second Slide

- Bullet point 1
";
        let pages = composite(doc).unwrap();
        assert_eq!(pages.len(), 2);
        for page in &pages {
            assert_eq!(page.option.layout, "split");
            assert!(page.option.default_h1);
            assert!(!page.option.default_h2);
        }
        assert_eq!(pages[1].h1.as_deref(), Some("Main Title"));
        assert_eq!(pages[1].h2.as_deref(), Some("Second Slide"));
    }

    #[test]
    fn no_headings_or_dividers_is_one_trimmed_page() {
        let doc = "<!-- draft -->\n\n  Some intro\n%% private note\nthat spans lines.\n\n";
        let pages = composite(doc).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].raw_md, "Some intro\n\nthat spans lines.");
    }

    #[test]
    fn heading_structure_of_nested_sections() {
        let doc = "\n# Title\np0\n## Heading1\np1\n### Subheading1\np2\n## Heading2\n### Subheading1\np3\n# Title2\np4\n";
        let pages = composite(doc).unwrap();
        assert_eq!(pages.len(), 5);

        let structure = DeckStructure::from_pages(&pages);
        assert_yaml_snapshot!(structure.headings, @r"
        - level: 1
          content: Title
          page_ids:
            - 0
            - 1
            - 2
            - 3
        - level: 2
          content: Heading1
          page_ids:
            - 1
            - 2
        - level: 3
          content: Subheading1
          page_ids:
            - 2
        - level: 2
          content: Heading2
          page_ids:
            - 3
        - level: 3
          content: Subheading1
          page_ids:
            - 3
        - level: 1
          content: Title2
          page_ids:
            - 4
        ");

        let meta: Vec<_> = structure
            .page_meta
            .iter()
            .map(|m| (m.h1.as_deref(), m.h2.as_deref(), m.h3.as_deref()))
            .collect();
        assert_eq!(
            meta,
            vec![
                (Some("Title"), None, None),
                (Some("Title"), Some("Heading1"), None),
                (Some("Title"), Some("Heading1"), Some("Subheading1")),
                (Some("Title"), Some("Heading2"), Some("Subheading1")),
                (Some("Title2"), None, None),
            ]
        );
    }

    #[test]
    fn layout_dividers_build_the_chunk_tree() {
        let pages = composite("Paragraph 1\n___\nParagraph 2\n***\nParagraph 3\n***\n").unwrap();
        assert_eq!(pages.len(), 1);

        let chunk = pages[0].chunk();
        assert_eq!(chunk.direction(), Some(Direction::Vertical));
        assert_eq!(chunk.children().len(), 2);
        assert_eq!(chunk.children()[0], Chunk::paragraph("Paragraph 1"));

        let columns = &chunk.children()[1];
        assert_eq!(columns.direction(), Some(Direction::Horizontal));
        assert_eq!(columns.children().len(), 3);
        assert!(columns.children().iter().all(Chunk::is_paragraph));
    }

    #[test]
    fn pages_own_independent_options() {
        let doc = "---\nbackground: white\n---\n@(background=black)\nOne\n---\nTwo";
        let mut pages = composite(doc).unwrap();
        pages[1].option.layout = "changed".into();

        assert_eq!(pages[0].option.layout, "content");
        assert_eq!(
            pages[0].option.styles.get("background"),
            Some(&Value::from("black"))
        );
        assert_eq!(
            pages[1].option.styles.get("background"),
            Some(&Value::from("white"))
        );
    }

    #[test]
    fn errors_leave_no_partial_result() {
        let doc = "# One\nfine\n# Two\n@(default_h1=perhaps)\n";
        assert_eq!(
            composite(doc).unwrap_err(),
            CompositeError::OptionType {
                key: "default_h1".into(),
                expected: "a boolean",
                found: "perhaps".into(),
            }
        );
    }

    #[test]
    fn read_options_ignores_the_body() {
        let doc = "<!-- meta -->\n---\ntheme: beam\n---\n@(theme=other)\nBody";
        assert_eq!(read_options(doc).unwrap().theme, "beam");
    }
}
