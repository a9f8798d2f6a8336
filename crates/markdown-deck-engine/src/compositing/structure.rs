//! Heading index over a finished page list, for tables of contents and
//! navigation.

use serde::Serialize;

use crate::models::Page;

/// One heading and the pages that fall under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    pub level: u8,
    pub content: String,
    pub page_ids: Vec<usize>,
}

/// The heading trail in effect on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckStructure {
    pub page_meta: Vec<PageMeta>,
    pub headings: Vec<HeadingEntry>,
}

impl DeckStructure {
    /// Walks the pages in order. A heading that differs from the one currently
    /// tracked at its level opens a new entry; every page is then filed under
    /// the latest entries for the levels it covers.
    pub fn from_pages(pages: &[Page]) -> Self {
        let mut current = PageMeta::default();
        let mut latest: [Option<usize>; 3] = [None, None, None];
        let mut structure = DeckStructure::default();

        for (page_id, page) in pages.iter().enumerate() {
            if let Some(h1) = &page.h1
                && current.h1.as_ref() != Some(h1)
            {
                current = PageMeta {
                    h1: Some(h1.clone()),
                    ..PageMeta::default()
                };
                latest[0] = Some(structure.open(1, h1));
            }
            if let Some(h2) = &page.h2
                && current.h2.as_ref() != Some(h2)
            {
                current.h2 = Some(h2.clone());
                current.h3 = None;
                latest[1] = Some(structure.open(2, h2));
            }
            if let Some(h3) = &page.h3
                && current.h3.as_ref() != Some(h3)
            {
                current.h3 = Some(h3.clone());
                latest[2] = Some(structure.open(3, h3));
            }

            let covers = [
                page.h1.is_some() || page.h2.is_some() || page.h3.is_some(),
                page.h2.is_some() || page.h3.is_some(),
                page.h3.is_some(),
            ];
            for (covered, entry) in covers.into_iter().zip(latest) {
                if covered && let Some(entry) = entry {
                    structure.headings[entry].page_ids.push(page_id);
                }
            }

            structure.page_meta.push(current.clone());
        }

        structure
    }

    fn open(&mut self, level: u8, content: &str) -> usize {
        self.headings.push(HeadingEntry {
            level,
            content: content.to_string(),
            page_ids: vec![],
        });
        self.headings.len() - 1
    }
}
