//! The render model handed to template renderers.

use serde::Serialize;

use crate::compositing::{DeckStructure, composite, read_options};
use crate::error::Result;
use crate::models::{Chunk, Page, SlideSize, Styles};
use crate::parsing::extract_title;

pub const UNTITLED: &str = "Untitled";

/// What a template needs to draw one slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
    pub chunk: Chunk,
    pub layout: String,
    pub styles: Styles,
}

impl From<&Page> for Slide {
    fn from(page: &Page) -> Self {
        Self {
            h1: page.h1.clone(),
            h2: page.h2.clone(),
            h3: page.h3.clone(),
            chunk: page.chunk(),
            layout: page.option.layout.clone(),
            styles: page.option.styles.clone(),
        }
    }
}

/// A fully composed deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub title: String,
    #[serde(rename = "struct")]
    pub structure: DeckStructure,
    pub slides: Vec<Slide>,
    pub slide_width: u32,
    pub slide_height: u32,
}

impl Deck {
    pub fn from_markdown(document: &str) -> Result<Self> {
        let pages = composite(document)?;
        let SlideSize { width, height } = read_options(document)?.computed_slide_size()?;

        Ok(Self {
            title: extract_title(document).unwrap_or_else(|| UNTITLED.to_string()),
            structure: DeckStructure::from_pages(&pages),
            slides: pages.iter().map(Slide::from).collect(),
            slide_width: width,
            slide_height: height,
        })
    }
}
