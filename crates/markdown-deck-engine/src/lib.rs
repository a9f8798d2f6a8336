//! # markdown-deck-engine
//!
//! Composes an annotated Markdown document into an ordered list of slide
//! [`Page`]s: resolved headings, per-page presentation options, and a layout
//! tree ([`Chunk`]) for each page body.
//!
//! ```text
//! ---
//! theme: beam
//! ---
//! # Title
//! @(layout=split)
//! Left
//! ***
//! Right
//! ```
//!
//! Rendering the chunk text and templating the pages are left to callers;
//! [`Deck`] bundles everything a template needs.

pub mod compositing;
pub mod deck;
pub mod error;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use compositing::{DeckStructure, HeadingEntry, PageMeta, composite, read_options};
pub use deck::{Deck, Slide};
pub use error::{CompositeError, Result};
pub use models::{Alignment, Chunk, Direction, Page, PageOption, SlideSize, Styles};
pub use parsing::{Value, extract_title, parse_decorator, parse_frontmatter};
