use markdown_deck_engine::{
    Chunk, CompositeError, Deck, Direction, Page, Value, composite,
    compositing::build_chunk_tree,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn headings(page: &Page) -> (Option<&str>, Option<&str>, Option<&str>) {
    (page.h1.as_deref(), page.h2.as_deref(), page.h3.as_deref())
}

#[test]
fn talk_paginates_by_headings_and_dividers() {
    let pages = composite(&fixture("talk")).unwrap();

    let got: Vec<_> = pages.iter().map(headings).collect();
    assert_eq!(
        got,
        vec![
            (Some("Intro"), None, None),
            (Some("Intro"), Some("Agenda"), Some("Today")),
            (Some("Intro"), Some("Code"), None),
            (Some("Intro"), Some("Code"), None),
            (Some("Wrap-up"), None, None),
        ]
    );
}

#[test]
fn talk_bodies_are_clean() {
    let pages = composite(&fixture("talk")).unwrap();

    assert_eq!(pages[0].raw_md, "Welcome to the talk.");
    assert_eq!(pages[1].raw_md, "- Parsing\n- Layout");
    // Heading-shaped lines are dropped from bodies even inside fences.
    assert_eq!(
        pages[2].raw_md,
        "```rust\n// --- not a divider\nfn main() {}\n```"
    );
    assert!(!pages.iter().any(|p| p.raw_md.contains("speaker notes")));
    assert!(!pages.iter().any(|p| p.raw_md.contains("breathe")));
}

#[test]
fn talk_options_are_per_page() {
    let pages = composite(&fixture("talk")).unwrap();

    for page in &pages {
        assert_eq!(page.option.theme, "beam");
        assert_eq!(page.option.styles.get("footer"), Some(&Value::from("Rust meetup")));
    }

    let split = &pages[3];
    assert_eq!(split.option.layout, "split");
    assert_eq!(
        split.option.styles.get("background-color"),
        Some(&Value::from("#202020"))
    );
    assert_eq!(
        split.chunk().paragraphs(),
        vec!["Left column", "Right column"]
    );

    assert_eq!(pages[4].option.layout, "content");
    assert!(!pages[4].option.default_h1);
    assert!(pages[0].option.default_h1);
}

#[test]
fn talk_deck_model() {
    let deck = Deck::from_markdown(&fixture("talk")).unwrap();

    assert_eq!(deck.title, "Intro");
    assert_eq!((deck.slide_width, deck.slide_height), (720, 540));
    assert_eq!(deck.slides.len(), 5);
    let h1_entries: Vec<_> = deck
        .structure
        .headings
        .iter()
        .filter(|h| h.level == 1)
        .map(|h| (h.content.as_str(), h.page_ids.clone()))
        .collect();
    assert_eq!(
        h1_entries,
        vec![("Intro", vec![0, 1, 2, 3]), ("Wrap-up", vec![4])]
    );
}

#[test]
fn layout_fixture_nests_columns_in_rows() {
    let pages = composite(&fixture("layout")).unwrap();
    assert_eq!(pages.len(), 1);

    let tree = pages[0].chunk();
    assert_eq!(tree.direction(), Some(Direction::Vertical));
    let rows = tree.children();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], Chunk::paragraph("Title row"));
    assert_eq!(rows[1].direction(), Some(Direction::Horizontal));
    assert_eq!(rows[1].paragraphs(), vec!["One", "Two", "Three"]);
    assert_eq!(rows[2], Chunk::paragraph("```\n***\n___\n```"));
}

#[test]
fn chunk_tree_is_recomputable() {
    let pages = composite(&fixture("layout")).unwrap();
    assert_eq!(pages[0].chunk(), pages[0].chunk());
    assert_eq!(pages[0].chunk(), build_chunk_tree(&pages[0].raw_md));
}

#[test]
fn invalid_documents_fail_whole() {
    let err = composite("# Fine\ntext\n---\n@(slide_width=wide)\nBroken").unwrap_err();
    assert!(matches!(err, CompositeError::OptionType { ref key, .. } if key == "slide_width"));

    let err = composite("# Fine\n@(layout=split\nBody").unwrap_err();
    assert!(matches!(err, CompositeError::DecoratorSyntax { .. }));

    let err = composite("---\naspect_ratio: 16x9\n---\nBody").unwrap_err();
    assert_eq!(err, CompositeError::InvalidAspectRatio("16x9".into()));
}
