// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_deck(sections: usize) -> String {
    let mut content = String::from("---\ntheme: beam\ndefault_h1: true\n---\n");

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\nIntro paragraph.\n\n"));
        content.push_str("## Details\n@(layout=split, background=blue)\nLeft\n***\nRight\n___\nFooter\n\n");
        content.push_str("```rust\n# not a heading\n---\n```\n\n---\n\n");
        content.push_str("### Notes\n- point one\n- point two\n\n");
    }

    content
}
