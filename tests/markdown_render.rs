//! End-to-end tests for the markdown renderer.

use tagchat::markdown::{plain_text, render, to_json, Block, Inline};

fn text(s: &str) -> Inline {
    Inline::text(s)
}

#[test]
fn test_bold_round_trip() {
    assert_eq!(
        render("**bold**"),
        vec![Block::Paragraph {
            children: vec![Inline::Bold {
                children: vec![text("bold")]
            }]
        }]
    );
}

#[test]
fn test_bold_italic_nesting() {
    assert_eq!(
        render("***both***"),
        vec![Block::Paragraph {
            children: vec![Inline::Bold {
                children: vec![Inline::Italic {
                    children: vec![text("both")]
                }]
            }]
        }]
    );
}

#[test]
fn test_code_block_not_inline_parsed() {
    assert_eq!(
        render("```js\n**x**\n```"),
        vec![Block::CodeBlock {
            language: Some("js".to_string()),
            text: "**x**".to_string(),
        }]
    );
}

#[test]
fn test_plain_text_is_idempotent() {
    for input in [
        "just some words",
        "two\nlines",
        "numbers 1, 2 and 3.",
        "colons: fine; dashes-too",
    ] {
        let blocks = render(input);
        let again = render(&plain_text(&blocks));
        assert_eq!(blocks, again, "input {input:?}");
    }
}

#[test]
fn test_unterminated_markers_degrade_to_text() {
    assert_eq!(
        render("a ** b"),
        vec![Block::Paragraph {
            children: vec![text("a ** b")]
        }]
    );
}

#[test]
fn test_tokens_do_not_cross_lines() {
    assert_eq!(
        render("**a\nb**"),
        vec![
            Block::Paragraph {
                children: vec![text("**a")]
            },
            Block::Paragraph {
                children: vec![text("b**")]
            },
        ]
    );
}

#[test]
fn test_spoiler_starts_unrevealed() {
    let blocks = render("||hidden||");
    assert_eq!(
        blocks[0].children(),
        &[Inline::Spoiler {
            children: vec![text("hidden")],
            revealed: false,
        }]
    );
}

#[test]
fn test_welcome_style_message() {
    let blocks = render("**Markdown Examples:**\n`*Italic*` → *Italic*\n# Header\n> Quote");
    assert_eq!(blocks.len(), 4);
    assert_eq!(
        blocks[1].children()[0],
        Inline::InlineCode {
            text: "*Italic*".to_string()
        }
    );
    assert!(matches!(blocks[2], Block::Heading { level: 1, .. }));
    assert!(matches!(blocks[3], Block::Quote { .. }));
}

#[test]
fn test_list_and_link() {
    let blocks = render("* https://github.com/x/y");
    assert_eq!(
        blocks,
        vec![Block::ListItem {
            children: vec![Inline::Link {
                url: "https://github.com/x/y".to_string()
            }]
        }]
    );
}

#[test]
fn test_json_wire_format() {
    let json = to_json(&render("> ||s||")).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"quote","children":[{"type":"spoiler","children":[{"type":"text","raw":"s"}],"revealed":false}]}]"#
    );
}
