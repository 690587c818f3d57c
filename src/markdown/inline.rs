//! Inline scanner.
//!
//! Scans a single line left to right. At each position the rules are tried in
//! priority order and the first one that matches wins; text between matches
//! becomes [`Inline::Text`]. Delimited spans are non-greedy, need at least one
//! character inside, and are parsed again for nested styles. Code spans and
//! URLs are terminal.

use super::node::Inline;
use super::url::url_end;

/// How a rule recognises its span.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Same delimiter on both sides, e.g. `**`.
    Delimited(&'static str),
    /// Backtick-quoted code, no backticks inside.
    Code,
    /// Bare `http(s)://` URL up to the next whitespace.
    Url,
}

/// A scanning rule: a pattern and the node built from its match.
struct Rule {
    pattern: Pattern,
    build: fn(&str) -> Inline,
}

/// Rules in priority order.
const RULES: &[Rule] = &[
    Rule {
        pattern: Pattern::Delimited("||"),
        build: spoiler,
    },
    Rule {
        pattern: Pattern::Code,
        build: inline_code,
    },
    Rule {
        pattern: Pattern::Delimited("***"),
        build: bold_italic,
    },
    Rule {
        pattern: Pattern::Delimited("**"),
        build: bold,
    },
    Rule {
        pattern: Pattern::Delimited("__"),
        build: underline,
    },
    Rule {
        pattern: Pattern::Delimited("~~"),
        build: strikethrough,
    },
    Rule {
        pattern: Pattern::Delimited("*"),
        build: italic,
    },
    Rule {
        pattern: Pattern::Delimited("_"),
        build: italic,
    },
    Rule {
        pattern: Pattern::Url,
        build: link,
    },
];

/// Bytes that can start a rule match.
const TRIGGERS: &[u8] = b"|`*_~h";

/// Parse a line into inline nodes.
///
/// Total over all input; unmatched markers stay literal text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut last = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_at(text, pos) {
            Some((end, node)) => {
                if pos > last {
                    nodes.push(Inline::text(&text[last..pos]));
                }
                nodes.push(node);
                pos = end;
                last = end;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if last < text.len() {
        nodes.push(Inline::text(&text[last..]));
    }

    nodes
}

/// Try every rule at `pos`, returning the match end and node of the first hit.
fn match_at(text: &str, pos: usize) -> Option<(usize, Inline)> {
    if !TRIGGERS.contains(&text.as_bytes()[pos]) {
        return None;
    }

    RULES.iter().find_map(|rule| {
        let (captured, end) = match rule.pattern {
            Pattern::Delimited(delim) => {
                let (inner_start, inner_end) = match_delimited(text, pos, delim)?;
                (&text[inner_start..inner_end], inner_end + delim.len())
            }
            Pattern::Code => {
                let (inner_start, inner_end) = match_code(text, pos)?;
                (&text[inner_start..inner_end], inner_end + 1)
            }
            Pattern::Url => {
                let end = url_end(text, pos)?;
                (&text[pos..end], end)
            }
        };
        Some((end, (rule.build)(captured)))
    })
}

/// Match `delim`, one or more characters, then the nearest `delim`.
///
/// Returns the byte range of the inner text.
fn match_delimited(text: &str, pos: usize, delim: &str) -> Option<(usize, usize)> {
    if !text[pos..].starts_with(delim) {
        return None;
    }

    let inner_start = pos + delim.len();
    let first = text[inner_start..].chars().next()?;
    if first == '\n' {
        return None;
    }

    let search_from = inner_start + first.len_utf8();
    let inner_end = search_from + text[search_from..].find(delim)?;
    if text[inner_start..inner_end].contains('\n') {
        return None;
    }

    Some((inner_start, inner_end))
}

/// Match a backtick code span with non-empty content.
fn match_code(text: &str, pos: usize) -> Option<(usize, usize)> {
    if !text[pos..].starts_with('`') {
        return None;
    }

    let inner_start = pos + 1;
    let inner_end = inner_start + text[inner_start..].find('`')?;
    (inner_end > inner_start).then_some((inner_start, inner_end))
}

fn spoiler(inner: &str) -> Inline {
    Inline::Spoiler {
        children: parse_inline(inner),
        revealed: false,
    }
}

fn inline_code(inner: &str) -> Inline {
    Inline::InlineCode {
        text: inner.to_string(),
    }
}

fn bold_italic(inner: &str) -> Inline {
    Inline::Bold {
        children: vec![Inline::Italic {
            children: parse_inline(inner),
        }],
    }
}

fn bold(inner: &str) -> Inline {
    Inline::Bold {
        children: parse_inline(inner),
    }
}

fn underline(inner: &str) -> Inline {
    Inline::Underline {
        children: parse_inline(inner),
    }
}

fn strikethrough(inner: &str) -> Inline {
    Inline::Strikethrough {
        children: parse_inline(inner),
    }
}

fn italic(inner: &str) -> Inline {
    Inline::Italic {
        children: parse_inline(inner),
    }
}

fn link(url: &str) -> Inline {
    Inline::Link {
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::text(s)
    }

    fn bold_of(children: Vec<Inline>) -> Inline {
        Inline::Bold { children }
    }

    fn italic_of(children: Vec<Inline>) -> Inline {
        Inline::Italic { children }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inline("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_empty() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_bold() {
        assert_eq!(parse_inline("**bold**"), vec![bold_of(vec![text("bold")])]);
    }

    #[test]
    fn test_bold_italic() {
        assert_eq!(
            parse_inline("***both***"),
            vec![bold_of(vec![italic_of(vec![text("both")])])]
        );
    }

    #[test]
    fn test_italic_variants() {
        assert_eq!(parse_inline("*a*"), vec![italic_of(vec![text("a")])]);
        assert_eq!(parse_inline("_a_"), vec![italic_of(vec![text("a")])]);
    }

    #[test]
    fn test_underline_and_strikethrough() {
        assert_eq!(
            parse_inline("__u__ ~~s~~"),
            vec![
                Inline::Underline {
                    children: vec![text("u")]
                },
                text(" "),
                Inline::Strikethrough {
                    children: vec![text("s")]
                },
            ]
        );
    }

    #[test]
    fn test_spoiler_unrevealed_and_nested() {
        assert_eq!(
            parse_inline("||secret **loud**||"),
            vec![Inline::Spoiler {
                children: vec![text("secret "), bold_of(vec![text("loud")])],
                revealed: false,
            }]
        );
    }

    #[test]
    fn test_inline_code_is_terminal() {
        assert_eq!(
            parse_inline("run `**not bold**` now"),
            vec![
                text("run "),
                Inline::InlineCode {
                    text: "**not bold**".to_string()
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_empty_code_span_is_literal() {
        assert_eq!(parse_inline("a `` b"), vec![text("a `` b")]);
    }

    #[test]
    fn test_url() {
        assert_eq!(
            parse_inline("see https://example.com/a_b_c now"),
            vec![
                text("see "),
                Inline::Link {
                    url: "https://example.com/a_b_c".to_string()
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_url_inside_bold() {
        assert_eq!(
            parse_inline("**http://x.io**"),
            vec![bold_of(vec![Inline::Link {
                url: "http://x.io".to_string()
            }])]
        );
    }

    #[test]
    fn test_leftmost_match_wins() {
        // The italic opener comes before the bold one.
        assert_eq!(
            parse_inline("_a **b** c_"),
            vec![italic_of(vec![
                text("a "),
                bold_of(vec![text("b")]),
                text(" c"),
            ])]
        );
    }

    #[test]
    fn test_priority_at_same_position() {
        // `**` is tried before `*` at position 0.
        assert_eq!(parse_inline("**x** y*"), vec![bold_of(vec![text("x")]), text(" y*")]);
    }

    #[test]
    fn test_non_greedy() {
        assert_eq!(
            parse_inline("*a* and *b*"),
            vec![
                italic_of(vec![text("a")]),
                text(" and "),
                italic_of(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn test_unterminated_markers_are_literal() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(parse_inline("||half"), vec![text("||half")]);
        assert_eq!(parse_inline("~~"), vec![text("~~")]);
    }

    #[test]
    fn test_fallback_to_shorter_delimiter() {
        // No closing `**`, but `*...*` still matches.
        assert_eq!(
            parse_inline("**a*"),
            vec![italic_of(vec![text("*a")])]
        );
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(
            parse_inline("olá *mundo* ⁉️"),
            vec![text("olá "), italic_of(vec![text("mundo")]), text(" ⁉️")]
        );
    }

    #[test]
    fn test_snake_case_word() {
        assert_eq!(
            parse_inline("my_var_name"),
            vec![text("my"), italic_of(vec![text("var")]), text("name")]
        );
    }
}
