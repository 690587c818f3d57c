//! Block pass.
//!
//! Fenced code blocks are cut out first and kept verbatim. The remaining text
//! is split into lines and each line is classified on its own.

use super::inline::parse_inline;
use super::node::Block;

const FENCE: &str = "```";

/// Heading markers, longest first.
const HEADING_MARKERS: &[(&str, u8)] = &[("### ", 3), ("## ", 2), ("# ", 1)];

/// Piece of a message between or inside code fences.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Code {
        language: Option<&'a str>,
        body: &'a str,
    },
}

/// Parse a message into blocks.
pub(crate) fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for segment in split_fences(text) {
        match segment {
            Segment::Text(text) => blocks.extend(text.split('\n').map(classify_line)),
            Segment::Code { language, body } => blocks.push(Block::CodeBlock {
                language: language.map(str::to_string),
                text: body.to_string(),
            }),
        }
    }

    blocks
}

/// Cut `text` into text and fenced code segments.
///
/// A fence opens at any triple backtick and closes at the next one. If the
/// opening fence is directly followed by a word and a newline, that word is
/// the language. An opening fence without a closing one is plain text. The
/// newline right before an opening fence and right after a closing fence
/// belong to the fence.
fn split_fences(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    while let Some(offset) = text[last..].find(FENCE) {
        let open = last + offset;
        let (language, body_start) = fence_language(text, open + FENCE.len());
        let Some(close_offset) = text[body_start..].find(FENCE) else {
            break;
        };
        let close = body_start + close_offset;

        let before = &text[last..open];
        let before = before.strip_suffix('\n').unwrap_or(before);
        if !before.is_empty() {
            segments.push(Segment::Text(before));
        }

        let mut body = &text[body_start..close];
        if language.is_none() {
            body = body.strip_prefix('\n').unwrap_or(body);
        }
        body = body.strip_suffix('\n').unwrap_or(body);
        segments.push(Segment::Code { language, body });

        last = close + FENCE.len();
        if text[last..].starts_with('\n') {
            last += 1;
        }
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

/// Read an optional `word\n` language tag at `pos`.
///
/// Returns the language and the offset where the code body starts.
fn fence_language(text: &str, pos: usize) -> (Option<&str>, usize) {
    let rest = &text[pos..];
    let word_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());

    if word_len > 0 && rest[word_len..].starts_with('\n') {
        (Some(&rest[..word_len]), pos + word_len + 1)
    } else {
        (None, pos)
    }
}

/// Classify a single line into a block.
fn classify_line(line: &str) -> Block {
    if let Some((level, content)) = heading(line) {
        return Block::Heading {
            level,
            children: parse_inline(content),
        };
    }

    if line.starts_with('>') {
        let content = line
            .strip_prefix(">>>")
            .or_else(|| line.strip_prefix('>'))
            .unwrap_or(line)
            .trim_start();
        return Block::Quote {
            children: parse_inline(content),
        };
    }

    let trimmed = line.trim();
    if let Some(content) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Block::ListItem {
            children: parse_inline(content),
        };
    }

    Block::Paragraph {
        children: parse_inline(line),
    }
}

/// Match a heading marker.
///
/// The longest matching marker decides; if nothing follows it, the line is
/// not a heading at all.
fn heading(line: &str) -> Option<(u8, &str)> {
    let (content, level) = HEADING_MARKERS
        .iter()
        .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (rest, *level)))?;
    (!content.is_empty()).then_some((level, content))
}
