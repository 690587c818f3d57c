//! Markdown module for tagchat.
//!
//! This module renders the constrained chat markdown used in messages:
//! - Block pass: fenced code, headings, quotes, list items, paragraphs
//! - Inline pass: bold, italic, underline, strikethrough, spoilers, code, links
//! - Bare URL detection, shared with reply embeds
//!
//! Rendering is total. Any input yields a block list, and markers that do not
//! form a valid span are kept as literal text.

mod block;
mod inline;
mod node;
mod url;

use tracing::trace;

pub use inline::parse_inline;
pub use node::{Block, Inline};
pub use url::find_urls;

/// Render message text into blocks.
pub fn render(text: &str) -> Vec<Block> {
    let blocks = block::parse_blocks(text);
    trace!(len = text.len(), blocks = blocks.len(), "Rendered message");
    blocks
}

/// Flatten rendered blocks back to unstyled text, one line per block.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize rendered blocks to JSON.
pub fn to_json(blocks: &[Block]) -> crate::Result<String> {
    Ok(serde_json::to_string(blocks)?)
}
