//! Render node types.
//!
//! A rendered message is a list of [`Block`]s, one per source line or fenced
//! code block. Blocks hold [`Inline`] nodes, which nest for combined styles.

use serde::Serialize;

/// Inline node within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Literal text.
    Text { raw: String },
    /// `**...**`
    Bold { children: Vec<Inline> },
    /// `*...*` or `_..._`
    Italic { children: Vec<Inline> },
    /// `__...__`
    Underline { children: Vec<Inline> },
    /// `~~...~~`
    Strikethrough { children: Vec<Inline> },
    /// `||...||`. Always produced unrevealed; revealing is up to the viewer.
    Spoiler {
        children: Vec<Inline>,
        revealed: bool,
    },
    /// `` `...` ``, content kept verbatim.
    InlineCode { text: String },
    /// Bare `http(s)://` URL.
    Link { url: String },
}

impl Inline {
    /// Create a text node.
    pub fn text(raw: impl Into<String>) -> Self {
        Inline::Text { raw: raw.into() }
    }

    /// Nested nodes. Empty for text, code and links.
    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Bold { children }
            | Inline::Italic { children }
            | Inline::Underline { children }
            | Inline::Strikethrough { children }
            | Inline::Spoiler { children, .. } => children,
            Inline::Text { .. } | Inline::InlineCode { .. } | Inline::Link { .. } => &[],
        }
    }

    /// Append the literal text of this node, ignoring styling.
    pub fn write_plain(&self, out: &mut String) {
        match self {
            Inline::Text { raw } => out.push_str(raw),
            Inline::InlineCode { text } => out.push_str(text),
            Inline::Link { url } => out.push_str(url),
            _ => {
                for child in self.children() {
                    child.write_plain(out);
                }
            }
        }
    }
}

/// Block-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `# `, `## ` or `### ` line.
    Heading { level: u8, children: Vec<Inline> },
    /// `>` or `>>>` line.
    Quote { children: Vec<Inline> },
    /// `- ` or `* ` line.
    ListItem { children: Vec<Inline> },
    /// Fenced code block, never inline-parsed.
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        text: String,
    },
    /// Any other line. No children means an empty line.
    Paragraph { children: Vec<Inline> },
}

impl Block {
    /// Inline content. Empty for code blocks.
    pub fn children(&self) -> &[Inline] {
        match self {
            Block::Heading { children, .. }
            | Block::Quote { children }
            | Block::ListItem { children }
            | Block::Paragraph { children } => children,
            Block::CodeBlock { .. } => &[],
        }
    }

    /// Literal text of this block, ignoring styling and line markers.
    pub fn plain_text(&self) -> String {
        match self {
            Block::CodeBlock { text, .. } => text.clone(),
            _ => {
                let mut out = String::new();
                for child in self.children() {
                    child.write_plain(&mut out);
                }
                out
            }
        }
    }
}
