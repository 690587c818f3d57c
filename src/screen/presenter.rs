//! Terminal presenter for chat messages.
//!
//! Maps every render node to screen styling. Styles nest: when a styled span
//! ends, attributes are reset and the enclosing style is applied again.

use super::{Color, Screen};
use crate::chat::Message;
use crate::command::{CommandInfo, Embed};
use crate::markdown::{self, Block, Inline};

const SPOILER_MASK: char = '█';
const QUOTE_BAR: &str = "▌ ";
const BULLET: &str = "• ";
const EMBED_BAR: &str = "┃ ";
const CODE_INDENT: &str = "    ";

/// Accumulated text attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Style {
    bold: bool,
    dim: bool,
    italic: bool,
    underline: bool,
    reverse: bool,
    strikethrough: bool,
    color: Option<Color>,
}

impl Style {
    /// Control sequences that switch this style on.
    fn codes(&self, screen: &dyn Screen) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(&screen.bold());
        }
        if self.dim {
            out.push_str(&screen.dim());
        }
        if self.italic {
            out.push_str(&screen.italic());
        }
        if self.underline {
            out.push_str(&screen.underline());
        }
        if self.reverse {
            out.push_str(&screen.reverse());
        }
        if self.strikethrough {
            out.push_str(&screen.strikethrough());
        }
        if let Some(color) = self.color {
            out.push_str(&screen.fg(color));
        }
        out
    }
}

struct Presenter<'a> {
    screen: &'a dyn Screen,
    reveal_spoilers: bool,
}

impl Presenter<'_> {
    fn blocks(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|block| self.block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, children } => {
                let style = Style {
                    bold: true,
                    underline: *level == 1,
                    ..Style::default()
                };
                self.line(children, style)
            }
            Block::Quote { children } => format!(
                "{}{}",
                self.screen.dim_text(QUOTE_BAR),
                self.line(children, Style::default())
            ),
            Block::ListItem { children } => {
                format!("{BULLET}{}", self.line(children, Style::default()))
            }
            Block::CodeBlock { language, text } => {
                let mut lines = Vec::new();
                if let Some(language) = language {
                    lines.push(format!("{CODE_INDENT}{}", self.screen.dim_text(language)));
                }
                for line in text.split('\n') {
                    lines.push(format!(
                        "{CODE_INDENT}{}",
                        self.screen.color_text(line, Color::Yellow)
                    ));
                }
                lines.join("\n")
            }
            Block::Paragraph { children } => self.line(children, Style::default()),
        }
    }

    fn line(&self, children: &[Inline], style: Style) -> String {
        let mut out = String::new();
        self.styled(&mut out, children, style, Style::default());
        out
    }

    /// Write `children` in `style`, then restore `outer`.
    fn styled(&self, out: &mut String, children: &[Inline], style: Style, outer: Style) {
        if style == outer {
            for child in children {
                self.inline(out, child, style);
            }
            return;
        }

        out.push_str(&style.codes(self.screen));
        for child in children {
            self.inline(out, child, style);
        }
        out.push_str(&self.screen.reset());
        out.push_str(&outer.codes(self.screen));
    }

    fn inline(&self, out: &mut String, node: &Inline, style: Style) {
        match node {
            Inline::Text { raw } => out.push_str(raw),
            Inline::Bold { children } => {
                self.styled(out, children, Style { bold: true, ..style }, style)
            }
            Inline::Italic { children } => {
                self.styled(out, children, Style { italic: true, ..style }, style)
            }
            Inline::Underline { children } => self.styled(
                out,
                children,
                Style {
                    underline: true,
                    ..style
                },
                style,
            ),
            Inline::Strikethrough { children } => self.styled(
                out,
                children,
                Style {
                    strikethrough: true,
                    ..style
                },
                style,
            ),
            Inline::Spoiler { children, revealed } => {
                if *revealed || self.reveal_spoilers {
                    self.styled(out, children, Style { reverse: true, ..style }, style);
                } else {
                    let mut hidden = String::new();
                    node.write_plain(&mut hidden);
                    let mask: String = hidden.chars().map(|_| SPOILER_MASK).collect();
                    let dim = Style { dim: true, ..style };
                    self.styled(out, &[Inline::text(mask)], dim, style);
                }
            }
            Inline::InlineCode { text } => self.styled(
                out,
                &[Inline::text(text.as_str())],
                Style {
                    color: Some(Color::Yellow),
                    ..style
                },
                style,
            ),
            Inline::Link { url } => self.styled(
                out,
                &[Inline::text(url.as_str())],
                Style {
                    underline: true,
                    color: Some(Color::Blue),
                    ..style
                },
                style,
            ),
        }
    }

    fn embed(&self, embed: &Embed) -> String {
        let bar = self.screen.color_text(EMBED_BAR, Color::Cyan);
        let mut lines = Vec::new();

        if let Some(title) = &embed.title {
            lines.push(self.screen.bold_text(title));
        }
        if let Some(url) = &embed.url {
            lines.push(self.screen.color_text(url, Color::Blue));
        }
        if let Some(description) = &embed.description {
            lines.push(self.blocks(&markdown::render(description)));
        }
        if let Some(image) = &embed.image {
            lines.push(self.screen.dim_text(&format!("[image: {image}]")));
        }
        if let Some(footer) = &embed.footer {
            lines.push(self.screen.dim_text(&footer.text));
        }

        lines
            .iter()
            .flat_map(|entry| entry.split('\n'))
            .map(|line| format!("{bar}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(&self, message: &Message) -> String {
        let name_color = if message.user.is_bot {
            Color::Magenta
        } else {
            Color::Cyan
        };
        let mut header = format!(
            "{}{}{}",
            self.screen.bold(),
            self.screen.fg(name_color),
            message.user.username
        );
        header.push_str(&self.screen.reset());
        if message.user.bot_tag {
            header.push(' ');
            if self.screen.is_ansi_enabled() {
                header.push_str(&format!(
                    "{}{} BOT {}",
                    self.screen.reverse(),
                    self.screen.fg(Color::Blue),
                    self.screen.reset()
                ));
            } else {
                header.push_str("[BOT]");
            }
        }
        header.push(' ');
        header.push_str(
            &self
                .screen
                .dim_text(&message.timestamp.format("%H:%M").to_string()),
        );
        header
    }
}

/// Format rendered blocks for the terminal.
pub fn format_blocks(blocks: &[Block], screen: &dyn Screen, reveal_spoilers: bool) -> String {
    Presenter {
        screen,
        reveal_spoilers,
    }
    .blocks(blocks)
}

/// Format a chat message for the terminal.
///
/// The header line carries the author, bot badge and time. Command messages
/// are shown verbatim; everything else is rendered as markdown. Embeds follow
/// the body.
pub fn format_message(message: &Message, screen: &dyn Screen, reveal_spoilers: bool) -> String {
    let presenter = Presenter {
        screen,
        reveal_spoilers,
    };

    let body = if message.is_command {
        screen.dim_text(&message.content)
    } else {
        presenter.blocks(&markdown::render(&message.content))
    };

    let mut parts = vec![presenter.header(message), body];
    parts.extend(message.embeds.iter().map(|embed| presenter.embed(embed)));
    parts.join("\n")
}

/// Format command suggestions for a partially typed command.
pub fn format_suggestions(suggestions: &[&CommandInfo], screen: &dyn Screen, prefix: char) -> String {
    suggestions
        .iter()
        .map(|info| {
            format!(
                "  {} {}",
                screen.bold_text(&format!("{prefix}{}", info.syntax)),
                screen.dim_text(info.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
