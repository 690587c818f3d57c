//! Message log for tagchat.
//!
//! The log is an append-only, insertion-ordered list of messages. It starts
//! with a welcome message from the bot.

use super::message::{Message, User};

/// Default number of recent messages to show.
pub const DEFAULT_RECENT_COUNT: usize = 20;

/// Text of the bot's welcome message.
pub fn welcome_text(bot_name: &str, prefix: char) -> String {
    format!(
        "Hello! I'm {bot_name}. \nTry using `{prefix}tag create [name] [content]` or `{prefix}tag get [name]`.\n\n\
         **Markdown Examples:**\n\
         `*Italic*` → *Italic*\n\
         `**Bold**` → **Bold**\n\
         `__Underline__` → __Underline__\n\
         `~~Strikethrough~~` → ~~Strikethrough~~\n\
         `||Spoiler||` → ||Spoiler||\n\
         `# Header` →\n# Header\n\
         `> Quote` →\n> Quote"
    )
}

/// Append-only message log.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that opens with the bot's welcome message.
    pub fn with_welcome(bot: User, prefix: char) -> Self {
        let text = welcome_text(&bot.username, prefix);
        let mut log = Self::new();
        log.push(Message::new(bot, text));
        log
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The last `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
