//! Chat messages and their authors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::command::Embed;

/// A chat participant as shown next to messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Display name.
    pub username: String,
    /// Avatar URL.
    pub avatar: String,
    /// Whether this user is a bot.
    pub is_bot: bool,
    /// Whether to show the `BOT` badge.
    pub bot_tag: bool,
}

impl User {
    /// Create a regular user.
    pub fn new(username: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar: avatar.into(),
            is_bot: false,
            bot_tag: false,
        }
    }

    /// Create a bot user with a badge.
    pub fn bot(username: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar: avatar.into(),
            is_bot: true,
            bot_tag: true,
        }
    }
}

/// A message in the chat log.
///
/// Messages are never modified once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Unique message ID.
    pub id: String,
    /// Author of the message.
    pub user: User,
    /// Raw message text.
    pub content: String,
    /// Time the message was sent.
    pub timestamp: DateTime<Utc>,
    /// Embeds attached to the message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    /// Whether the text is a prefixed command.
    pub is_command: bool,
}

impl Message {
    /// Create a regular chat message.
    pub fn new(user: User, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user,
            content: content.into(),
            timestamp: Utc::now(),
            embeds: Vec::new(),
            is_command: false,
        }
    }

    /// Create a message carrying a command.
    pub fn command(user: User, content: impl Into<String>) -> Self {
        Self {
            is_command: true,
            ..Self::new(user, content)
        }
    }

    /// Attach embeds to the message.
    pub fn with_embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = embeds;
        self
    }

    /// Check whether the message was sent by a bot.
    pub fn is_from_bot(&self) -> bool {
        self.user.is_bot
    }
}
