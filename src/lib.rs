//! tagchat - terminal chat with a tag bot
//!
//! A simulated chat client where prefixed commands manage reusable text
//! snippets ("tags") and every message is rendered from a constrained
//! markdown dialect.

pub mod chat;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod screen;
pub mod tag;

pub use chat::{ChatSession, Message, MessageLog, User};
pub use command::{
    parse, parse_input, ChatInput, Command, CommandError, CommandKind, Dispatcher, Response,
};
pub use config::Config;
pub use error::{Result, TagChatError};
pub use markdown::{render, Block, Inline};
pub use tag::{InMemoryTagRepository, Tag, TagRepository};
