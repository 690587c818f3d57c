//! Command module for tagchat.
//!
//! This module turns prefixed chat input into tag operations:
//! - Parsing of `tag get/create/edit/delete` and `tags`
//! - Dispatching parsed commands against a tag repository
//! - Embed detection for retrieved tag content
//! - Command help and input suggestions

mod dispatcher;
mod embed;
mod help;
mod parser;

use thiserror::Error;

pub use dispatcher::{Dispatcher, Response};
pub use embed::{github_embed, Embed, EmbedFooter};
pub use help::{format_subcommands, suggestions, typing_hints, usage, CommandInfo};
pub use parser::{parse, parse_input, ChatInput, Command, CommandKind, Field};

/// Errors produced while parsing or executing a command.
///
/// None of these are fatal. The dispatcher turns each one into a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No tag with the given name.
    #[error("Tag `{0}` not found.")]
    NotFound(String),

    /// A tag with the given name already exists.
    #[error("A tag with the name `{0}` already exists.")]
    Conflict(String),

    /// Arguments missing or unusable for the given command kind.
    #[error("malformed `{0}` command")]
    MalformedCommand(CommandKind),

    /// Unrecognized top-level command keyword.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}
