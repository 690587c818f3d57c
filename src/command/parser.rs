//! Tag command parser.
//!
//! Grammar, after the command prefix has been removed:
//!
//! ```text
//! tag get    [name:<NAME> | <NAME>]
//! tag create [name:<NAME> content:<TEXT> | <NAME> <TEXT>]
//! tag delete [name:<NAME> | <NAME>]
//! tag edit   [name:<NAME> content:<TEXT> | <NAME> <TEXT>]
//! tags
//! ```
//!
//! Unknown `tag` subcommands become [`CommandKind::Help`]; unknown top-level
//! keywords become [`CommandKind::Unknown`]. Parsing never panics.

use std::collections::BTreeMap;

use super::CommandError;

const NAME_MARKER: &str = "name:";
const CONTENT_MARKER: &str = "content:";

/// Kind of a parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `tag get`
    Get,
    /// `tag create`
    Create,
    /// `tag delete`
    Delete,
    /// `tag edit`
    Edit,
    /// `tags`
    List,
    /// `tag` with a missing or unrecognized subcommand.
    Help,
    /// Unrecognized top-level keyword.
    Unknown,
}

impl CommandKind {
    /// Get the command name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Get => "get",
            CommandKind::Create => "create",
            CommandKind::Delete => "delete",
            CommandKind::Edit => "edit",
            CommandKind::List => "list",
            CommandKind::Help => "help",
            CommandKind::Unknown => "unknown",
        }
    }

    /// Check whether this kind changes the tag repository.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            CommandKind::Create | CommandKind::Delete | CommandKind::Edit
        )
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key of an extracted command field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Tag name.
    Name,
    /// Tag content.
    Content,
}

impl Field {
    /// Get the field key as written in commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Content => "content",
        }
    }
}

/// A parsed command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command kind.
    pub kind: CommandKind,
    /// Lowercased top-level keyword (`tag`, `tags`, or whatever was typed).
    pub keyword: String,
    /// Everything after the top-level keyword, leading whitespace removed.
    pub raw_args: String,
    /// Extracted fields.
    pub fields: BTreeMap<Field, String>,
}

impl Command {
    fn new(kind: CommandKind, keyword: impl Into<String>, raw_args: impl Into<String>) -> Self {
        Self {
            kind,
            keyword: keyword.into(),
            raw_args: raw_args.into(),
            fields: BTreeMap::new(),
        }
    }

    fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    /// Get a field value.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Get the tag name field.
    pub fn name(&self) -> Option<&str> {
        self.field(Field::Name)
    }

    /// Get the tag content field.
    pub fn content(&self) -> Option<&str> {
        self.field(Field::Content)
    }
}

/// Result of classifying a chat input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Regular chat message.
    Message(String),
    /// Prefixed command, parsed or rejected.
    Command(Result<Command, CommandError>),
}

/// Classify an input line as a message or a command.
///
/// Only input whose very first character is `prefix` is a command.
pub fn parse_input(input: &str, prefix: char) -> ChatInput {
    if input.trim().is_empty() {
        return ChatInput::Message(String::new());
    }

    match input.strip_prefix(prefix) {
        Some(rest) => ChatInput::Command(parse(rest)),
        None => ChatInput::Message(input.to_string()),
    }
}

/// Parse a command string (without its prefix).
///
/// Returns `Err` only for recoverable argument problems such as a missing
/// name or content.
pub fn parse(raw: &str) -> Result<Command, CommandError> {
    let (keyword, rest) = split_first_word(raw);
    let keyword = keyword.to_lowercase();

    match keyword.as_str() {
        "tags" => Ok(Command::new(CommandKind::List, keyword, rest)),
        "tag" => parse_tag(keyword, rest),
        _ => Ok(Command::new(CommandKind::Unknown, keyword, rest)),
    }
}

/// Parse the arguments of a `tag` command.
fn parse_tag(keyword: String, rest: &str) -> Result<Command, CommandError> {
    let (sub, args) = split_first_word(rest);

    let kind = match sub.to_lowercase().as_str() {
        "get" => CommandKind::Get,
        "create" => CommandKind::Create,
        "delete" => CommandKind::Delete,
        "edit" => CommandKind::Edit,
        _ => return Ok(Command::new(CommandKind::Help, keyword, rest)),
    };

    let command = Command::new(kind, keyword, rest);

    match kind {
        CommandKind::Get | CommandKind::Delete => {
            let name = strip_name_marker(args);
            if name.is_empty() {
                return Err(CommandError::MalformedCommand(kind));
            }
            Ok(command.with_field(Field::Name, name))
        }
        _ => {
            let (name, content) =
                extract_fields(args).ok_or(CommandError::MalformedCommand(kind))?;
            if name.is_empty() || content.is_empty() {
                return Err(CommandError::MalformedCommand(kind));
            }
            Ok(command
                .with_field(Field::Name, name)
                .with_field(Field::Content, content))
        }
    }
}

/// Split off the first whitespace-delimited word.
///
/// The remainder has its leading whitespace removed but is otherwise intact.
fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

/// Trim and drop an optional leading `name:` marker.
fn strip_name_marker(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed
        .strip_prefix(NAME_MARKER)
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Extract name and content from `create`/`edit` arguments.
///
/// With a `content:` marker, the text is split at its first occurrence and
/// the content is taken verbatim (trimmed). Otherwise the first word is the
/// name and the rest is the content. Returns None when no content can be
/// found.
fn extract_fields(args: &str) -> Option<(&str, &str)> {
    if let Some(pos) = args.find(CONTENT_MARKER) {
        let name = strip_name_marker(&args[..pos]);
        let content = args[pos + CONTENT_MARKER.len()..].trim();
        return Some((name, content));
    }

    let args = args.trim();
    let pos = args.find(char::is_whitespace)?;
    Some((args[..pos].trim(), args[pos..].trim()))
}
