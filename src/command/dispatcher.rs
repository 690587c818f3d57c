//! Command dispatcher.
//!
//! Applies parsed commands to a [`TagRepository`] and builds the bot reply.
//! Every [`CommandError`] is turned into reply text here, so callers always
//! get a [`Response`].

use serde::Serialize;
use tracing::{debug, info, warn};

use super::embed::{github_embed, Embed};
use super::help::{format_subcommands, usage};
use super::parser::{Command, CommandKind};
use super::CommandError;
use crate::tag::{Tag, TagRepository};

const SUCCESS_MARK: &str = "✅";
const ERROR_MARK: &str = "❌";

/// Bot reply to a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Reply text (markdown).
    pub text: String,
    /// Embeds attached to the reply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl Response {
    /// Create a text-only response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            embeds: Vec::new(),
        }
    }

    /// Create a success confirmation.
    fn success(text: impl AsRef<str>) -> Self {
        Self::text(format!("{SUCCESS_MARK} {}", text.as_ref()))
    }

    /// Attach embeds to the response.
    pub fn with_embeds(mut self, embeds: Vec<Embed>) -> Self {
        self.embeds = embeds;
        self
    }
}

/// Executes commands against a tag repository.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Recorded as the author of created tags.
    author: String,
    /// Command prefix shown in usage hints.
    prefix: char,
}

impl Dispatcher {
    /// Create a dispatcher acting on behalf of `author`.
    pub fn new(author: impl Into<String>, prefix: char) -> Self {
        Self {
            author: author.into(),
            prefix,
        }
    }

    /// Dispatch the outcome of [`parse`](super::parse), recovering errors.
    pub fn dispatch_parsed(
        &self,
        parsed: &Result<Command, CommandError>,
        repo: &mut dyn TagRepository,
    ) -> Response {
        match parsed {
            Ok(command) => self.dispatch(command, repo),
            Err(err) => self.recover(err),
        }
    }

    /// Dispatch a command, turning any error into a reply.
    pub fn dispatch(&self, command: &Command, repo: &mut dyn TagRepository) -> Response {
        match self.execute(command, repo) {
            Ok(response) => {
                if command.kind.is_mutation() {
                    info!(
                        kind = %command.kind,
                        tag = command.name().unwrap_or_default(),
                        author = %self.author,
                        "tag repository changed"
                    );
                }
                response
            }
            Err(err) => self.recover(&err),
        }
    }

    /// Execute a command.
    ///
    /// The repository is only modified when `Ok` is returned.
    pub fn execute(
        &self,
        command: &Command,
        repo: &mut dyn TagRepository,
    ) -> Result<Response, CommandError> {
        debug!(kind = %command.kind, args = %command.raw_args, "dispatching command");

        match command.kind {
            CommandKind::Get => {
                let name = required_name(command)?;
                let tag = repo
                    .find_by_name(name, true)
                    .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
                let embeds = github_embed(&tag.name, &tag.content).into_iter().collect();
                Ok(Response::text(tag.content).with_embeds(embeds))
            }
            CommandKind::Create => {
                let name = required_name(command)?;
                let content = required_content(command)?;
                if !repo.insert(Tag::new(name, content, &self.author)) {
                    return Err(CommandError::Conflict(name.to_string()));
                }
                Ok(Response::success(format!(
                    "Tag `{name}` created successfully."
                )))
            }
            CommandKind::Delete => {
                let name = required_name(command)?;
                repo.remove(name)
                    .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
                Ok(Response::success(format!("Tag `{name}` deleted.")))
            }
            CommandKind::Edit => {
                let name = required_name(command)?;
                let content = required_content(command)?;
                if !repo.update(name, content) {
                    return Err(CommandError::NotFound(name.to_string()));
                }
                Ok(Response::success(format!("Tag `{name}` updated.")))
            }
            CommandKind::List => {
                let names: Vec<String> = repo.list().into_iter().map(|t| t.name).collect();
                Ok(Response::text(format!(
                    "**Available Tags:**\n{}",
                    names.join(", ")
                )))
            }
            CommandKind::Help => Ok(Response::text(format_subcommands())),
            CommandKind::Unknown => Err(CommandError::UnknownCommand(command.keyword.clone())),
        }
    }

    /// Convert an error into the user-facing reply.
    fn recover(&self, err: &CommandError) -> Response {
        warn!(error = %err, "command rejected");
        Response::text(format!("{ERROR_MARK} {}", self.error_text(err)))
    }

    /// User-facing wording for an error.
    pub fn error_text(&self, err: &CommandError) -> String {
        let prefix = self.prefix;
        match err {
            CommandError::NotFound(_) | CommandError::Conflict(_) => err.to_string(),
            CommandError::MalformedCommand(CommandKind::Create) => {
                "Please provide content for the tag.".to_string()
            }
            CommandError::MalformedCommand(kind) => match usage(*kind, prefix) {
                Some(syntax) => format!("Usage: `{syntax}`"),
                None => err.to_string(),
            },
            CommandError::UnknownCommand(_) => {
                format!("Unknown command. Try `{prefix}tag get name:[name]` or `{prefix}tags`.")
            }
        }
    }
}

fn required_name(command: &Command) -> Result<&str, CommandError> {
    command
        .name()
        .filter(|n| !n.is_empty())
        .ok_or(CommandError::MalformedCommand(command.kind))
}

fn required_content(command: &Command) -> Result<&str, CommandError> {
    command
        .content()
        .filter(|c| !c.is_empty())
        .ok_or(CommandError::MalformedCommand(command.kind))
}
