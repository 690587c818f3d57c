//! Command help and input suggestions.

use super::parser::CommandKind;

/// Command information for help display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    /// Command name as typed after the prefix.
    pub name: &'static str,
    /// Command kind the name maps to.
    pub kind: CommandKind,
    /// Command syntax, without the prefix.
    pub syntax: &'static str,
    /// Command description.
    pub description: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "tag get",
        kind: CommandKind::Get,
        syntax: "tag get name:[name]",
        description: "Get a tag by name",
    },
    CommandInfo {
        name: "tag create",
        kind: CommandKind::Create,
        syntax: "tag create name:[name] content:[content]",
        description: "Create a new tag",
    },
    CommandInfo {
        name: "tag edit",
        kind: CommandKind::Edit,
        syntax: "tag edit name:[name] content:[new content]",
        description: "Edit an existing tag",
    },
    CommandInfo {
        name: "tag delete",
        kind: CommandKind::Delete,
        syntax: "tag delete name:[name]",
        description: "Delete a tag",
    },
    CommandInfo {
        name: "tags",
        kind: CommandKind::List,
        syntax: "tags",
        description: "List all tags",
    },
];

/// Get the syntax line for a command kind, with the prefix applied.
pub fn usage(kind: CommandKind, prefix: char) -> Option<String> {
    COMMANDS
        .iter()
        .find(|info| info.kind == kind)
        .map(|info| format!("{prefix}{}", info.syntax))
}

/// Reply for `tag` with a missing or unknown subcommand.
pub fn format_subcommands() -> String {
    "Available subcommands: `get`, `create`, `delete`, `edit`.".to_string()
}

/// Suggest commands for a partially typed input line.
///
/// Suggestions are offered only while the input is the prefix followed by a
/// single word (no whitespace yet). The word filters commands by name prefix,
/// case-insensitively.
pub fn suggestions(input: &str, prefix: char) -> Vec<&'static CommandInfo> {
    let Some(typed) = input.strip_prefix(prefix) else {
        return Vec::new();
    };
    if typed.contains(char::is_whitespace) {
        return Vec::new();
    }

    let typed = typed.to_lowercase();
    COMMANDS
        .iter()
        .filter(|info| info.name.starts_with(typed.as_str()))
        .collect()
}

/// Hints to show after a line has been sent.
///
/// Same as [`suggestions`], except that nothing is offered once the word is a
/// complete command keyword in any letter case.
pub fn typing_hints(input: &str, prefix: char) -> Vec<&'static CommandInfo> {
    let typed = input
        .strip_prefix(prefix)
        .unwrap_or_default()
        .to_lowercase();
    let complete = COMMANDS
        .iter()
        .any(|info| info.name.split_whitespace().next() == Some(typed.as_str()));
    if complete {
        return Vec::new();
    }
    suggestions(input, prefix)
}
