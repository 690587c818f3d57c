//! Shared helpers for integration tests.

#![allow(dead_code)]

use tagchat::command::{parse_input, ChatInput, Dispatcher, Response};
use tagchat::tag::{default_tags, InMemoryTagRepository};

/// Author recorded on tags created in tests.
pub const AUTHOR: &str = "Tester";

/// Repository holding only the built-in tags.
pub fn seeded_repo() -> InMemoryTagRepository {
    InMemoryTagRepository::with_tags(default_tags())
}

/// Run one prefixed input line through parser and dispatcher.
pub fn run(repo: &mut InMemoryTagRepository, input: &str) -> Response {
    let dispatcher = Dispatcher::new(AUTHOR, '/');
    match parse_input(input, '/') {
        ChatInput::Command(parsed) => dispatcher.dispatch_parsed(&parsed, repo),
        ChatInput::Message(text) => panic!("not a command: {text:?}"),
    }
}
