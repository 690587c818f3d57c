//! End-to-end tests for the tag command grammar.

mod common;

use common::{run, seeded_repo, AUTHOR};
use tagchat::tag::{InMemoryTagRepository, TagRepository};

#[test]
fn test_create_then_get_scenario() {
    let mut repo = seeded_repo();

    let created = run(&mut repo, "/tag create greeting Hello there");
    assert!(created.text.starts_with("✅"));
    assert!(created.text.contains("greeting"));

    let tag = repo.find_by_name("greeting", false).unwrap();
    assert_eq!(tag.content, "Hello there");
    assert_eq!(tag.author, AUTHOR);

    let got = run(&mut repo, "/tag get name:greeting");
    assert_eq!(got.text, "Hello there");
    assert!(got.embeds.is_empty());
}

#[test]
fn test_get_missing() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/tag get missing");
    assert!(response.text.starts_with("❌"));
    assert!(response.text.contains("missing"));
}

#[test]
fn test_duplicate_create_conflicts() {
    let mut repo = InMemoryTagRepository::new();
    run(&mut repo, "/tag create a first");
    run(&mut repo, "/tag create b second");
    assert_eq!(repo.len(), 2);

    let response = run(&mut repo, "/tag create a again");
    assert_eq!(response.text, "❌ A tag with the name `a` already exists.");
    assert_eq!(repo.len(), 2);
    assert_eq!(repo.find_by_name("a", false).unwrap().content, "first");
}

#[test]
fn test_case_asymmetry() {
    let mut repo = InMemoryTagRepository::new();
    run(&mut repo, "/tag create Foo bar");

    assert_eq!(run(&mut repo, "/tag get foo").text, "bar");

    let deleted = run(&mut repo, "/tag delete foo");
    assert_eq!(deleted.text, "❌ Tag `foo` not found.");
    assert_eq!(repo.len(), 1);

    let deleted = run(&mut repo, "/tag delete Foo");
    assert_eq!(deleted.text, "✅ Tag `Foo` deleted.");
    assert!(repo.is_empty());
}

#[test]
fn test_edit_preserves_metadata() {
    let mut repo = InMemoryTagRepository::new();
    run(&mut repo, "/tag create name:note content:old text");
    let before = repo.find_by_name("note", false).unwrap();

    let response = run(&mut repo, "/tag edit name:note content:new: text with colons");
    assert_eq!(response.text, "✅ Tag `note` updated.");

    let after = repo.find_by_name("note", false).unwrap();
    assert_eq!(after.content, "new: text with colons");
    assert_eq!(after.author, before.author);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_edit_missing_tag() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/tag edit ghost boo");
    assert_eq!(response.text, "❌ Tag `ghost` not found.");
}

#[test]
fn test_edit_without_content_shows_usage() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/tag edit hello");
    assert_eq!(
        response.text,
        "❌ Usage: `/tag edit name:[name] content:[new content]`"
    );
}

#[test]
fn test_create_without_content_does_not_mutate() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/tag create lonely");
    assert_eq!(response.text, "❌ Please provide content for the tag.");
    assert_eq!(repo.len(), 2);
}

#[test]
fn test_list_in_insertion_order() {
    let mut repo = seeded_repo();
    run(&mut repo, "/tag create zeta z");
    run(&mut repo, "/tag create alpha a");
    let response = run(&mut repo, "/tags");
    assert_eq!(
        response.text,
        "**Available Tags:**\nrockstar-fix, hello, zeta, alpha"
    );
}

#[test]
fn test_unknown_subcommand_is_coached() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/tag frobnicate x");
    assert_eq!(
        response.text,
        "Available subcommands: `get`, `create`, `delete`, `edit`."
    );
}

#[test]
fn test_unknown_top_level_command_is_rejected() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/ban everyone");
    assert_eq!(
        response.text,
        "❌ Unknown command. Try `/tag get name:[name]` or `/tags`."
    );
}

#[test]
fn test_github_embed_on_get() {
    let mut repo = InMemoryTagRepository::new();
    run(
        &mut repo,
        "/tag create proj content:Code lives at https://github.com/x/y and https://example.com",
    );
    let response = run(&mut repo, "/tag get proj");
    assert_eq!(response.embeds.len(), 1);
    assert_eq!(
        response.embeds[0].url.as_deref(),
        Some("https://github.com/x/y")
    );
}

#[test]
fn test_no_embed_without_github_link() {
    let mut repo = seeded_repo();
    let response = run(&mut repo, "/tag get hello");
    assert!(response.embeds.is_empty());
}
