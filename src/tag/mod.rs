//! Tag module for tagchat.
//!
//! This module provides the named text snippets that the `tag` commands
//! operate on:
//! - The `Tag` record
//! - The `TagRepository` interface and its in-memory implementation
//! - Built-in seed tags and a TOML seed file loader

mod repository;
mod seed;
mod types;

pub use repository::{InMemoryTagRepository, TagRepository};
pub use seed::{default_tags, load_seed_file, parse_seed, seed_repository};
pub use types::Tag;
