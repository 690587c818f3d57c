//! Tag record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, author-attributed text snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name. Unique within a repository (exact case).
    pub name: String,
    /// Tag content, rendered as markdown when retrieved.
    pub content: String,
    /// Name of the user who created the tag.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(name, content, author, Utc::now())
    }

    /// Create a new tag with an explicit creation timestamp.
    fn with_timestamp(
        name: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            author: author.into(),
            created_at,
        }
    }

    /// Check whether this tag answers to `name`.
    pub fn matches(&self, name: &str, case_insensitive: bool) -> bool {
        if case_insensitive {
            self.name.to_lowercase() == name.to_lowercase()
        } else {
            self.name == name
        }
    }
}
