//! Tag repository interface and in-memory implementation.

use super::types::Tag;

/// Storage interface consumed by the command dispatcher.
///
/// Implementations keep tags in insertion order. Uniqueness of names is the
/// caller's concern for lookups, but `insert` refuses exact-case duplicates.
pub trait TagRepository {
    /// All tags in insertion order.
    fn list(&self) -> Vec<Tag>;

    /// Find a tag by name.
    fn find_by_name(&self, name: &str, case_insensitive: bool) -> Option<Tag>;

    /// Insert a tag.
    ///
    /// Returns false if a tag with the exact same name already exists.
    fn insert(&mut self, tag: Tag) -> bool;

    /// Remove a tag by exact name.
    ///
    /// Returns the removed tag, or None if it did not exist.
    fn remove(&mut self, name: &str) -> Option<Tag>;

    /// Replace the content of a tag by exact name.
    ///
    /// Name, author and creation time are left untouched. Returns false if the
    /// tag does not exist.
    fn update(&mut self, name: &str, content: &str) -> bool;

    /// Number of stored tags.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Check whether the repository is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tag repository held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagRepository {
    tags: Vec<Tag>,
}

impl InMemoryTagRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from existing tags.
    ///
    /// Later duplicates (exact name) are dropped.
    pub fn with_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut repo = Self::new();
        for tag in tags {
            repo.insert(tag);
        }
        repo
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|t| t.matches(name, false))
    }
}

impl TagRepository for InMemoryTagRepository {
    fn list(&self) -> Vec<Tag> {
        self.tags.clone()
    }

    fn find_by_name(&self, name: &str, case_insensitive: bool) -> Option<Tag> {
        self.tags
            .iter()
            .find(|t| t.matches(name, case_insensitive))
            .cloned()
    }

    fn insert(&mut self, tag: Tag) -> bool {
        if self.position(&tag.name).is_some() {
            return false;
        }
        self.tags.push(tag);
        true
    }

    fn remove(&mut self, name: &str) -> Option<Tag> {
        let index = self.position(name)?;
        Some(self.tags.remove(index))
    }

    fn update(&mut self, name: &str, content: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.tags[index].content = content.to_string();
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.tags.len()
    }
}
