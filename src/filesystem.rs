//! Filesystem overlay produced alongside the command sequence.
//!
//! A [`Filesystem`] maps absolute target paths to [`FileEntry`] descriptors
//! (content, permissions, owner). Keys are unique; iteration is sorted by
//! path so rendered artifacts are byte-stable across runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A file to materialize in the target image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File content, verbatim.
    pub content: String,
    /// Octal permission string, e.g. `"0644"`.
    #[serde(default = "default_permissions")]
    pub permissions: String,
    /// Owner as `user` or `user:group`; target default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

fn default_permissions() -> String {
    "0644".to_string()
}

impl FileEntry {
    /// Create an entry with default permissions and no explicit owner.
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            permissions: default_permissions(),
            owner: None,
        }
    }

    /// Set the octal permission string.
    pub fn with_permissions<S: Into<String>>(mut self, permissions: S) -> Self {
        self.permissions = permissions.into();
        self
    }

    /// Set the owner.
    pub fn with_owner<S: Into<String>>(mut self, owner: S) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Mapping from absolute target path to file descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filesystem {
    files: BTreeMap<String, FileEntry>,
}

impl Filesystem {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn add<P: Into<String>>(&mut self, path: P, entry: FileEntry) {
        self.files.insert(path.into(), entry);
    }

    /// Add an entry with literal content and default metadata.
    pub fn add_content<P: Into<String>, S: Into<String>>(&mut self, path: P, content: S) {
        self.add(path, FileEntry::new(content));
    }

    /// Get an entry by path.
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.files.get(path)
    }

    /// Whether an entry exists for the path.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another overlay into this one (last-write-wins).
    pub fn merge(&mut self, other: Filesystem) {
        for (path, entry) in other.files {
            if self.files.contains_key(&path) {
                log::debug!("filesystem merge overwrites {}", path);
            }
            self.files.insert(path, entry);
        }
    }

    /// Iterate entries sorted by path.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &FileEntry)> {
        self.files.iter()
    }

    /// The target paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }
}
