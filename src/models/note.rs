//! Note record: free-text content plus a lower-cased tag set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Content is cut at this many characters for list rendering.
const PREVIEW_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub tags: BTreeSet<String>,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_tags(tags);
        self
    }

    /// Lower-cases and inserts each tag; the set deduplicates.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.tags.insert(tag.as_ref().to_lowercase());
        }
    }

    /// Replaces the content unconditionally.
    pub fn edit_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.content.chars().take(PREVIEW_LEN).collect();
        let ellipsis = if self.content.chars().count() > PREVIEW_LEN {
            "..."
        } else {
            ""
        };
        let tags: Vec<&str> = self.tags.iter().map(|t| t.as_str()).collect();
        write!(
            f,
            "Content: '{}{}' (Tags: {})",
            preview,
            ellipsis,
            tags.join(", ")
        )
    }
}
