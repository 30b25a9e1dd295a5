//! Recently-used colors, most recent first.
//!
//! A plain model the host persists however it likes (it serializes with
//! serde). Deduplication is exact channel equality: picking the same
//! color again moves it to the front instead of inserting a duplicate.

use huemap_core::Rgb;
use serde::{Deserialize, Serialize};

/// Most-recent-first list of picked colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentColors {
    colors: Vec<Rgb>,
}

impl RecentColors {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a use of `color`: an exactly-equal existing entry moves
    /// to the front, otherwise the color is inserted at the front.
    pub fn touch(&mut self, color: Rgb) {
        if let Some(index) = self.colors.iter().position(|c| *c == color) {
            self.colors.remove(index);
        }
        self.colors.insert(0, color);
        tracing::debug!(hex = %color.to_hex(), total = self.colors.len(), "recent color touched");
    }

    /// Colors, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }

    /// Number of stored colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when nothing has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Drop everything past the first `keep` entries. The list itself
    /// is unbounded; hosts prune to whatever their UI shows.
    pub fn truncate(&mut self, keep: usize) {
        self.colors.truncate(keep);
    }
}
