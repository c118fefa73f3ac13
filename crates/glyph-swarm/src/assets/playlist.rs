use std::fmt;

use serde::{Deserialize, Serialize};

use crate::systems::sampling::ShapeKind;

/// One entry of the playlist: a word, or a named silhouette.
///
/// JSON form: `{ "type": "text", "value": "DOG" }` or
/// `{ "type": "shape", "value": "dog" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ContentItem {
    Text(String),
    Shape(ShapeKind),
}

impl ContentItem {
    pub fn text(value: impl Into<String>) -> Self {
        ContentItem::Text(value.into())
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentItem::Text(text) => write!(f, "text {:?}", text),
            ContentItem::Shape(kind) => write!(f, "shape {}", kind),
        }
    }
}

/// Ordered content the swarm cycles through. Indexing wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    items: Vec<ContentItem>,
}

impl Playlist {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// Parse a playlist from a JSON array of content items.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Item at `index`, wrapping around. `None` only when empty.
    pub fn get(&self, index: usize) -> Option<&ContentItem> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(index % self.items.len())
    }

    /// Index following `index`, wrapping around.
    pub fn next_index(&self, index: usize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (index + 1) % self.items.len()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Playlist {
    /// Each word followed by its silhouette.
    fn default() -> Self {
        Self::new(vec![
            ContentItem::text("DOG"),
            ContentItem::Shape(ShapeKind::Dog),
            ContentItem::text("CAT"),
            ContentItem::Shape(ShapeKind::Cat),
            ContentItem::text("HEART"),
            ContentItem::Shape(ShapeKind::Heart),
            ContentItem::text("STAR"),
            ContentItem::Shape(ShapeKind::Star),
        ])
    }
}
