//! Structural element shapes consumed by the layout strategies.
//!
//! These mirror what trace generators emit inside step variables: plain
//! records, loosely populated, serde-friendly. Identity is the animation
//! correlation key — `id` for nodes, the `(from, to)` pair for edges,
//! `(row, col)` for grid cells.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphNode {
    /// Stable, unique identity; everything downstream keys on it.
    pub id: String,
    pub label: String,
    pub value: Value,
    /// Explicit coordinates, honored by the `custom` strategy only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    pub is_current: bool,
    pub is_visited: bool,
    pub is_in_queue: bool,
    pub is_processed: bool,
    pub in_degree: u32,
    /// Generator-specific extras, passed through to render callbacks.
    pub state: Value,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub label: String,
    pub is_current: bool,
    pub is_visited: bool,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub value: Value,
    pub is_current: bool,
    pub is_visited: bool,
    pub is_highlighted: bool,
}

/// The sentinel `char` value marking a trie root.
pub const TRIE_ROOT_CHAR: &str = "root";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrieNode {
    /// Path string from the root; doubles as the stable identity.
    pub id: String,
    /// One transition character, or [`TRIE_ROOT_CHAR`] for the root.
    pub char: String,
    pub level: usize,
    pub is_end: bool,
    pub is_current: bool,
    pub is_visited: bool,
}

impl TrieNode {
    pub fn root() -> Self {
        Self {
            id: String::new(),
            char: TRIE_ROOT_CHAR.to_string(),
            ..Self::default()
        }
    }

    pub fn is_root(&self) -> bool {
        self.char == TRIE_ROOT_CHAR
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrieEdge {
    pub from: String,
    pub to: String,
    /// Transition character carried on the connector label.
    pub char: String,
}
