//! Layout configuration surface.
//!
//! Callers usually hand this over as loosely-typed JSON alongside problem
//! content, so every field is defaulted and unknown layout kinds degrade to
//! the circular strategy instead of failing.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Circle,
    Grid,
    Hierarchical,
    Tree,
    /// Caller supplies explicit x/y on the nodes; strategies pass them through.
    Custom,
}

impl LayoutKind {
    /// Lenient parse: unrecognized values fall back to [`LayoutKind::Circle`],
    /// the universal default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "circle" => Self::Circle,
            "grid" => Self::Grid,
            "hierarchical" => Self::Hierarchical,
            "tree" => Self::Tree,
            "custom" => Self::Custom,
            other => {
                warn!(layout_type = other, "unknown layout type, using circle");
                Self::Circle
            }
        }
    }
}

// Lenient on purpose: configs arrive as loosely-typed JSON, and an
// unrecognized kind must degrade rather than poison the whole config.
impl<'de> Deserialize<'de> for LayoutKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    /// Node radius for circular placement and edge trimming.
    pub node_size: f64,
    /// Minimum spacing between sibling/adjacent nodes (hierarchical, tree).
    pub node_spacing: f64,
    /// Vertical distance between levels (hierarchical, tree).
    pub level_height: f64,
    pub width: f64,
    pub height: f64,
    /// Gutter between matrix cells in the grid template.
    pub gap: f64,
    /// Upper bound on computed matrix cell size.
    pub max_cell_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            kind: LayoutKind::Circle,
            node_size: 20.0,
            node_spacing: 50.0,
            level_height: 80.0,
            width: 800.0,
            height: 600.0,
            gap: 4.0,
            max_cell_size: 80.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_kind(mut self, kind: LayoutKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_node_size(mut self, node_size: f64) -> Self {
        self.node_size = node_size;
        self
    }
}
