//! Template families: layout + routing + tweening composed per frame.
//!
//! A template owns a [`LayoutConfig`], an [`Orchestrator`], and optional
//! chrome (header, footer, legend). Each call to `frame` recomputes layout
//! targets from the current structural input, retargets every element's
//! tween, and returns a [`Scene`] of resolved coordinates at `now`. The scene
//! is plain serializable data; rendering happens in caller callbacks.

mod graph;
mod grid;
mod tree;

pub use graph::GraphTemplate;
pub use grid::GridTemplate;
pub use tree::TreeTemplate;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vistra_layout::EdgeStyle;

/// Scale applied to the element currently under the algorithm's cursor.
pub const EMPHASIS_SCALE: f64 = 1.25;

/// One legend row: a status key (matching the flag names on resolved
/// elements) and its human-readable label. Color assignment stays with the
/// renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendEntry {
    pub status: String,
    pub label: String,
}

impl LegendEntry {
    pub fn new(status: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            label: label.into(),
        }
    }
}

/// Static furniture around the drawing, passed through to every scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chrome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub legend: Vec<LegendEntry>,
}

impl Chrome {
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_legend(mut self, legend: Vec<LegendEntry>) -> Self {
        self.legend = legend;
        self
    }
}

/// A node with display geometry resolved for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolvedNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub radius: f64,
    pub is_current: bool,
    pub is_visited: bool,
    pub is_in_queue: bool,
    pub is_processed: bool,
    /// Generator-specific extras, untouched.
    pub state: Value,
}

/// A connector with endpoints trimmed to node boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEdge {
    pub from: String,
    pub to: String,
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub label: String,
    pub style: EdgeStyle,
}

/// A matrix cell with its center and side length resolved for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolvedCell {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub scale: f64,
    pub value: Value,
    pub is_current: bool,
    pub is_visited: bool,
    pub is_highlighted: bool,
}

/// Everything a renderer needs for one frame. Elements the layout could not
/// place are absent, never present with bogus coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    pub nodes: Vec<ResolvedNode>,
    pub edges: Vec<ResolvedEdge>,
    pub cells: Vec<ResolvedCell>,
    pub chrome: Chrome,
    /// `true` while any tween is still in flight; a frame loop keeps
    /// redrawing until this goes `false`.
    pub animating: bool,
}

impl Scene {
    /// Invokes `render` once per resolved node, in layout input order.
    pub fn render_nodes<V>(&self, mut render: impl FnMut(&ResolvedNode) -> V) -> Vec<V> {
        self.nodes.iter().map(|n| render(n)).collect()
    }

    pub fn render_edges<V>(&self, mut render: impl FnMut(&ResolvedEdge) -> V) -> Vec<V> {
        self.edges.iter().map(|e| render(e)).collect()
    }

    pub fn render_cells<V>(&self, mut render: impl FnMut(&ResolvedCell) -> V) -> Vec<V> {
        self.cells.iter().map(|c| render(c)).collect()
    }
}
