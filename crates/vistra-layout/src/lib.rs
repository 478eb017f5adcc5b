#![forbid(unsafe_code)]

//! Deterministic layout strategies and edge routing.
//!
//! Every strategy is a pure function from a structural description (nodes and
//! edges, or a matrix shape) to node centers: identical input yields identical
//! output. Nothing in this crate raises for malformed geometry — a node that
//! cannot be placed is simply absent from the result and renderers skip it.

pub mod circular;
pub mod element;
pub mod grid;
pub mod hierarchical;
pub mod model;
pub mod placement;
pub mod route;
pub mod tree;

use tracing::debug;
use vistra_core::{LayoutConfig, LayoutKind};

pub use circular::layout_circular;
pub use element::{GraphEdge, GraphNode, GridCell, TrieEdge, TrieNode};
pub use grid::{MatrixLayout, layout_grid, matrix_layout};
pub use hierarchical::layout_hierarchical;
pub use model::LayoutResult;
pub use route::{EdgeEmphasis, EdgeStyle, RoutedEdge, route_edge, snap_near_vertical};
pub use tree::layout_tree;

/// Strategy dispatch for node/edge inputs.
///
/// `Tree` is keyed to the trie element shapes and has its own entry point
/// ([`layout_tree`]); asking for it here degrades to the hierarchical
/// strategy, which handles arbitrary DAGs of plain graph nodes.
pub fn layout_graph(nodes: &[GraphNode], edges: &[GraphEdge], config: &LayoutConfig) -> LayoutResult {
    match config.kind {
        LayoutKind::Circle => layout_circular(nodes, config),
        LayoutKind::Grid => layout_grid(nodes, config),
        LayoutKind::Hierarchical => layout_hierarchical(nodes, edges, config),
        LayoutKind::Tree => {
            debug!("tree layout requested for plain graph nodes, using hierarchical");
            layout_hierarchical(nodes, edges, config)
        }
        LayoutKind::Custom => layout_custom(nodes),
    }
}

/// Pass-through for caller-positioned nodes. Nodes without explicit
/// coordinates stay unplaced and are skipped by renderers.
fn layout_custom(nodes: &[GraphNode]) -> LayoutResult {
    let mut result = LayoutResult::default();
    for node in nodes {
        if let (Some(x), Some(y)) = (node.x, node.y) {
            result.place(node.id.clone(), vistra_core::geom::point(x, y));
        } else {
            debug!(id = %node.id, "custom layout node without explicit coordinates, skipping");
        }
    }
    result
}
