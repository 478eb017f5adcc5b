//! Hierarchical strategy: layered-DAG placement fitted to the canvas.

use crate::element::{GraphEdge, GraphNode};
use crate::model::LayoutResult;
use crate::placement::{LayeredEngine, PlacementEngine};
use remora::LayeredOptions;
use rustc_hash::FxHashMap;
use tracing::debug;
use vistra_core::LayoutConfig;
use vistra_core::geom::point;

/// Canvas margin reserved around the fitted drawing.
const FIT_MARGIN: f64 = 40.0;

/// Delegates to the layered-DAG engine (top-to-bottom, upper-left aligned,
/// barycenter crossing reduction), then shrinks — never enlarges — the raw
/// drawing to fit the canvas and centers it. Nodes the engine could not place
/// (orphans of a cyclic input, ids missing from the node list) get evenly
/// spaced vertical positions at horizontal center instead of failing.
pub fn layout_hierarchical(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    config: &LayoutConfig,
) -> LayoutResult {
    let mut result = LayoutResult::default();
    if nodes.is_empty() {
        return result;
    }

    let index_of: FxHashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let mut index_edges = Vec::with_capacity(edges.len());
    for edge in edges {
        match (index_of.get(edge.from.as_str()), index_of.get(edge.to.as_str())) {
            (Some(&from), Some(&to)) => index_edges.push((from, to)),
            _ => debug!(from = %edge.from, to = %edge.to, "edge endpoint not in node list, ignoring"),
        }
    }

    let engine = LayeredEngine {
        options: LayeredOptions {
            node_width: config.node_size * 2.0,
            node_height: config.node_size * 2.0,
            node_spacing: config.node_spacing,
            level_spacing: config.level_height,
            ..LayeredOptions::default()
        },
    };
    let raw = engine.place(nodes.len(), &index_edges);

    // Shrink-only fit, then translate to center.
    let (scale, offset_x, offset_y) = match raw.bounds {
        Some(b) if b.width() > 0.0 || b.height() > 0.0 => {
            let scale_x = if b.width() > 0.0 {
                (config.width - FIT_MARGIN) / b.width()
            } else {
                1.0
            };
            let scale_y = if b.height() > 0.0 {
                (config.height - FIT_MARGIN) / b.height()
            } else {
                1.0
            };
            let scale = scale_x.min(scale_y).min(1.0).max(0.0);
            (
                scale,
                (config.width - b.width() * scale) / 2.0 - b.min_x * scale,
                (config.height - b.height() * scale) / 2.0 - b.min_y * scale,
            )
        }
        Some(b) => (1.0, config.width / 2.0 - b.min_x, config.height / 2.0 - b.min_y),
        None => (1.0, 0.0, 0.0),
    };

    let mut unplaced = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        match raw.positions.get(&i) {
            Some(p) => result.place(
                node.id.clone(),
                point(p.x * scale + offset_x, p.y * scale + offset_y),
            ),
            None => unplaced.push(node),
        }
    }

    if !unplaced.is_empty() {
        debug!(count = unplaced.len(), "placing fallback column for unplaced nodes");
        let slots = unplaced.len() as f64 + 1.0;
        for (i, node) in unplaced.into_iter().enumerate() {
            result.place(
                node.id.clone(),
                point(config.width / 2.0, config.height * (i as f64 + 1.0) / slots),
            );
        }
    }

    result
}
