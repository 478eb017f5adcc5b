//! Tree strategy: tidy-tree placement, horizontally centered, never scaled.

use crate::element::{TrieEdge, TrieNode};
use crate::model::LayoutResult;
use crate::placement::{PlacementEngine, TidyEngine};
use mangrove::TidyOptions;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};
use vistra_core::LayoutConfig;
use vistra_core::geom::point;

/// Vertical offset of the root below the canvas top.
const TOP_MARGIN: f64 = 40.0;

/// Lays out a single rooted tree. The root is the node whose `char` is the
/// sentinel (`"root"`); without one the layout is empty and nothing renders —
/// no guessed root. The result is translated (never scaled) so the drawing is
/// horizontally centered with a fixed top margin.
pub fn layout_tree(nodes: &[TrieNode], edges: &[TrieEdge], config: &LayoutConfig) -> LayoutResult {
    let mut result = LayoutResult::default();
    if nodes.is_empty() {
        return result;
    }

    let Some(root) = nodes.iter().position(TrieNode::is_root) else {
        warn!("tree layout input has no sentinel root, rendering nothing");
        return result;
    };

    // Arena built by traversal from the root, so the placement input is a
    // strict hierarchy no matter what the edge list claims. Children keep the
    // edge order the generator emitted.
    let node_of_id: FxHashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();
    let mut children_of: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
    let mut has_parent = vec![false; nodes.len()];
    has_parent[root] = true;
    for edge in edges {
        match (node_of_id.get(edge.from.as_str()), node_of_id.get(edge.to.as_str())) {
            (Some(&from), Some(&to)) if !has_parent[to] => {
                has_parent[to] = true;
                children_of.entry(from).or_default().push(to);
            }
            (Some(_), Some(&to)) => {
                debug!(id = %nodes[to].id, "node already has a parent, ignoring extra edge");
            }
            _ => debug!(from = %edge.from, to = %edge.to, "edge endpoint not in node list, ignoring"),
        }
    }

    // Depth-first arena ordering; slot 0 is the root as the engine requires.
    let mut arena_nodes: Vec<usize> = Vec::with_capacity(nodes.len());
    let mut arena_children: Vec<Vec<usize>> = Vec::with_capacity(nodes.len());
    let mut stack = vec![(root, usize::MAX)];
    while let Some((node, parent_slot)) = stack.pop() {
        let slot = arena_nodes.len();
        arena_nodes.push(node);
        arena_children.push(Vec::new());
        if parent_slot != usize::MAX {
            arena_children[parent_slot].push(slot);
        }
        if let Some(kids) = children_of.get(&node) {
            // Pushed in reverse so the LIFO pop visits children in emitted
            // order, which is also the order they join the parent's list.
            for &kid in kids.iter().rev() {
                stack.push((kid, slot));
            }
        }
    }

    let engine = TidyEngine {
        options: TidyOptions {
            sibling_separation: config.node_spacing,
            subtree_separation: config.node_spacing,
            level_separation: config.level_height,
        },
    };
    let mut edge_pairs = Vec::new();
    for (slot, kids) in arena_children.iter().enumerate() {
        for &kid in kids {
            edge_pairs.push((slot, kid));
        }
    }
    let raw = engine.place(arena_nodes.len(), &edge_pairs);

    let Some(bounds) = raw.bounds else {
        return result;
    };
    let offset_x = config.width / 2.0 - (bounds.min_x + bounds.max_x) / 2.0;
    let offset_y = TOP_MARGIN - bounds.min_y;

    for (slot, &node) in arena_nodes.iter().enumerate() {
        if let Some(p) = raw.positions.get(&slot) {
            result.place(nodes[node].id.clone(), point(p.x + offset_x, p.y + offset_y));
        }
    }
    result
}
