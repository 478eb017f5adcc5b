//! Tree template: trie/tree structures under the tidy strategy.

use crate::template::{Chrome, EMPHASIS_SCALE, ResolvedEdge, ResolvedNode, Scene};
use rustc_hash::FxHashMap;
use tracing::debug;
use vistra_anim::{ElementId, Orchestrator, Visual};
use vistra_core::LayoutConfig;
use vistra_core::geom::{Point, point};
use vistra_layout::{EdgeStyle, TrieEdge, TrieNode, layout_tree, route_edge, snap_near_vertical};

/// Composes the tidy tree layout with routing and tweening. Connectors are
/// drawn without arrowheads, and a child sitting almost directly under its
/// parent is snapped onto the parent's vertical before routing.
pub struct TreeTemplate {
    config: LayoutConfig,
    pub chrome: Chrome,
    orchestrator: Orchestrator,
}

impl TreeTemplate {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            chrome: Chrome::default(),
            orchestrator: Orchestrator::new(),
        }
    }

    pub fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolves one frame at `now`. Without a sentinel root the layout is
    /// empty and so is the scene, chrome aside.
    pub fn frame(&mut self, nodes: &[TrieNode], edges: &[TrieEdge], now: f64) -> Scene {
        let layout = layout_tree(nodes, edges, &self.config);

        let mut live: Vec<(ElementId, &TrieNode)> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let Some(p) = layout.get(&node.id) else {
                continue;
            };
            let scale = if node.is_current { EMPHASIS_SCALE } else { 1.0 };
            let id = ElementId::node(&node.id);
            self.orchestrator
                .retarget(id.clone(), Visual::at(p.x, p.y).with_scale(scale), now);
            live.push((id, node));
        }
        self.orchestrator.sync(live.iter().map(|(id, _)| id));
        let animating = self.orchestrator.advance(now);

        let mut scene = Scene {
            chrome: self.chrome.clone(),
            animating,
            ..Scene::default()
        };

        let mut displayed: FxHashMap<&str, Point> = FxHashMap::default();
        for (id, node) in &live {
            let Some(v) = self.orchestrator.sample(id, now) else {
                continue;
            };
            displayed.insert(node.id.as_str(), point(v.x, v.y));
            let label = if node.is_root() {
                String::new()
            } else {
                node.char.clone()
            };
            scene.nodes.push(ResolvedNode {
                id: node.id.clone(),
                label,
                x: v.x,
                y: v.y,
                scale: v.scale,
                radius: self.config.node_size,
                is_current: node.is_current,
                is_visited: node.is_visited,
                ..ResolvedNode::default()
            });
        }

        for edge in edges {
            let (Some(&parent), Some(&child)) = (
                displayed.get(edge.from.as_str()),
                displayed.get(edge.to.as_str()),
            ) else {
                debug!(from = %edge.from, to = %edge.to, "edge endpoint unplaced, skipping");
                continue;
            };
            let child = snap_near_vertical(parent, child);
            let routed = route_edge(parent, child, self.config.node_size, false);
            scene.edges.push(ResolvedEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                start: routed.start,
                end: routed.end,
                label: edge.char.clone(),
                style: EdgeStyle::for_flags(false, false),
            });
        }

        scene
    }
}
