//! Graph template: node/edge structures under any graph strategy.

use crate::template::{Chrome, EMPHASIS_SCALE, ResolvedEdge, ResolvedNode, Scene};
use rustc_hash::FxHashMap;
use tracing::debug;
use vistra_anim::{ElementId, Orchestrator, Visual};
use vistra_core::LayoutConfig;
use vistra_core::geom::{Point, point};
use vistra_layout::{EdgeStyle, GraphEdge, GraphNode, layout_graph, route_edge};

/// Composes a graph layout strategy with edge routing and tweening. Mount one
/// per visualization and feed it the current step's nodes and edges every
/// frame; dropping it forgets all positions.
pub struct GraphTemplate {
    config: LayoutConfig,
    directed: bool,
    pub chrome: Chrome,
    orchestrator: Orchestrator,
}

impl GraphTemplate {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            directed: true,
            chrome: Chrome::default(),
            orchestrator: Orchestrator::new(),
        }
    }

    /// Edges end flush with the target boundary instead of leaving room for
    /// an arrowhead.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    pub fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolves one frame at `now` (caller's monotonic clock, seconds).
    ///
    /// Layout targets come from the strategy; each node glides toward its
    /// target from wherever it is currently displayed. Edges are routed
    /// between *displayed* centers so connectors track moving nodes. Nodes
    /// the strategy could not place are skipped, along with their edges.
    pub fn frame(&mut self, nodes: &[GraphNode], edges: &[GraphEdge], now: f64) -> Scene {
        let layout = layout_graph(nodes, edges, &self.config);

        let mut live: Vec<(ElementId, &GraphNode)> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let Some(p) = layout.get(&node.id) else {
                debug!(id = %node.id, "node not placed, skipping");
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
            scene.nodes.push(ResolvedNode {
                id: node.id.clone(),
                label: node.label.clone(),
                x: v.x,
                y: v.y,
                scale: v.scale,
                radius: self.config.node_size,
                is_current: node.is_current,
                is_visited: node.is_visited,
                is_in_queue: node.is_in_queue,
                is_processed: node.is_processed,
                state: node.state.clone(),
            });
        }

        for edge in edges {
            let (Some(&a), Some(&b)) = (
                displayed.get(edge.from.as_str()),
                displayed.get(edge.to.as_str()),
            ) else {
                debug!(from = %edge.from, to = %edge.to, "edge endpoint unplaced, skipping");
                continue;
            };
            let routed = route_edge(a, b, self.config.node_size, self.directed);
            scene.edges.push(ResolvedEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                start: routed.start,
                end: routed.end,
                label: edge.label.clone(),
                style: EdgeStyle::for_flags(edge.is_current, edge.is_visited),
            });
        }

        scene
    }
}
