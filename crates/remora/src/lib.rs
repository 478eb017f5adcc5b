#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) DAG placement.
//!
//! `remora` is a standalone placement algorithm: it knows nothing about
//! traces, players or visual styling. Given a directed acyclic graph it
//! produces top-to-bottom, upper-left-aligned node centers plus the raw
//! bounding box; consumers own any scaling or centering.
//!
//! Pipeline: rank assignment → crossing reduction → coordinate assignment.
//! All phases are deterministic: ties are broken by node `Ord`, so identical
//! input yields identical output.
//!
//! ```
//! use petgraph::graphmap::DiGraphMap;
//! use remora::{LayeredOptions, layout};
//!
//! let mut graph = DiGraphMap::new();
//! graph.add_edge(1, 2, ());
//! graph.add_edge(2, 3, ());
//!
//! let placement = layout(&graph, &LayeredOptions::default()).unwrap();
//! assert_eq!(placement.positions.len(), 3);
//! ```

mod order;
mod position;
mod rank;

use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub use petgraph::graphmap::DiGraphMap;

pub type Result<T, N> = std::result::Result<T, Error<N>>;

#[derive(Debug, thiserror::Error)]
pub enum Error<N: Debug> {
    #[error("graph contains a cycle through node {0:?}")]
    Cycle(N),
}

/// 2D point, node center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Raw extent of a placement, before any consumer-side fit pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct LayeredOptions {
    /// Uniform node width/height assumed during placement.
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal gap between adjacent nodes in a rank.
    pub node_spacing: f64,
    /// Vertical gap between ranks.
    pub level_spacing: f64,
    /// Sweep budget for crossing reduction.
    pub max_order_iterations: usize,
    /// Sweep budget for horizontal alignment.
    pub max_position_iterations: usize,
}

impl Default for LayeredOptions {
    fn default() -> Self {
        Self {
            node_width: 40.0,
            node_height: 40.0,
            node_spacing: 50.0,
            level_spacing: 80.0,
            max_order_iterations: 10,
            max_position_iterations: 50,
        }
    }
}

/// Result of a placement run: node centers keyed by node identity, plus the
/// raw bounding box (origin is always the upper-left corner at 0,0).
#[derive(Debug, Clone)]
pub struct Placement<N: Hash + Eq> {
    pub positions: FxHashMap<N, Point>,
    pub extent: Extent,
    /// Edge crossings remaining after reduction (quality metric).
    pub crossings: usize,
}

/// Places every node of `graph`. Empty graphs yield an empty placement.
///
/// # Errors
/// Returns [`Error::Cycle`] if the graph is not acyclic; callers that want
/// best-effort output should fall back on their own degraded placement.
pub fn layout<G>(graph: G, options: &LayeredOptions) -> Result<Placement<G::NodeId>, G::NodeId>
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + Debug,
{
    // Snapshot into a DiGraphMap once; every later phase does dense edge
    // lookups and petgraph's visitor traits make those O(degree) scans.
    let mut snapshot: DiGraphMap<G::NodeId, ()> = DiGraphMap::new();
    for node in graph.node_identifiers() {
        snapshot.add_node(node);
    }
    for node in graph.node_identifiers() {
        for succ in graph.neighbors_directed(node, petgraph::Direction::Outgoing) {
            snapshot.add_edge(node, succ, ());
        }
    }

    if snapshot.node_count() == 0 {
        return Ok(Placement {
            positions: FxHashMap::default(),
            extent: Extent {
                width: 0.0,
                height: 0.0,
            },
            crossings: 0,
        });
    }

    let ranks = rank::assign_ranks(&snapshot)?;
    let (ranks, crossings) = order::minimize_crossings(&snapshot, ranks, options.max_order_iterations);
    let positions = position::assign_coordinates(&ranks, &snapshot, options);

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    for p in positions.values() {
        max_x = max_x.max(p.x + options.node_width / 2.0);
        max_y = max_y.max(p.y + options.node_height / 2.0);
    }

    Ok(Placement {
        positions,
        extent: Extent {
            width: max_x,
            height: max_y,
        },
        crossings,
    })
}
