//! Shared abstraction over the external placement algorithms.
//!
//! Both remora (layered DAG) and mangrove (tidy tree) are fronted by the same
//! interface: index-addressed items in, raw centers plus a bounding box out.
//! That keeps the fit/center post-processing in the strategies written once
//! instead of per algorithm.

use mangrove::{TidyOptions, layout as tidy_layout};
use remora::{DiGraphMap, LayeredOptions, layout as layered_layout};
use rustc_hash::FxHashMap;
use tracing::warn;
use vistra_core::geom::{Bounds, Point, point};

/// Raw placement in algorithm coordinates. Items the algorithm failed to
/// place are absent from `positions`; `bounds` is `None` when nothing was
/// placed.
#[derive(Debug, Clone, Default)]
pub struct RawPlacement {
    pub positions: FxHashMap<usize, Point>,
    pub bounds: Option<Bounds>,
}

pub trait PlacementEngine {
    /// Places items `0..n` connected by directed `(from, to)` index pairs.
    fn place(&self, n: usize, edges: &[(usize, usize)]) -> RawPlacement;
}

/// Layered-DAG placement via remora. A cyclic input defeats the whole
/// algorithm, so it yields an empty placement (callers degrade from there)
/// rather than an error.
#[derive(Debug, Clone, Default)]
pub struct LayeredEngine {
    pub options: LayeredOptions,
}

impl PlacementEngine for LayeredEngine {
    fn place(&self, n: usize, edges: &[(usize, usize)]) -> RawPlacement {
        let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
        for i in 0..n {
            graph.add_node(i);
        }
        for &(from, to) in edges {
            if from < n && to < n {
                graph.add_edge(from, to, ());
            }
        }

        match layered_layout(&graph, &self.options) {
            Ok(placement) => {
                let positions: FxHashMap<usize, Point> = placement
                    .positions
                    .into_iter()
                    .map(|(i, p)| (i, point(p.x, p.y)))
                    .collect();
                let bounds = (!positions.is_empty()).then(|| Bounds {
                    min_x: 0.0,
                    min_y: 0.0,
                    max_x: placement.extent.width,
                    max_y: placement.extent.height,
                });
                RawPlacement { positions, bounds }
            }
            Err(err) => {
                warn!(%err, "layered placement failed, degrading to fallback positions");
                RawPlacement::default()
            }
        }
    }
}

/// Tidy-tree placement via mangrove. Item 0 must be the root; `edges` must
/// describe a strict hierarchy (the tree strategy guarantees this by building
/// the arena from a root traversal).
#[derive(Debug, Clone, Default)]
pub struct TidyEngine {
    pub options: TidyOptions,
}

impl PlacementEngine for TidyEngine {
    fn place(&self, n: usize, edges: &[(usize, usize)]) -> RawPlacement {
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(from, to) in edges {
            if from < n && to < n {
                children[from].push(to);
            }
        }

        match tidy_layout(&children, &self.options) {
            Ok(placement) => {
                let positions: FxHashMap<usize, Point> = placement
                    .positions
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (i, point(p.x, p.y)))
                    .collect();
                let bounds =
                    Bounds::from_points(placement.positions.iter().map(|p| (p.x, p.y)));
                RawPlacement { positions, bounds }
            }
            Err(err) => {
                warn!(%err, "tidy placement failed, layout stays empty");
                RawPlacement::default()
            }
        }
    }
}
