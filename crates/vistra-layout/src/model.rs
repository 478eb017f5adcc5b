//! Layout output model.

use rustc_hash::FxHashMap;
use vistra_core::geom::{Bounds, Point};

/// Node centers keyed by stable identity, recomputed fresh on every render
/// pass. Absence of a key means the node could not be placed; renderers skip
/// such nodes instead of failing.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    positions: FxHashMap<String, Point>,
}

impl LayoutResult {
    pub fn place(&mut self, id: String, position: Point) {
        self.positions.insert(id, position);
    }

    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(id, p)| (id.as_str(), *p))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.positions.values().map(|p| (p.x, p.y)))
    }
}
