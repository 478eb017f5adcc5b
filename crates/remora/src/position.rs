//! Coordinate assignment: rank order to concrete node centers.

use crate::{LayeredOptions, Point};
use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;
use rustc_hash::FxHashMap;
use std::hash::Hash;

const SETTLE_EPSILON: f64 = 0.1;

/// Assigns node centers. Ranks become horizontal rows (y grows downward);
/// within a row, nodes are pulled toward the barycenter of their neighbors
/// and then pushed apart to restore the minimum spacing, preserving the
/// crossing-reduced order. The result is upper-left aligned: the leftmost
/// node edge sits at x = 0 and the first rank's top edge at y = 0.
pub(crate) fn assign_coordinates<N>(
    ranks: &[Vec<N>],
    graph: &DiGraphMap<N, ()>,
    options: &LayeredOptions,
) -> FxHashMap<N, Point>
where
    N: Copy + Ord + Hash,
{
    let mut positions: FxHashMap<N, Point> = FxHashMap::default();
    let step_x = options.node_width + options.node_spacing;
    let step_y = options.node_height + options.level_spacing;

    for (rank_index, rank) in ranks.iter().enumerate() {
        let y = options.node_height / 2.0 + rank_index as f64 * step_y;
        for (i, &node) in rank.iter().enumerate() {
            positions.insert(
                node,
                Point {
                    x: options.node_width / 2.0 + i as f64 * step_x,
                    y,
                },
            );
        }
    }

    for _ in 0..options.max_position_iterations {
        let mut changed = false;

        // Downward sweep: align to predecessors.
        for rank_index in 1..ranks.len() {
            changed |= align_rank(
                &ranks[rank_index],
                graph,
                &mut positions,
                Direction::Incoming,
                step_x,
            );
        }
        // Upward sweep: align to successors.
        for rank_index in (0..ranks.len().saturating_sub(1)).rev() {
            changed |= align_rank(
                &ranks[rank_index],
                graph,
                &mut positions,
                Direction::Outgoing,
                step_x,
            );
        }

        if !changed {
            break;
        }
    }

    normalize_left(&mut positions, options.node_width);
    positions
}

/// One barycenter pass over a single rank, followed by overlap resolution
/// that keeps the rank's node order intact.
fn align_rank<N>(
    rank: &[N],
    graph: &DiGraphMap<N, ()>,
    positions: &mut FxHashMap<N, Point>,
    neighbors: Direction,
    step_x: f64,
) -> bool
where
    N: Copy + Ord + Hash,
{
    let mut changed = false;

    for &node in rank {
        let Some(target) = barycenter_x(node, graph, positions, neighbors) else {
            continue;
        };
        let Some(pos) = positions.get_mut(&node) else {
            continue;
        };
        if (target - pos.x).abs() > SETTLE_EPSILON {
            pos.x = target;
            changed = true;
        }
    }

    // Push overlapping nodes apart, left to right.
    for i in 1..rank.len() {
        let prev_x = positions[&rank[i - 1]].x;
        let Some(pos) = positions.get_mut(&rank[i]) else {
            continue;
        };
        if pos.x < prev_x + step_x {
            pos.x = prev_x + step_x;
            changed = true;
        }
    }

    changed
}

fn barycenter_x<N>(
    node: N,
    graph: &DiGraphMap<N, ()>,
    positions: &FxHashMap<N, Point>,
    neighbors: Direction,
) -> Option<f64>
where
    N: Copy + Ord + Hash,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for neighbor in graph.neighbors_directed(node, neighbors) {
        if let Some(pos) = positions.get(&neighbor) {
            sum += pos.x;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

fn normalize_left<N>(positions: &mut FxHashMap<N, Point>, node_width: f64)
where
    N: Copy + Ord + Hash,
{
    let min_left = positions
        .values()
        .map(|p| p.x - node_width / 2.0)
        .fold(f64::INFINITY, f64::min);
    if !min_left.is_finite() {
        return;
    }
    for pos in positions.values_mut() {
        pos.x -= min_left;
    }
}
