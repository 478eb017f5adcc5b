//! Crossing reduction: reorder nodes within each rank.

use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;
use std::hash::Hash;

/// Greedy local search: repeatedly try swapping adjacent nodes inside each
/// rank, keeping a swap only when it lowers the crossing count (or keeps it
/// equal while restoring `Ord` order, which pins a deterministic layout among
/// equally good orderings).
pub(crate) fn minimize_crossings<N>(
    graph: &DiGraphMap<N, ()>,
    mut ranks: Vec<Vec<N>>,
    max_iterations: usize,
) -> (Vec<Vec<N>>, usize)
where
    N: Copy + Ord + Hash,
{
    for _ in 0..max_iterations {
        let mut improved = false;

        for rank_index in 0..ranks.len() {
            for i in 0..ranks[rank_index].len().saturating_sub(1) {
                let before = count_crossings(graph, &ranks);
                ranks[rank_index].swap(i, i + 1);
                let after = count_crossings(graph, &ranks);

                let keep = after < before
                    || (after == before && ranks[rank_index][i] < ranks[rank_index][i + 1]);
                if keep {
                    improved = true;
                } else {
                    ranks[rank_index].swap(i, i + 1);
                }
            }
        }

        if !improved {
            break;
        }
    }

    let crossings = count_crossings(graph, &ranks);
    (ranks, crossings)
}

/// Counts pairwise edge crossings between consecutive ranks. Quadratic in
/// rank width, which is fine at visualization scale (tens of nodes).
pub(crate) fn count_crossings<N>(graph: &DiGraphMap<N, ()>, ranks: &[Vec<N>]) -> usize
where
    N: Copy + Ord + Hash,
{
    let mut crossings = 0;

    for window in ranks.windows(2) {
        let (upper, lower) = (&window[0], &window[1]);
        for (i1, &n1) in upper.iter().enumerate() {
            for (i2, &n2) in upper.iter().enumerate().skip(i1 + 1) {
                for t1 in graph.neighbors_directed(n1, Direction::Outgoing) {
                    let Some(p1) = lower.iter().position(|&n| n == t1) else {
                        continue;
                    };
                    for t2 in graph.neighbors_directed(n2, Direction::Outgoing) {
                        let Some(p2) = lower.iter().position(|&n| n == t2) else {
                            continue;
                        };
                        if (i1 < i2) != (p1 < p2) {
                            crossings += 1;
                        }
                    }
                }
            }
        }
    }

    crossings
}
