//! Rank assignment: nodes to horizontal levels, top to bottom.

use crate::Error;
use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assigns each node to a rank using a two-pass longest-path scheme:
/// a forward pass puts every node one rank below its deepest predecessor,
/// a backward pass then pulls nodes down toward their successors so long
/// edges are tightened.
///
/// Within a rank, nodes start in `Ord` order for deterministic output.
pub(crate) fn assign_ranks<N>(graph: &DiGraphMap<N, ()>) -> Result<Vec<Vec<N>>, Error<N>>
where
    N: Copy + Ord + Hash + Debug,
{
    let topo_order = toposort(graph, None).map_err(|cycle| Error::Cycle(cycle.node_id()))?;
    let mut rank_of: FxHashMap<N, usize> = FxHashMap::default();

    for &node in &topo_order {
        let rank = graph
            .neighbors_directed(node, Direction::Incoming)
            .map(|pred| rank_of.get(&pred).copied().unwrap_or(0) + 1)
            .max()
            .unwrap_or(0);
        rank_of.insert(node, rank);
    }

    for &node in topo_order.iter().rev() {
        let rank = rank_of[&node];
        let min_succ_rank = graph
            .neighbors_directed(node, Direction::Outgoing)
            .map(|succ| rank_of.get(&succ).copied().unwrap_or(0))
            .min();
        if let Some(min_succ) = min_succ_rank
            && min_succ > rank + 1
        {
            rank_of.insert(node, min_succ - 1);
        }
    }

    let max_rank = rank_of.values().copied().max().unwrap_or(0);
    let mut ranks = vec![Vec::new(); max_rank + 1];
    for (node, &rank) in &rank_of {
        ranks[rank].push(*node);
    }
    for rank in &mut ranks {
        rank.sort_unstable();
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_gets_one_node_per_rank() {
        let mut g = DiGraphMap::new();
        g.add_edge(1, 2, ());
        g.add_edge(2, 3, ());
        let ranks = assign_ranks(&g).expect("acyclic");
        assert_eq!(ranks, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn long_edge_source_is_tightened_toward_successor() {
        // 1 -> 2 -> 3 -> 4 and 5 -> 4: the backward pass should pull 5 down
        // to the rank just above 4 instead of leaving it at rank 0.
        let mut g = DiGraphMap::new();
        g.add_edge(1, 2, ());
        g.add_edge(2, 3, ());
        g.add_edge(3, 4, ());
        g.add_edge(5, 4, ());
        let ranks = assign_ranks(&g).expect("acyclic");
        assert_eq!(ranks[2], vec![3, 5]);
        assert_eq!(ranks[3], vec![4]);
    }

    #[test]
    fn cycle_is_reported() {
        let mut g = DiGraphMap::new();
        g.add_edge(1, 2, ());
        g.add_edge(2, 1, ());
        assert!(matches!(assign_ranks(&g), Err(Error::Cycle(_))));
    }

    #[test]
    fn isolated_nodes_land_on_rank_zero() {
        let mut g = DiGraphMap::new();
        g.add_node(7);
        g.add_node(3);
        let ranks = assign_ranks(&g).expect("acyclic");
        assert_eq!(ranks, vec![vec![3, 7]]);
    }
}
