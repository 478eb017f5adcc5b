#![forbid(unsafe_code)]

//! Tidy-tree placement.
//!
//! Implements the linear-time tidy layout from "Improving Walker's Algorithm
//! to Run in Linear Time" (Buchheim, Jünger, Leipert, 2002) for arbitrary
//! m-ary trees: a bottom-up first walk merges subtree contours through thread
//! pointers, a top-down second walk applies accumulated modifiers.
//!
//! `mangrove` is a standalone placement algorithm. Input is an arena-indexed
//! child list with node 0 as the root; output is one center per node, root at
//! the origin of depth 0, x in the same units as the configured separations.
//! Consumers own centering/translation.
//!
//! ```
//! use mangrove::{TidyOptions, layout};
//!
//! // 0 is the root with children 1 and 2.
//! let children = vec![vec![1, 2], vec![], vec![]];
//! let placement = layout(&children, &TidyOptions::default()).unwrap();
//! assert_eq!(placement.positions.len(), 3);
//! ```

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("child index {child} out of bounds (node count {len})")]
    ChildOutOfBounds { child: usize, len: usize },

    #[error("node {node} is reachable through more than one parent")]
    NotATree { node: usize },
}

/// 2D point, node center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct TidyOptions {
    /// Horizontal distance between adjacent siblings.
    pub sibling_separation: f64,
    /// Horizontal distance between adjacent subtrees.
    pub subtree_separation: f64,
    /// Vertical distance between levels.
    pub level_separation: f64,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            sibling_separation: 60.0,
            subtree_separation: 80.0,
            level_separation: 80.0,
        }
    }
}

/// Placement output: `positions[i]` is the center of arena node `i`.
#[derive(Debug, Clone)]
pub struct Placement {
    pub positions: Vec<Point>,
    pub min_x: f64,
    pub max_x: f64,
}

struct Slot {
    parent: Option<usize>,
    children: Vec<usize>,
    depth: usize,
    /// Left-to-right index among siblings.
    number: usize,
    prelim: f64,
    modifier: f64,
    thread_left: Option<usize>,
    thread_right: Option<usize>,
    ancestor: usize,
    shift: f64,
    change: f64,
}

/// Lays out the tree rooted at node 0.
///
/// `children[i]` lists the ordered child indices of node `i`. Every non-root
/// node must appear exactly once as a child; anything else is rejected.
/// An empty input yields an empty placement.
pub fn layout(children: &[Vec<usize>], options: &TidyOptions) -> Result<Placement> {
    if children.is_empty() {
        return Ok(Placement {
            positions: Vec::new(),
            min_x: 0.0,
            max_x: 0.0,
        });
    }

    let mut slots = validate_and_build(children)?;
    let mut walker = Walker {
        options,
        slots: &mut slots,
    };
    walker.first_walk(0);

    let mut positions = vec![
        Point { x: 0.0, y: 0.0 };
        children.len()
    ];
    walker.second_walk(0, 0.0, &mut positions);

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for p in &positions {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
    }

    Ok(Placement {
        positions,
        min_x,
        max_x,
    })
}

fn validate_and_build(children: &[Vec<usize>]) -> Result<Vec<Slot>> {
    let len = children.len();
    let mut slots: Vec<Slot> = (0..len)
        .map(|i| Slot {
            parent: None,
            children: Vec::new(),
            depth: 0,
            number: 0,
            prelim: 0.0,
            modifier: 0.0,
            thread_left: None,
            thread_right: None,
            ancestor: i,
            shift: 0.0,
            change: 0.0,
        })
        .collect();

    for (parent, kids) in children.iter().enumerate() {
        for (number, &child) in kids.iter().enumerate() {
            if child >= len {
                return Err(Error::ChildOutOfBounds { child, len });
            }
            if child == 0 || slots[child].parent.is_some() {
                return Err(Error::NotATree { node: child });
            }
            slots[child].parent = Some(parent);
            slots[child].number = number;
            slots[parent].children.push(child);
        }
    }

    // Depths top-down; also catches nodes unreachable from the root, which a
    // single-parent forest can still contain (a detached cycle-free island).
    let mut stack = vec![0usize];
    let mut seen = 1usize;
    while let Some(node) = stack.pop() {
        let depth = slots[node].depth;
        let kids = slots[node].children.clone();
        for child in kids {
            slots[child].depth = depth + 1;
            seen += 1;
            stack.push(child);
        }
    }
    if seen != len {
        // Some node never got a parent and is not the root.
        let node = slots
            .iter()
            .enumerate()
            .position(|(i, s)| i != 0 && s.parent.is_none())
            .unwrap_or(0);
        return Err(Error::NotATree { node });
    }

    Ok(slots)
}

struct Walker<'a> {
    options: &'a TidyOptions,
    slots: &'a mut Vec<Slot>,
}

impl Walker<'_> {
    fn first_walk(&mut self, v: usize) {
        let children = self.slots[v].children.clone();
        if children.is_empty() {
            // Leaf: sit at the left edge; siblings are separated later.
            self.slots[v].prelim = 0.0;
            if let Some(parent) = self.slots[v].parent
                && self.slots[v].number > 0
            {
                let left_sibling = self.slots[parent].children[self.slots[v].number - 1];
                self.slots[v].prelim =
                    self.slots[left_sibling].prelim + self.options.sibling_separation;
            }
            return;
        }

        let mut default_ancestor = children[0];
        for (i, &child) in children.iter().enumerate() {
            self.first_walk(child);
            if i > 0 {
                default_ancestor = self.apportion(child, children[i - 1], default_ancestor);
            }
        }
        self.execute_shifts(v);

        let first = self.slots[children[0]].prelim;
        let last = self.slots[children[children.len() - 1]].prelim;
        let midpoint = (first + last) / 2.0;

        if let Some(parent) = self.slots[v].parent
            && self.slots[v].number > 0
        {
            let left_sibling = self.slots[parent].children[self.slots[v].number - 1];
            self.slots[v].prelim =
                self.slots[left_sibling].prelim + self.options.sibling_separation;
            self.slots[v].modifier = self.slots[v].prelim - midpoint;
        } else {
            self.slots[v].prelim = midpoint;
        }
    }

    /// Merges the contour of `v`'s subtree against everything to its left,
    /// shifting `v` right as needed. The threads set at the end are what make
    /// later contour walks O(1) amortized.
    fn apportion(&mut self, v: usize, left_sibling: usize, mut default_ancestor: usize) -> usize {
        let mut inner_right = left_sibling;
        let mut outer_right = v;
        let mut inner_left = v;
        let mut outer_left = match self.slots[v].parent {
            Some(parent) => self.slots[parent].children[0],
            None => v,
        };

        let mut s_inner_right = self.slots[inner_right].modifier;
        let mut s_outer_right = self.slots[outer_right].modifier;
        let mut s_inner_left = self.slots[inner_left].modifier;
        let mut s_outer_left = self.slots[outer_left].modifier;

        loop {
            let (Some(next_ir), Some(next_il)) =
                (self.next_right(inner_right), self.next_left(inner_left))
            else {
                break;
            };
            inner_right = next_ir;
            inner_left = next_il;
            if let Some(next) = self.next_left(outer_left) {
                outer_left = next;
            }
            if let Some(next) = self.next_right(outer_right) {
                outer_right = next;
            }

            self.slots[outer_right].ancestor = v;

            let shift = (self.slots[inner_right].prelim + s_inner_right)
                - (self.slots[inner_left].prelim + s_inner_left)
                + self.options.subtree_separation;
            if shift > 0.0 {
                let ancestor = self.ancestor_of(inner_right, v, default_ancestor);
                self.move_subtree(ancestor, v, shift);
                s_inner_left += shift;
                s_outer_right += shift;
            }

            s_inner_right += self.slots[inner_right].modifier;
            s_inner_left += self.slots[inner_left].modifier;
            s_outer_left += self.slots[outer_left].modifier;
            s_outer_right += self.slots[outer_right].modifier;
        }

        if self.next_right(inner_right).is_some() && self.next_right(outer_right).is_none() {
            self.slots[outer_right].thread_right = self.next_right(inner_right);
            self.slots[outer_right].modifier += s_inner_right - s_outer_right;
        }
        if self.next_left(inner_left).is_some() && self.next_left(outer_left).is_none() {
            self.slots[outer_left].thread_left = self.next_left(inner_left);
            self.slots[outer_left].modifier += s_inner_left - s_outer_left;
            default_ancestor = v;
        }

        default_ancestor
    }

    fn ancestor_of(&self, inner_right: usize, v: usize, default_ancestor: usize) -> usize {
        let candidate = self.slots[inner_right].ancestor;
        if self.slots[candidate].parent == self.slots[v].parent {
            candidate
        } else {
            default_ancestor
        }
    }

    fn move_subtree(&mut self, left: usize, right: usize, shift: f64) {
        let subtrees = self.slots[right]
            .number
            .saturating_sub(self.slots[left].number)
            .max(1) as f64;
        let per_subtree = shift / subtrees;

        self.slots[right].change -= per_subtree;
        self.slots[right].shift += shift;
        self.slots[left].change += per_subtree;
        self.slots[right].prelim += shift;
        self.slots[right].modifier += shift;
    }

    fn execute_shifts(&mut self, v: usize) {
        let children = self.slots[v].children.clone();
        let mut shift = 0.0;
        let mut change = 0.0;
        for &child in children.iter().rev() {
            self.slots[child].prelim += shift;
            self.slots[child].modifier += shift;
            change += self.slots[child].change;
            shift += self.slots[child].shift + change;
        }
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        self.slots[v]
            .children
            .first()
            .copied()
            .or(self.slots[v].thread_left)
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        self.slots[v]
            .children
            .last()
            .copied()
            .or(self.slots[v].thread_right)
    }

    fn second_walk(&self, v: usize, modifier_sum: f64, positions: &mut [Point]) {
        positions[v] = Point {
            x: self.slots[v].prelim + modifier_sum,
            y: self.slots[v].depth as f64 * self.options.level_separation,
        };
        for &child in &self.slots[v].children {
            self.second_walk(child, modifier_sum + self.slots[v].modifier, positions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> TidyOptions {
        TidyOptions {
            sibling_separation: 10.0,
            subtree_separation: 10.0,
            level_separation: 100.0,
        }
    }

    #[test]
    fn empty_tree_is_empty() {
        let placement = layout(&[], &opts()).expect("layout");
        assert!(placement.positions.is_empty());
    }

    #[test]
    fn single_node_sits_at_origin() {
        let placement = layout(&[vec![]], &opts()).expect("layout");
        assert_eq!(placement.positions[0], Point { x: 0.0, y: 0.0 });
    }

    #[test]
    fn root_is_centered_over_children() {
        let children = vec![vec![1, 2], vec![], vec![]];
        let placement = layout(&children, &opts()).expect("layout");
        let p = &placement.positions;

        assert_eq!(p[0].y, 0.0);
        assert_eq!(p[1].y, 100.0);
        assert_eq!(p[2].y, 100.0);

        let midpoint = (p[1].x + p[2].x) / 2.0;
        assert!((p[0].x - midpoint).abs() < 1e-9);
        assert!((p[2].x - p[1].x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn subtrees_do_not_overlap() {
        // Two wide subtrees under the root: their leaves must stay separated.
        let children = vec![
            vec![1, 2],
            vec![3, 4],
            vec![5, 6],
            vec![],
            vec![],
            vec![],
            vec![],
        ];
        let placement = layout(&children, &opts()).expect("layout");
        let p = &placement.positions;

        // Leaves of the left subtree end strictly left of the right subtree's.
        assert!(p[4].x < p[5].x);
        assert!(p[5].x - p[4].x >= 10.0 - 1e-9);
        // Each parent is centered over its own children.
        assert!((p[1].x - (p[3].x + p[4].x) / 2.0).abs() < 1e-9);
        assert!((p[2].x - (p[5].x + p[6].x) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn deep_chain_stacks_levels() {
        let children = vec![vec![1], vec![2], vec![3], vec![]];
        let placement = layout(&children, &opts()).expect("layout");
        for (i, p) in placement.positions.iter().enumerate() {
            assert_eq!(p.y, i as f64 * 100.0);
            assert!((p.x - placement.positions[0].x).abs() < 1e-9);
        }
    }

    #[test]
    fn double_parent_is_rejected() {
        let children = vec![vec![1, 2], vec![2], vec![]];
        assert!(matches!(
            layout(&children, &opts()),
            Err(Error::NotATree { node: 2 })
        ));
    }

    #[test]
    fn out_of_bounds_child_is_rejected() {
        let children = vec![vec![5]];
        assert!(matches!(
            layout(&children, &opts()),
            Err(Error::ChildOutOfBounds { child: 5, .. })
        ));
    }
}
