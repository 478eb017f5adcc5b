#![forbid(unsafe_code)]

//! `vistra` is a headless layout-and-playback engine for step-by-step
//! algorithm visualizations.
//!
//! A trace generator (BFS, sorting, trie insertion, ...) emits an ordered
//! list of [`Step`]s. This crate turns each step into drawable geometry:
//!
//! - [`Player`] walks the trace under manual control or an external clock;
//! - the layout strategies ([`layout`]) compute node centers;
//! - the [`template`] families resolve per-frame scenes, tweening every
//!   element toward its newest target and trimming connectors to node
//!   boundaries.
//!
//! Nothing here paints. Templates hand resolved coordinates and status flags
//! to caller-supplied render callbacks; the caller owns pixels, colors, and
//! the frame loop.

pub use vistra_core::*;

pub mod anim {
    pub use vistra_anim::{
        EMPHASIS_DURATION, ElementId, Orchestrator, POSITION_DURATION, Tween, Visual,
        ease_out_cubic,
    };
}

pub mod layout {
    pub use vistra_layout::{
        EdgeEmphasis, EdgeStyle, GraphEdge, GraphNode, GridCell, LayoutResult, MatrixLayout,
        RoutedEdge, TrieEdge, TrieNode, layout_circular, layout_graph, layout_grid,
        layout_hierarchical, layout_tree, matrix_layout, route_edge, snap_near_vertical,
    };
}

pub mod template;
