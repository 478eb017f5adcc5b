//! Edge routing: trim connector segments to node boundaries.
//!
//! Invoked once per edge per render; edge counts are small (tens), so there
//! is no caching. Style selection is purely a function of the edge's own
//! status flags, independent of which strategy produced the coordinates.

use serde::{Deserialize, Serialize};
use vistra_core::geom::{Point, point};

/// Offset pushing the start point outward from the source boundary.
const SOURCE_MARGIN: f64 = 2.0;
/// How far inside the target boundary a directed edge ends, approximating the
/// arrowhead length so the tip touches the node.
const ARROWHEAD_LENGTH: f64 = 10.0;
/// Sibling connectors whose horizontal delta is below this are snapped to a
/// shared x. Cosmetic correction for near-vertical tree edges only; do not
/// reuse for other strategies.
const SIBLING_SNAP_EPSILON: f64 = 5.0;

/// A connector segment trimmed to node boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutedEdge {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl RoutedEdge {
    pub fn length(&self) -> f64 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Trims the center-to-center segment to the node circles: the start sits
/// just outside the source boundary, the end flush with the target boundary
/// (undirected) or one arrowhead inside it (directed).
///
/// Coincident or overlapping endpoints degrade to a zero-length segment at
/// the midpoint — never NaN, never a panic.
pub fn route_edge(from: Point, to: Point, node_radius: f64, directed: bool) -> RoutedEdge {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();

    let midpoint = point((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    if distance <= f64::EPSILON {
        return RoutedEdge {
            start: (midpoint.x, midpoint.y),
            end: (midpoint.x, midpoint.y),
        };
    }

    let (ux, uy) = (dx / distance, dy / distance);
    let start_inset = node_radius + SOURCE_MARGIN;
    let end_inset = if directed {
        node_radius + ARROWHEAD_LENGTH
    } else {
        node_radius
    };

    // Nodes so close their trims cross: collapse to the midpoint.
    if start_inset + end_inset >= distance {
        return RoutedEdge {
            start: (midpoint.x, midpoint.y),
            end: (midpoint.x, midpoint.y),
        };
    }

    RoutedEdge {
        start: (from.x + ux * start_inset, from.y + uy * start_inset),
        end: (to.x - ux * end_inset, to.y - uy * end_inset),
    }
}

/// Snaps a near-vertical parent→child connector to the parent's x before
/// routing. Tree strategy only: tidy layouts often put a child within a few
/// units of its parent, and the slightly slanted connector reads as a mistake.
pub fn snap_near_vertical(parent: Point, child: Point) -> Point {
    if (child.x - parent.x).abs() < SIBLING_SNAP_EPSILON {
        point(parent.x, child.y)
    } else {
        child
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeEmphasis {
    #[default]
    Default,
    Current,
    Visited,
}

/// Stroke treatment for a routed edge. The paint layer maps emphasis tiers to
/// theme colors; width travels with the tier so callers need no lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub emphasis: EdgeEmphasis,
    pub stroke_width: f64,
}

impl EdgeStyle {
    pub fn for_flags(is_current: bool, is_visited: bool) -> Self {
        if is_current {
            Self {
                emphasis: EdgeEmphasis::Current,
                stroke_width: 3.0,
            }
        } else if is_visited {
            Self {
                emphasis: EdgeEmphasis::Visited,
                stroke_width: 2.0,
            }
        } else {
            Self {
                emphasis: EdgeEmphasis::Default,
                stroke_width: 1.5,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edge_is_trimmed_at_both_ends() {
        let routed = route_edge(point(0.0, 0.0), point(100.0, 0.0), 20.0, true);
        assert_eq!(routed.start, (22.0, 0.0));
        assert_eq!(routed.end, (70.0, 0.0));
    }

    #[test]
    fn undirected_edge_ends_flush_with_the_boundary() {
        let routed = route_edge(point(0.0, 0.0), point(100.0, 0.0), 20.0, false);
        assert_eq!(routed.end, (80.0, 0.0));
    }

    #[test]
    fn coincident_centers_yield_zero_length_segment() {
        let routed = route_edge(point(50.0, 50.0), point(50.0, 50.0), 20.0, true);
        assert_eq!(routed.length(), 0.0);
        assert!(routed.start.0.is_finite() && routed.start.1.is_finite());
    }

    #[test]
    fn overlapping_nodes_collapse_to_the_midpoint() {
        let routed = route_edge(point(0.0, 0.0), point(30.0, 0.0), 20.0, true);
        assert_eq!(routed.start, (15.0, 0.0));
        assert_eq!(routed.end, (15.0, 0.0));
    }

    #[test]
    fn diagonal_trim_preserves_direction() {
        let routed = route_edge(point(0.0, 0.0), point(100.0, 100.0), 10.0, false);
        let (sx, sy) = routed.start;
        let (ex, ey) = routed.end;
        assert!((sx - sy).abs() < 1e-9);
        assert!((ex - ey).abs() < 1e-9);
        assert!(ex > sx);
    }

    #[test]
    fn near_vertical_child_snaps_to_parent_x() {
        let snapped = snap_near_vertical(point(100.0, 0.0), point(103.0, 80.0));
        assert_eq!(snapped, point(100.0, 80.0));

        let kept = snap_near_vertical(point(100.0, 0.0), point(106.0, 80.0));
        assert_eq!(kept, point(106.0, 80.0));
    }

    #[test]
    fn style_tiers_follow_status_flags() {
        assert_eq!(
            EdgeStyle::for_flags(true, true).emphasis,
            EdgeEmphasis::Current
        );
        assert_eq!(
            EdgeStyle::for_flags(false, true).emphasis,
            EdgeEmphasis::Visited
        );
        assert_eq!(
            EdgeStyle::for_flags(false, false).emphasis,
            EdgeEmphasis::Default
        );
    }
}
