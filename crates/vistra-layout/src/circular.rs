//! Circular strategy: equal angular steps around the canvas center.

use crate::element::GraphNode;
use crate::model::LayoutResult;
use vistra_core::LayoutConfig;
use vistra_core::geom::point;

/// Gap kept between the node ring and the canvas edge.
const RING_MARGIN: f64 = 50.0;

/// Places `nodes` on a circle of radius `min(w, h)/2 - node_size - 50`,
/// starting at the top (-90°) and stepping clockwise by `360°/n`. Zero nodes
/// yield an empty result; one node sits alone at the top of the ring.
pub fn layout_circular(nodes: &[GraphNode], config: &LayoutConfig) -> LayoutResult {
    let mut result = LayoutResult::default();
    let n = nodes.len();
    if n == 0 {
        return result;
    }

    let cx = config.width / 2.0;
    let cy = config.height / 2.0;
    let radius = (config.width.min(config.height) / 2.0 - config.node_size - RING_MARGIN).max(0.0);
    let step = std::f64::consts::TAU / n as f64;

    for (i, node) in nodes.iter().enumerate() {
        // Screen coordinates grow downward, so increasing angles from -90°
        // sweep clockwise as drawn.
        let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * step;
        result.place(
            node.id.clone(),
            point(cx + radius * angle.cos(), cy + radius * angle.sin()),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(n: usize) -> Vec<GraphNode> {
        (0..n).map(|i| GraphNode::new(i.to_string())).collect()
    }

    fn config() -> LayoutConfig {
        LayoutConfig::default()
            .with_bounds(800.0, 600.0)
            .with_node_size(40.0)
    }

    #[test]
    fn zero_nodes_is_empty_not_an_error() {
        assert!(layout_circular(&[], &config()).is_empty());
    }

    #[test]
    fn single_node_sits_at_the_top() {
        let result = layout_circular(&nodes(1), &config());
        let p = result.get("0").expect("placed");
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn all_points_are_equidistant_from_center() {
        let result = layout_circular(&nodes(7), &config());
        assert_eq!(result.len(), 7);
        for (_, p) in result.iter() {
            let r = ((p.x - 400.0).powi(2) + (p.y - 300.0).powi(2)).sqrt();
            assert!((r - 210.0).abs() < 1e-9);
        }
    }

    #[test]
    fn consecutive_points_differ_by_equal_angles() {
        let n = 5;
        let result = layout_circular(&nodes(n), &config());
        let angle_of = |i: usize| {
            let p = result.get(&i.to_string()).expect("placed");
            (p.y - 300.0).atan2(p.x - 400.0)
        };
        let step = std::f64::consts::TAU / n as f64;
        for i in 1..n {
            let mut delta = angle_of(i) - angle_of(i - 1);
            while delta < 0.0 {
                delta += std::f64::consts::TAU;
            }
            assert!((delta - step).abs() < 1e-9);
        }
    }

    #[test]
    fn oversized_nodes_clamp_the_radius_at_zero() {
        let cfg = LayoutConfig::default()
            .with_bounds(80.0, 80.0)
            .with_node_size(200.0);
        let result = layout_circular(&nodes(3), &cfg);
        for (_, p) in result.iter() {
            assert!((p.x - 40.0).abs() < 1e-9);
            assert!((p.y - 40.0).abs() < 1e-9);
        }
    }
}
