use std::f64::consts::PI;

use vistra::layout::{GraphEdge, GraphNode, GridCell, TrieEdge, TrieNode};
use vistra::template::{Chrome, GraphTemplate, GridTemplate, LegendEntry, TreeTemplate};
use vistra::{LayoutConfig, LayoutKind};

fn circle_config() -> LayoutConfig {
    LayoutConfig::default()
        .with_kind(LayoutKind::Circle)
        .with_bounds(800.0, 600.0)
        .with_node_size(40.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn first_frame_appears_in_place_without_animating() {
    let mut template = GraphTemplate::new(circle_config());
    let nodes: Vec<GraphNode> = (0..3).map(|i| GraphNode::new(i.to_string())).collect();
    let edges = vec![GraphEdge::new("0", "1"), GraphEdge::new("1", "2")];

    let scene = template.frame(&nodes, &edges, 0.0);
    assert!(!scene.animating);
    assert_eq!(scene.nodes.len(), 3);
    assert_eq!(scene.edges.len(), 2);

    let n0 = &scene.nodes[0];
    assert!(approx(n0.x, 400.0) && approx(n0.y, 90.0));
    assert!(approx(n0.scale, 1.0));
    assert!(approx(n0.radius, 40.0));
}

#[test]
fn surviving_node_glides_when_the_ring_regrows() {
    let mut template = GraphTemplate::new(circle_config());
    let two: Vec<GraphNode> = (0..2).map(|i| GraphNode::new(i.to_string())).collect();
    let three: Vec<GraphNode> = (0..3).map(|i| GraphNode::new(i.to_string())).collect();

    template.frame(&two, &[], 0.0);
    // Node 1 moves from the ring bottom to the 30-degree slot.
    let scene = template.frame(&three, &[], 1.0);
    assert!(scene.animating);
    let n1 = scene.nodes.iter().find(|n| n.id == "1").unwrap();
    assert!(approx(n1.x, 400.0) && approx(n1.y, 510.0));

    let scene = template.frame(&three, &[], 1.3);
    assert!(!scene.animating);
    let n1 = scene.nodes.iter().find(|n| n.id == "1").unwrap();
    let angle = -PI / 2.0 + 2.0 * PI / 3.0;
    assert!(approx(n1.x, 400.0 + 210.0 * angle.cos()));
    assert!(approx(n1.y, 300.0 + 210.0 * angle.sin()));
}

#[test]
fn current_node_scales_up_over_the_short_window() {
    let mut template = GraphTemplate::new(circle_config());
    let mut nodes: Vec<GraphNode> = (0..3).map(|i| GraphNode::new(i.to_string())).collect();

    template.frame(&nodes, &[], 0.0);
    nodes[1].is_current = true;
    let scene = template.frame(&nodes, &[], 1.0);
    assert!(scene.animating);

    let scene = template.frame(&nodes, &[], 1.15);
    assert!(!scene.animating);
    let n1 = scene.nodes.iter().find(|n| n.id == "1").unwrap();
    assert!(approx(n1.scale, 1.25));
    assert!(n1.is_current);
}

#[test]
fn removed_node_reappears_in_place_not_from_history() {
    // Explicit coordinates so dropping a node cannot move the survivors.
    let cfg = LayoutConfig::default().with_kind(LayoutKind::Custom);
    let mut template = GraphTemplate::new(cfg);
    let three = vec![
        GraphNode::new("a").at(100.0, 100.0),
        GraphNode::new("b").at(200.0, 100.0),
        GraphNode::new("c").at(300.0, 100.0),
    ];
    let two = &three[..2];

    template.frame(&three, &[], 0.0);
    let scene = template.frame(two, &[], 1.0);
    assert!(!scene.animating);
    assert!(scene.nodes.iter().all(|n| n.id != "c"));

    // Re-adding after the drop shows up at its target immediately.
    let scene = template.frame(&three, &[], 2.0);
    assert!(!scene.animating);
    assert_eq!(scene.nodes.len(), 3);
    let c = scene.nodes.iter().find(|n| n.id == "c").unwrap();
    assert!(approx(c.x, 300.0) && approx(c.y, 100.0));
}

#[test]
fn edges_track_displayed_positions_and_skip_unplaced_endpoints() {
    let mut template = GraphTemplate::new(circle_config());
    let nodes: Vec<GraphNode> = (0..3).map(|i| GraphNode::new(i.to_string())).collect();
    let edges = vec![GraphEdge::new("0", "1"), GraphEdge::new("1", "ghost")];

    let scene = template.frame(&nodes, &edges, 0.0);
    assert_eq!(scene.edges.len(), 1);

    // Trimmed off both node boundaries: shorter than center-to-center.
    let e = &scene.edges[0];
    let n0 = &scene.nodes[0];
    let n1 = &scene.nodes[1];
    let center_dist = ((n1.x - n0.x).powi(2) + (n1.y - n0.y).powi(2)).sqrt();
    let routed_dist =
        ((e.end.0 - e.start.0).powi(2) + (e.end.1 - e.start.1).powi(2)).sqrt();
    assert!(routed_dist > 0.0 && routed_dist < center_dist);
}

#[test]
fn chrome_rides_along_on_every_scene() {
    let chrome = Chrome::default()
        .with_header("Breadth-first search")
        .with_footer("step 3 of 9")
        .with_legend(vec![LegendEntry::new("isCurrent", "Current node")]);
    let mut template = GraphTemplate::new(circle_config()).with_chrome(chrome);

    let scene = template.frame(&[GraphNode::new("a")], &[], 0.0);
    assert_eq!(scene.chrome.header.as_deref(), Some("Breadth-first search"));
    assert_eq!(scene.chrome.footer.as_deref(), Some("step 3 of 9"));
    assert_eq!(scene.chrome.legend.len(), 1);
}

#[test]
fn grid_template_resolves_the_canonical_cell_size() {
    // 5x5 matrix, gap 4, 800x600 canvas: 80px cells.
    let mut template = GridTemplate::new(LayoutConfig::default().with_bounds(800.0, 600.0));
    let cells: Vec<GridCell> = (0..25)
        .map(|i| GridCell {
            row: i / 5,
            col: i % 5,
            ..GridCell::default()
        })
        .collect();

    let scene = template.frame(&cells, 5, 5, &[], 0.0);
    assert_eq!(scene.cells.len(), 25);
    assert!(scene.cells.iter().all(|c| approx(c.size, 80.0)));
}

#[test]
fn step_highlights_surface_as_cell_flags() {
    let mut template = GridTemplate::new(LayoutConfig::default().with_bounds(800.0, 600.0));
    let cells: Vec<GridCell> = (0..4)
        .map(|i| GridCell {
            row: i / 2,
            col: i % 2,
            ..GridCell::default()
        })
        .collect();

    // Linear index 3 is cell (1, 1).
    let scene = template.frame(&cells, 2, 2, &[3], 0.0);
    let lit: Vec<_> = scene.cells.iter().filter(|c| c.is_highlighted).collect();
    assert_eq!(lit.len(), 1);
    assert_eq!((lit[0].row, lit[0].col), (1, 1));
    assert!(approx(lit[0].scale, 1.25));
}

#[test]
fn out_of_shape_cells_are_dropped() {
    let mut template = GridTemplate::new(LayoutConfig::default());
    let cells = vec![
        GridCell::default(),
        GridCell {
            row: 5,
            col: 0,
            ..GridCell::default()
        },
    ];
    let scene = template.frame(&cells, 2, 2, &[], 0.0);
    assert_eq!(scene.cells.len(), 1);
}

#[test]
fn tree_template_labels_connectors_with_transition_chars() {
    let mut template = TreeTemplate::new(LayoutConfig::default().with_bounds(800.0, 600.0));
    let nodes = vec![
        TrieNode::root(),
        TrieNode {
            id: "c".to_string(),
            char: "c".to_string(),
            level: 1,
            ..TrieNode::default()
        },
        TrieNode {
            id: "d".to_string(),
            char: "d".to_string(),
            level: 1,
            ..TrieNode::default()
        },
    ];
    let edges = vec![
        TrieEdge {
            from: String::new(),
            to: "c".to_string(),
            char: "c".to_string(),
        },
        TrieEdge {
            from: String::new(),
            to: "d".to_string(),
            char: "d".to_string(),
        },
    ];

    let scene = template.frame(&nodes, &edges, 0.0);
    assert_eq!(scene.nodes.len(), 3);
    assert_eq!(scene.edges.len(), 2);

    let root = scene.nodes.iter().find(|n| n.id.is_empty()).unwrap();
    assert_eq!(root.label, "");
    assert_eq!(root.y, 40.0);

    let labels: Vec<&str> = scene.edges.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["c", "d"]);
}

#[test]
fn tree_without_sentinel_root_yields_an_empty_scene() {
    let mut template = TreeTemplate::new(LayoutConfig::default());
    let nodes = vec![TrieNode {
        id: "a".to_string(),
        char: "a".to_string(),
        ..TrieNode::default()
    }];
    let scene = template.frame(&nodes, &[], 0.0);
    assert!(scene.nodes.is_empty() && scene.edges.is_empty());
}

#[test]
fn scenes_serialize_for_headless_inspection() {
    let mut template = GraphTemplate::new(circle_config());
    let scene = template.frame(&[GraphNode::new("a")], &[], 0.0);

    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["nodes"][0]["id"], "a");
    assert!(json["nodes"][0]["x"].is_f64());
    assert_eq!(json["animating"], false);
}

#[test]
fn render_callbacks_fire_once_per_element() {
    let mut template = GraphTemplate::new(circle_config());
    let nodes: Vec<GraphNode> = (0..4).map(|i| GraphNode::new(i.to_string())).collect();
    let edges = vec![GraphEdge::new("0", "1"), GraphEdge::new("2", "3")];
    let scene = template.frame(&nodes, &edges, 0.0);

    let drawn_nodes = scene.render_nodes(|n| n.id.clone());
    let drawn_edges = scene.render_edges(|e| (e.from.clone(), e.to.clone()));
    assert_eq!(drawn_nodes.len(), 4);
    assert_eq!(drawn_edges.len(), 2);
}
