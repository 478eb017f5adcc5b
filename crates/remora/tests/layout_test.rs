use petgraph::graphmap::DiGraphMap;
use remora::{Error, LayeredOptions, layout};

fn graph(edges: &[(u32, u32)]) -> DiGraphMap<u32, ()> {
    let mut g = DiGraphMap::new();
    for &(a, b) in edges {
        g.add_edge(a, b, ());
    }
    g
}

#[test]
fn empty_graph_yields_empty_placement() {
    let g: DiGraphMap<u32, ()> = DiGraphMap::new();
    let placement = layout(&g, &LayeredOptions::default()).expect("layout");
    assert!(placement.positions.is_empty());
    assert_eq!(placement.extent.width, 0.0);
    assert_eq!(placement.extent.height, 0.0);
}

#[test]
fn diamond_places_every_node_top_to_bottom() {
    let g = graph(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
    let placement = layout(&g, &LayeredOptions::default()).expect("layout");
    assert_eq!(placement.positions.len(), 4);
    assert_eq!(placement.crossings, 0);

    let p = &placement.positions;
    assert!(p[&2].y > p[&1].y);
    assert!(p[&3].y > p[&1].y);
    assert!(p[&4].y > p[&2].y);
    // The two middle nodes share a rank.
    assert_eq!(p[&2].y, p[&3].y);
}

#[test]
fn extent_covers_all_node_boxes() {
    let options = LayeredOptions::default();
    let g = graph(&[(1, 2), (1, 3), (1, 4)]);
    let placement = layout(&g, &options).expect("layout");

    for p in placement.positions.values() {
        assert!(p.x + options.node_width / 2.0 <= placement.extent.width + 1e-9);
        assert!(p.y + options.node_height / 2.0 <= placement.extent.height + 1e-9);
        assert!(p.x - options.node_width / 2.0 >= -1e-9);
        assert!(p.y - options.node_height / 2.0 >= -1e-9);
    }
}

#[test]
fn identical_input_yields_identical_output() {
    let g = graph(&[(1, 2), (1, 3), (3, 4), (2, 4), (1, 5)]);
    let a = layout(&g, &LayeredOptions::default()).expect("layout");
    let b = layout(&g, &LayeredOptions::default()).expect("layout");
    for (node, pos) in &a.positions {
        assert_eq!(b.positions[node], *pos);
    }
}

#[test]
fn cyclic_graph_is_an_error_not_a_panic() {
    let g = graph(&[(1, 2), (2, 3), (3, 1)]);
    assert!(matches!(
        layout(&g, &LayeredOptions::default()),
        Err(Error::Cycle(_))
    ));
}
