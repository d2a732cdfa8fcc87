//! Shape checks for the static graph, tree and point fixtures.

use std::collections::HashSet;

use dsakit::application::{Fixture, GRAPH_FIXTURES, TREE_FIXTURES};
use dsakit::config::FixtureSettings;
use dsakit::fixtures::{
    adj_list1, adj_list2, adj_matrix1, tree1, tree2, BinaryNode, GraphEdge, Point,
};
use dsakit::tree_traits::{TreeNodeConvert, MISSING_CHILD};

// ============================================================
// Graphs
// ============================================================

#[test]
fn given_adj_list1_when_inspecting_then_seven_vertices_mostly_symmetric() {
    let g = adj_list1();
    assert_eq!(g.vertex_count(), 7);
    assert_eq!(g.edge_count(), 19);
    assert_eq!(
        g.edges(1),
        &[GraphEdge::new(0, 3), GraphEdge::new(2, 4), GraphEdge::new(4, 1)]
    );

    let asymmetric: Vec<_> = (0..g.vertex_count())
        .flat_map(|from| g.edges(from).iter().map(move |e| (from, *e)))
        .filter(|(from, e)| g.weight(e.to, *from) != Some(e.weight))
        .collect();
    assert_eq!(asymmetric, vec![(5, GraphEdge::new(2, 18))]);
}

#[test]
fn given_adj_list2_when_inspecting_then_vertex_three_is_sink() {
    let g = adj_list2();
    assert_eq!(g.vertex_count(), 7);
    assert!(g.edges(3).is_empty());
    assert_eq!(g.weight(5, 2), Some(18));
    assert_eq!(g.weight(2, 5), None);
    assert!(g.edges(99).is_empty());
}

#[test]
fn given_adj_matrix1_when_inspecting_then_zero_cells_are_missing_edges() {
    let m = adj_matrix1();
    assert_eq!(m.vertex_count(), 7);
    assert_eq!(m.edge_count(), 11);
    assert_eq!(m.weight(0, 1), Some(3));
    assert_eq!(m.weight(0, 0), None);
    assert_eq!(m.weight(5, 2), Some(18));
    assert_eq!(m.weight(7, 0), None);
    assert!(m.edges(3).is_empty());
    assert_eq!(
        m.edges(4),
        vec![
            GraphEdge::new(1, 1),
            GraphEdge::new(3, 5),
            GraphEdge::new(5, 2),
        ]
    );
}

#[test]
fn given_adj_list2_when_converted_to_matrix_then_differs_from_matrix_fixture_only_at_known_cells() {
    let converted = adj_list2().to_matrix();
    let fixture = adj_matrix1();

    let mut diffs = HashSet::new();
    for from in 0..7 {
        for to in 0..7 {
            if converted.weight(from, to) != fixture.weight(from, to) {
                diffs.insert((from, to));
            }
        }
    }
    let expected: HashSet<_> = [(2, 2), (2, 3), (6, 6)].into_iter().collect();
    assert_eq!(diffs, expected);
}

// ============================================================
// Trees
// ============================================================

#[test]
fn given_tree1_when_inspecting_then_shape_matches() {
    let t = tree1();
    assert_eq!(t.value, 20);
    assert_eq!(t.node_count(), 10);
    assert_eq!(t.depth(), 4);

    let left = t.left.as_deref().unwrap();
    assert_eq!(left.value, 10);
    let five = left.left.as_deref().unwrap();
    assert!(five.left.is_none());
    assert_eq!(five.right.as_deref().map(|n| n.value), Some(7));

    let right = t.right.as_deref().unwrap();
    assert_eq!(right.right.as_deref().map(|n| n.value), Some(100));
}

#[test]
fn given_tree2_when_inspecting_then_shape_matches() {
    let t = tree2();
    assert_eq!(t.node_count(), 11);
    assert_eq!(t.depth(), 5);

    let fifty = t.right.as_deref().unwrap();
    assert!(fifty.right.is_none());
    let thirty = fifty.left.as_deref().unwrap();
    assert_eq!(
        thirty.left.as_deref().and_then(|n| n.left.as_deref()).map(|n| n.value),
        Some(21)
    );
    assert_eq!(
        thirty.right.as_deref().and_then(|n| n.right.as_deref()).map(|n| n.value),
        Some(49)
    );
}

#[test]
fn given_trees_when_comparing_then_left_subtrees_equal() {
    assert_eq!(tree1().left, tree2().left);
    assert_ne!(tree1().right, tree2().right);
}

#[test]
fn given_tree1_when_rendering_then_every_value_and_missing_marker_present() {
    let rendered = tree1().to_tree_string().to_string();
    for v in [20, 10, 50, 5, 15, 30, 100, 7, 29, 45] {
        assert!(rendered.contains(&v.to_string()), "missing {}", v);
    }
    assert_eq!(rendered.matches(MISSING_CHILD).count(), 1);

    let compact = tree1().to_tree_string_with(false).to_string();
    assert!(!compact.contains(MISSING_CHILD));
}

#[test]
fn given_generic_node_when_rendering_then_uses_display() {
    let t = BinaryNode::leaf("root").with_left(BinaryNode::leaf("l"));
    assert_eq!(
        t.to_tree_string().to_string(),
        format!("root\n├── l\n└── {}\n", MISSING_CHILD)
    );
}

// ============================================================
// Points and catalog
// ============================================================

#[test]
fn given_point_when_built_from_tuple_then_equal_and_displays() {
    let p: Point = (2, -3).into();
    assert_eq!(p, Point::new(2, -3));
    assert_eq!(p.to_string(), "(2, -3)");
    assert_eq!(Point::default(), Point::new(0, 0));
}

#[test]
fn given_catalog_when_rendering_each_fixture_then_non_empty() {
    let settings = FixtureSettings::default();
    for f in GRAPH_FIXTURES.iter().chain(TREE_FIXTURES.iter()) {
        let out = f.render(&settings);
        assert!(!out.is_empty(), "{} rendered empty", f);
        assert_eq!(Fixture::lookup(f.name(), &[*f]).unwrap(), *f);
    }
}
