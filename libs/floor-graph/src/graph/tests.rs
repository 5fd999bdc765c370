//! # Graph Store Tests

use super::*;
use crate::kind::{LineType, WallType};

fn wall() -> ConnectionKind {
    ConnectionKind::Wall(WallType::Wall)
}

/// Square ring (0,0) (1,0) (1,1) (0,1).
fn square() -> Graph {
    let mut graph = Graph::new(GraphRole::Floor);
    for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
        graph.add_node(DVec2::from(p));
    }
    for i in 0..4 {
        graph.add_connection(i, (i + 1) % 4, wall()).unwrap();
    }
    graph
}

// =============================================================================
// NODES
// =============================================================================

#[test]
fn test_add_node_returns_index() {
    let mut graph = Graph::default();
    assert_eq!(graph.add_node(DVec2::ZERO), 0);
    assert_eq!(graph.add_node(DVec2::ONE), 1);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_set_node_position_out_of_range() {
    let mut graph = Graph::default();
    graph.add_node(DVec2::ZERO);
    let err = graph.set_node_position(3, DVec2::ONE).unwrap_err();
    assert!(matches!(err, GraphError::IndexOutOfRange { index: 3, len: 1, .. }));
}

#[test]
fn test_delete_node_out_of_range() {
    let mut graph = Graph::default();
    assert!(matches!(
        graph.delete_node(0),
        Err(GraphError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_delete_node_cascades_connections() {
    let mut graph = square();
    graph.delete_node(1).unwrap();

    assert_eq!(graph.node_count(), 3);
    // 0-1 and 1-2 are gone, 2-3 and 3-0 remain (now 1-2 and 2-0)
    assert_eq!(graph.connection_count(), 2);
    let pairs: Vec<(usize, usize)> = graph.connections().map(|c| (c.node_a, c.node_b)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 0)]);
}

#[test]
fn test_delete_then_readd_does_not_resurrect_connections() {
    let mut graph = square();
    let removed = graph.delete_node(3).unwrap();
    let readded = graph.add_node(removed);

    assert_eq!(readded, 3);
    assert_eq!(graph.degree(3).unwrap(), 0);
    assert!(graph.find_connection(3, 0).is_none());
    assert!(graph.find_connection(2, 3).is_none());
    for c in graph.connections() {
        assert!(c.node_a < graph.node_count());
        assert!(c.node_b < graph.node_count());
    }
}

#[test]
fn test_handles_survive_deletion_of_other_nodes() {
    let mut graph = square();
    let id = graph.node_id(3).unwrap();
    graph.delete_node(0).unwrap();

    assert_eq!(graph.index_of(id), Some(2));
    assert_eq!(graph.node_position(2).unwrap(), DVec2::new(0.0, 1.0));
}

#[test]
fn test_handle_of_deleted_node_is_stale() {
    let mut graph = square();
    let id = graph.node_id(2).unwrap();
    graph.delete_node(2).unwrap();
    graph.add_node(DVec2::splat(5.0));

    assert_eq!(graph.index_of(id), None);
}

#[test]
fn test_world_position_uses_origin() {
    let mut graph = Graph::with_origin(GraphRole::Path, DVec3::new(10.0, 4.0, -2.0));
    let i = graph.add_node(DVec2::new(1.0, 2.0));

    assert_eq!(graph.world_position(i).unwrap(), DVec3::new(11.0, 4.0, 0.0));

    graph.set_world_position(i, DVec3::new(12.0, 99.0, 1.0)).unwrap();
    assert_eq!(graph.node_position(i).unwrap(), DVec2::new(2.0, 3.0));

    let j = graph.add_world_node(DVec3::new(10.0, 0.0, -2.0));
    assert_eq!(graph.node_position(j).unwrap(), DVec2::ZERO);
}

// =============================================================================
// CONNECTIONS
// =============================================================================

#[test]
fn test_duplicate_connection_rejected_in_either_orientation() {
    let mut graph = Graph::default();
    let a = graph.add_node(DVec2::ZERO);
    let b = graph.add_node(DVec2::X);

    graph.add_connection(a, b, wall()).unwrap();
    let err = graph.add_connection(b, a, wall()).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert_eq!(graph.connection_count(), 1);
}

#[test]
fn test_self_loop_rejected() {
    let mut graph = Graph::default();
    let a = graph.add_node(DVec2::ZERO);
    assert!(matches!(
        graph.add_connection(a, a, wall()),
        Err(GraphError::InvalidArgument { .. })
    ));
}

#[test]
fn test_connection_to_missing_node_rejected() {
    let mut graph = Graph::default();
    let a = graph.add_node(DVec2::ZERO);
    assert!(matches!(
        graph.add_connection(a, 5, wall()),
        Err(GraphError::InvalidArgument { .. })
    ));
}

#[test]
fn test_connection_defaults() {
    let mut graph = Graph::new(GraphRole::Path);
    let a = graph.add_node(DVec2::ZERO);
    let b = graph.add_node(DVec2::X);
    let ci = graph
        .add_connection(a, b, ConnectionKind::Line(LineType::Shortcut))
        .unwrap();

    let c = graph.connection(ci).unwrap();
    assert_eq!(c.width, 0.5);
    assert!(!c.is_cardinal);
    assert_eq!(c.kind, ConnectionKind::Line(LineType::Shortcut));
    assert_eq!(c.other(a), Some(b));
    assert_eq!(c.other(7), None);
}

#[test]
fn test_remove_and_retype_connection() {
    let mut graph = square();
    graph
        .set_connection_kind(0, ConnectionKind::Wall(WallType::Door))
        .unwrap();
    assert_eq!(graph.connection(0).unwrap().kind, ConnectionKind::Wall(WallType::Door));

    let removed = graph.remove_connection(0).unwrap();
    assert_eq!((removed.node_a, removed.node_b), (0, 1));
    assert_eq!(graph.connection_count(), 3);
    assert!(matches!(
        graph.remove_connection(3),
        Err(GraphError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_set_connection_width_validates() {
    let mut graph = square();
    graph.set_connection_width(1, 2.0).unwrap();
    assert_eq!(graph.connection(1).unwrap().width, 2.0);
    assert!(graph.set_connection_width(1, -1.0).is_err());
    assert!(graph.set_connection_width(1, f64::NAN).is_err());

    graph.set_connection_cardinal(1, true).unwrap();
    assert!(graph.connection(1).unwrap().is_cardinal);
}

#[test]
fn test_add_connection_with_rejects_negative_width() {
    let mut graph = square();
    let attrs = ConnectionAttrs {
        width: -0.1,
        ..ConnectionAttrs::of_kind(wall())
    };
    assert!(matches!(
        graph.add_connection_with(0, 2, attrs),
        Err(GraphError::InvalidArgument { .. })
    ));
    assert_eq!(graph.connection_count(), 4);
}

#[test]
fn test_degree_and_find() {
    let graph = square();
    assert_eq!(graph.degree(0).unwrap(), 2);
    assert_eq!(graph.find_connection(0, 3), Some(3));
    assert_eq!(graph.find_connection(0, 2), None);
}

#[test]
fn test_clear() {
    let mut graph = square();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.connection_count(), 0);
}
