use floor_graph::{ConnectionKind, Graph, GraphData, GraphError, GraphRole, WallType};
use floor_mesh::{Floor, FloorSettings, MeshError};
use glam::DVec2;

fn regular_polygon(n: usize, radius: f64) -> Graph {
    let mut graph = Graph::new(GraphRole::Floor);
    for i in 0..n {
        let angle = std::f64::consts::TAU * i as f64 / n as f64;
        graph.add_node(DVec2::new(angle.cos(), angle.sin()) * radius);
    }
    for i in 0..n {
        graph
            .add_connection(i, (i + 1) % n, ConnectionKind::Wall(WallType::Wall))
            .unwrap();
    }
    graph
}

#[test]
fn roundtrip_convex_polygons_regenerate() {
    for n in 3..10 {
        let json = GraphData::from_graph(&regular_polygon(n, 2.0)).to_json().unwrap();
        let mut floor = Floor::from_json(&json, FloorSettings::default()).unwrap();

        let artifact = floor.regenerate().unwrap();
        assert_eq!(artifact.mesh.triangle_count(), n - 2, "n = {n}");

        let trigger = artifact.trigger.as_ref().unwrap();
        assert_eq!(trigger.vertex_count(), 2 * n);
        assert_eq!(trigger.triangle_count(), 2 * (n - 2) + 2 * n);

        assert_eq!(floor.to_json().unwrap(), json);
    }
}

#[test]
fn roundtrip_after_delete_keeps_compact_indices() {
    let mut floor = Floor::new(regular_polygon(5, 1.0), FloorSettings::default());
    floor.editor_mut().delete_node(2).unwrap();
    floor.editor_mut().connect_to(1, 2).unwrap();

    let json = floor.to_json().unwrap();
    let data = GraphData::from_json(&json).unwrap();
    assert_eq!(data.nodes.len(), 4);
    assert!(data.connections.iter().all(|c| c.node_a < 4 && c.node_b < 4));

    let mut restored = Floor::from_json(&json, FloorSettings::default()).unwrap();
    assert_eq!(restored.regenerate().unwrap().mesh.triangle_count(), 2);
}

#[test]
fn deleted_node_never_resurrects_connections() {
    for n in 3..9 {
        for deleted in 0..n {
            let mut floor = Floor::new(regular_polygon(n, 1.0), FloorSettings::default());
            floor.editor_mut().delete_node(deleted).unwrap();
            let readded = floor.editor_mut().add_node(DVec2::new(5.0, 5.0)).unwrap();

            let graph = floor.graph();
            assert_eq!(readded, n - 1, "n = {n}, deleted = {deleted}");
            assert_eq!(graph.degree(readded).unwrap(), 0);
            assert_eq!(graph.connection_count(), n - 2);
            assert!(graph
                .connections()
                .all(|c| c.node_a < n - 1 && c.node_b < n - 1));
        }
    }
}

#[test]
fn self_intersecting_ring_fails_regeneration() {
    for points in [
        [[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]],
        [[0.0, 0.0], [4.0, 0.0], [0.0, 1.0], [4.0, 3.0]],
    ] {
        let mut graph = Graph::new(GraphRole::Floor);
        for p in points {
            graph.add_node(DVec2::from(p));
        }
        for i in 0..4 {
            graph
                .add_connection(i, (i + 1) % 4, ConnectionKind::Wall(WallType::Wall))
                .unwrap();
        }

        let mut floor = Floor::new(graph, FloorSettings::default());
        assert!(matches!(
            floor.regenerate(),
            Err(MeshError::Graph(GraphError::DegenerateGraph { .. }))
        ));
        assert!(floor.artifact().is_none());
    }
}

#[test]
fn branching_graph_fails_regeneration() {
    let mut graph = regular_polygon(4, 1.0);
    let spur = graph.add_node(DVec2::new(3.0, 0.0));
    graph
        .add_connection(0, spur, ConnectionKind::Wall(WallType::Door))
        .unwrap();

    let mut floor = Floor::new(graph, FloorSettings::default());
    assert!(matches!(
        floor.regenerate(),
        Err(MeshError::Graph(GraphError::DegenerateGraph { .. }))
    ));
}

#[test]
fn malformed_json_is_rejected() {
    let json = r#"{ "nodes": [[0.0, 0.0], [1.0, 0.0]], "connections": [{ "node_a": 0, "node_b": 5 }] }"#;
    assert!(matches!(
        Floor::from_json(json, FloorSettings::default()),
        Err(MeshError::Graph(GraphError::InvalidArgument { .. }))
    ));
}
