//! # Loop Extraction
//!
//! Orders a graph's nodes into a closed ring by walking its connections.
//!
//! The walk starts at an open endpoint (degree 1) if one exists,
//! otherwise at the first node seen in connection order. At every step it
//! takes the first neighbour that is not the node it came from, and stops
//! when it returns to the start or hits a dead end. The result is then
//! checked: only a closed ring in which every node has exactly two
//! connections, covering every connected node, is accepted. Finally no two
//! non-adjacent ring edges may cross, so the ring bounds a simple polygon.

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use glam::DVec2;
use tracing::debug;

/// Adjacency lists keyed by node index, plus the order in which nodes were
/// first seen while scanning connections.
struct Adjacency {
    neighbors: Vec<Vec<usize>>,
    seen: Vec<usize>,
}

impl Adjacency {
    fn build(graph: &Graph) -> Self {
        let mut neighbors = vec![Vec::new(); graph.node_count()];
        let mut seen = Vec::new();

        for c in graph.connections() {
            for (from, to) in [(c.node_a, c.node_b), (c.node_b, c.node_a)] {
                if neighbors[from].is_empty() {
                    seen.push(from);
                }
                neighbors[from].push(to);
            }
        }

        Self { neighbors, seen }
    }

    fn start_node(&self) -> Option<usize> {
        self.seen
            .iter()
            .copied()
            .find(|&n| self.neighbors[n].len() == 1)
            .or_else(|| self.seen.first().copied())
    }
}

/// True when segments `p1-p2` and `q1-q2` cross at a point interior to
/// both. Touching endpoints and collinear overlap do not count.
fn segments_cross(p1: DVec2, p2: DVec2, q1: DVec2, q2: DVec2) -> bool {
    let side = |a: DVec2, b: DVec2, p: DVec2| (b - a).perp_dot(p - a);
    let (d1, d2) = (side(q1, q2, p1), side(q1, q2, p2));
    let (d3, d4) = (side(p1, p2, q1), side(p1, p2, q2));
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Fails on the first pair of non-adjacent ring edges that cross.
fn check_simple(graph: &Graph, ring: &[usize]) -> GraphResult<()> {
    let points = ring
        .iter()
        .map(|&i| graph.node_position(i))
        .collect::<GraphResult<Vec<_>>>()?;
    let n = ring.len();

    for i in 0..n {
        let i_next = (i + 1) % n;
        for j in (i + 2)..n {
            let j_next = (j + 1) % n;
            if j_next == i {
                continue;
            }
            if segments_cross(points[i], points[i_next], points[j], points[j_next]) {
                return Err(GraphError::degenerate(format!(
                    "edges {}-{} and {}-{} cross",
                    ring[i], ring[i_next], ring[j], ring[j_next]
                )));
            }
        }
    }
    Ok(())
}

/// Extracts the ordered node indices of the graph's polygon loop.
///
/// Fails with `DegenerateGraph` when there are no connections, when the
/// walk reaches fewer than 3 nodes, when the chain does not close, when a
/// node branches (degree other than 2), when connected nodes are left
/// outside the loop, or when two ring edges cross.
pub fn extract_loop(graph: &Graph) -> GraphResult<Vec<usize>> {
    let adjacency = Adjacency::build(graph);
    let start = adjacency
        .start_node()
        .ok_or_else(|| GraphError::degenerate("graph has no connections"))?;

    let bound = adjacency.seen.len();
    let mut ring = vec![start];
    let mut previous: Option<usize> = None;
    let mut current = start;
    let mut closed = false;

    loop {
        let next = adjacency.neighbors[current]
            .iter()
            .copied()
            .find(|&n| Some(n) != previous);
        let Some(next) = next else {
            break;
        };
        if next == start && ring.len() > 2 {
            closed = true;
            break;
        }
        ring.push(next);
        previous = Some(current);
        current = next;

        if ring.len() > bound {
            debug!(walked = ring.len(), bound, "loop walk exceeded node count");
            return Err(GraphError::degenerate(format!(
                "walk exceeded {bound} nodes without closing"
            )));
        }
    }

    if ring.len() < 3 {
        return Err(GraphError::degenerate(format!(
            "only {} nodes reachable, need at least 3",
            ring.len()
        )));
    }
    if !closed {
        return Err(GraphError::degenerate(format!(
            "open chain of {} nodes ends at node {current}",
            ring.len()
        )));
    }
    if let Some(&branch) = ring.iter().find(|&&n| adjacency.neighbors[n].len() != 2) {
        return Err(GraphError::degenerate(format!(
            "node {branch} has {} connections, expected 2",
            adjacency.neighbors[branch].len()
        )));
    }
    if ring.len() != adjacency.seen.len() {
        return Err(GraphError::degenerate(format!(
            "loop covers {} of {} connected nodes",
            ring.len(),
            adjacency.seen.len()
        )));
    }

    check_simple(graph, &ring)?;

    debug!(nodes = ring.len(), start, "extracted polygon loop");
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::GraphRole;
    use glam::DVec2;

    fn ring(points: &[[f64; 2]], edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new(GraphRole::Floor);
        for p in points {
            graph.add_node(DVec2::from(*p));
        }
        for &(a, b) in edges {
            graph
                .add_connection(a, b, GraphRole::Floor.default_kind())
                .unwrap();
        }
        graph
    }

    const SQUARE: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    #[test]
    fn test_square_loop() {
        let graph = ring(&SQUARE, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(extract_loop(&graph).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_loop_follows_connections_not_node_order() {
        // Nodes listed out of ring order
        let points = [[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
        let graph = ring(&points, &[(0, 2), (2, 1), (1, 3), (3, 0)]);
        assert_eq!(extract_loop(&graph).unwrap(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_mixed_orientation_connections() {
        let graph = ring(&SQUARE, &[(1, 0), (1, 2), (3, 2), (0, 3)]);
        let order = extract_loop(&graph).unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 1);
    }

    #[test]
    fn test_branching_node_is_degenerate() {
        let mut points = SQUARE.to_vec();
        points.push([2.0, 0.5]);
        let graph = ring(&points, &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 4)]);
        assert!(matches!(
            extract_loop(&graph),
            Err(GraphError::DegenerateGraph { .. })
        ));
    }

    #[test]
    fn test_open_chain_is_degenerate() {
        let graph = ring(&SQUARE, &[(0, 1), (1, 2), (2, 3)]);
        assert!(matches!(
            extract_loop(&graph),
            Err(GraphError::DegenerateGraph { .. })
        ));
    }

    #[test]
    fn test_two_nodes_are_degenerate() {
        let graph = ring(&SQUARE[..2], &[(0, 1)]);
        assert!(matches!(
            extract_loop(&graph),
            Err(GraphError::DegenerateGraph { .. })
        ));
    }

    #[test]
    fn test_no_connections_is_degenerate() {
        let graph = ring(&SQUARE, &[]);
        assert!(matches!(
            extract_loop(&graph),
            Err(GraphError::DegenerateGraph { .. })
        ));
    }

    #[test]
    fn test_isolated_nodes_are_ignored() {
        let mut points = SQUARE.to_vec();
        points.push([5.0, 5.0]);
        let graph = ring(&points, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(extract_loop(&graph).unwrap().len(), 4);
    }

    #[test]
    fn test_second_component_is_degenerate() {
        let points = [
            [0.0, 0.0], [1.0, 0.0], [0.5, 1.0],
            [5.0, 0.0], [6.0, 0.0], [5.5, 1.0],
        ];
        let graph = ring(&points, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert!(matches!(
            extract_loop(&graph),
            Err(GraphError::DegenerateGraph { .. })
        ));
    }

    #[test]
    fn test_figure_eight_is_degenerate() {
        // Two triangles sharing node 0: node 0 has degree 4
        let points = [[0.0, 0.0], [1.0, 1.0], [1.0, -1.0], [-1.0, 1.0], [-1.0, -1.0]];
        let graph = ring(&points, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]);
        assert!(extract_loop(&graph).is_err());
    }

    fn assert_crossing(graph: &Graph, edges: &str) {
        match extract_loop(graph) {
            Err(GraphError::DegenerateGraph { message }) => {
                assert_eq!(message, format!("edges {edges} cross"));
            }
            other => panic!("expected crossing edges, got {other:?}"),
        }
    }

    #[test]
    fn test_symmetric_bowtie_is_degenerate() {
        let points = [[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]];
        let graph = ring(&points, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_crossing(&graph, "0-1 and 2-3");
    }

    #[test]
    fn test_asymmetric_bowtie_is_degenerate() {
        let points = [[0.0, 0.0], [4.0, 0.0], [0.0, 1.0], [4.0, 3.0]];
        let graph = ring(&points, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_crossing(&graph, "1-2 and 3-0");
    }

    #[test]
    fn test_concave_ring_is_simple() {
        let points = [
            [0.0, 0.0], [2.0, 0.0], [2.0, 1.0],
            [1.0, 1.0], [1.0, 2.0], [0.0, 2.0],
        ];
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)];
        assert_eq!(extract_loop(&ring(&points, &edges)).unwrap().len(), 6);
    }

    #[test]
    fn test_segments_cross_ignores_touching() {
        let o = DVec2::ZERO;
        assert!(segments_cross(o, DVec2::splat(2.0), DVec2::new(2.0, 0.0), DVec2::new(0.0, 2.0)));
        // Shared endpoint
        assert!(!segments_cross(o, DVec2::X, DVec2::X, DVec2::ONE));
        // T-junction: endpoint on the other segment
        assert!(!segments_cross(o, DVec2::new(2.0, 0.0), DVec2::X, DVec2::ONE));
        // Collinear overlap
        assert!(!segments_cross(o, DVec2::new(2.0, 0.0), DVec2::X, DVec2::new(3.0, 0.0)));
    }
}
