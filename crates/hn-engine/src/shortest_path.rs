//! Dijkstra single-source shortest paths.
//!
//! Binary-heap implementation over the graph's insertion-ordered adjacency.
//! Requires nonnegative resolved weights; ties between equal tentative
//! distances break by discovery order so results are deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hn_core::NodeId;
use hn_graph::{EdgeValue, Graph};
use tracing::debug;

use crate::error::{EngineResult, GraphError};

/// Result of one shortest-path run: distances and predecessors from a
/// single source. Unreachable nodes are absent, not infinite.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: Vec<Option<f64>>,
    pred: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// The source node this tree was grown from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance to a node, or None when unreachable.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.dist.get(node.index() as usize).copied().flatten()
    }

    /// Full source-to-node path, reconstructed from recorded predecessors.
    /// None when the node is unreachable.
    pub fn path(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.distance(node)?;
        let mut path = vec![node];
        let mut current = node;
        while current != self.source {
            current = self.pred[current.index() as usize]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Iterate over reachable nodes with their distances, in node order.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (NodeId::from_index(i as u32), d)))
    }
}

/// Min-heap entry; equal distances pop in discovery order.
struct HeapEntry {
    dist: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the minimum first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Compute shortest paths from `source` to every reachable node.
///
/// Fails when `source` is unknown or any resolved weight is negative;
/// validation runs before the heap is ever touched. O((V+E) log V).
pub fn shortest_paths(graph: &Graph, source: &str) -> EngineResult<ShortestPathTree> {
    let src = graph
        .node_id(source)
        .ok_or_else(|| GraphError::UnknownNode {
            name: source.to_string(),
        })?;

    for edge in graph.edges() {
        let w = EdgeValue::PathWeight.resolve(&edge.attrs);
        if w < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: node_name(graph, edge.from),
                to: node_name(graph, edge.to),
                value: w,
            });
        }
    }

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    dist[src.index() as usize] = 0.0;
    heap.push(HeapEntry {
        dist: 0.0,
        seq,
        node: src,
    });

    while let Some(HeapEntry { dist: d, node: u, .. }) = heap.pop() {
        // Skip stale entries superseded by a shorter path.
        if d > dist[u.index() as usize] {
            continue;
        }
        for edge in graph.out_edges(u) {
            let w = EdgeValue::PathWeight.resolve(&edge.attrs);
            let candidate = d + w;
            let v_idx = edge.to.index() as usize;
            if candidate < dist[v_idx] {
                dist[v_idx] = candidate;
                pred[v_idx] = Some(u);
                seq += 1;
                heap.push(HeapEntry {
                    dist: candidate,
                    seq,
                    node: edge.to,
                });
            }
        }
    }

    let dist: Vec<Option<f64>> = dist
        .into_iter()
        .map(|d| d.is_finite().then_some(d))
        .collect();
    debug!(
        source,
        reachable = dist.iter().filter(|d| d.is_some()).count(),
        "shortest paths settled"
    );

    Ok(ShortestPathTree {
        source: src,
        dist,
        pred,
    })
}

fn node_name(graph: &Graph, id: NodeId) -> String {
    graph.node_name(id).unwrap_or("?").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_graph::{EdgeAttrs, GraphBuilder};

    fn diamond() -> Graph {
        // A->B(4), A->C(2), C->B(1), B->D(5), C->D(8)
        let mut builder = GraphBuilder::new();
        for name in ["A", "B", "C", "D"] {
            builder.add_node(name, None);
        }
        for (u, v, w) in [
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("C", "B", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
        ] {
            builder.add_edge(u, v, EdgeAttrs::weight(w), true).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn diamond_shortest_distances() {
        let graph = diamond();
        let tree = shortest_paths(&graph, "A").unwrap();

        let d = graph.node_id("D").unwrap();
        assert_eq!(tree.distance(d), Some(10.0));

        let path: Vec<_> = tree
            .path(d)
            .unwrap()
            .into_iter()
            .map(|id| graph.node_name(id).unwrap().to_string())
            .collect();
        assert_eq!(path, ["A", "C", "B", "D"]);
    }

    #[test]
    fn distance_equals_path_weight_sum() {
        let graph = diamond();
        let tree = shortest_paths(&graph, "A").unwrap();

        for (node, dist) in tree.reachable() {
            let path = tree.path(node).unwrap();
            let mut sum = 0.0;
            for pair in path.windows(2) {
                let edge = graph
                    .out_edges(pair[0])
                    .iter()
                    .find(|e| e.to == pair[1])
                    .copied()
                    .unwrap();
                sum += EdgeValue::PathWeight.resolve(&edge.attrs);
            }
            assert!((dist - sum).abs() < 1e-12);
        }
    }

    #[test]
    fn unreachable_nodes_absent() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", None);
        builder.add_node("B", None);
        builder.add_node("island", None);
        builder
            .add_edge("A", "B", EdgeAttrs::weight(1.0), true)
            .unwrap();
        let graph = builder.build().unwrap();

        let tree = shortest_paths(&graph, "A").unwrap();
        let island = graph.node_id("island").unwrap();
        assert_eq!(tree.distance(island), None);
        assert_eq!(tree.path(island), None);
        assert_eq!(tree.reachable().count(), 2);
    }

    #[test]
    fn unknown_source_rejected() {
        let graph = diamond();
        let err = shortest_paths(&graph, "nope").unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { name } if name == "nope"));
    }

    #[test]
    fn negative_weight_rejected_before_running() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", None);
        builder.add_node("B", None);
        builder
            .add_edge("A", "B", EdgeAttrs::weight(-1.0), true)
            .unwrap();
        let graph = builder.build().unwrap();

        let err = shortest_paths(&graph, "A").unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { value, .. } if value == -1.0));
    }

    #[test]
    fn equal_distance_ties_break_by_discovery_order() {
        // A->B(1), A->C(1), B->D(1), C->D(1): D is reachable at cost 2 via
        // either branch; the B branch is discovered first, so it wins.
        let mut builder = GraphBuilder::new();
        for name in ["A", "B", "C", "D"] {
            builder.add_node(name, None);
        }
        for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
            builder.add_edge(u, v, EdgeAttrs::weight(1.0), true).unwrap();
        }
        let graph = builder.build().unwrap();

        let tree = shortest_paths(&graph, "A").unwrap();
        let d = graph.node_id("D").unwrap();
        let path: Vec<_> = tree
            .path(d)
            .unwrap()
            .into_iter()
            .map(|id| graph.node_name(id).unwrap().to_string())
            .collect();
        assert_eq!(path, ["A", "B", "D"]);
    }

    #[test]
    fn distance_falls_back_through_precedence() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", None);
        builder.add_node("B", None);
        builder
            .add_edge(
                "A",
                "B",
                EdgeAttrs {
                    weight: None,
                    distance: Some(6.0),
                    cost: Some(2.0),
                    capacity: None,
                },
                true,
            )
            .unwrap();
        let graph = builder.build().unwrap();

        let tree = shortest_paths(&graph, "A").unwrap();
        let b = graph.node_id("B").unwrap();
        assert_eq!(tree.distance(b), Some(6.0));
    }
}
