//! Undirected projection of the directed graph.
//!
//! Spanning-tree computations run over this view: directed edges collapse
//! into simple undirected edges keyed by their unordered endpoint pair.
//! When both directions exist with different costs the lower cost wins,
//! so the projection never depends on edge iteration order.

use std::collections::{BTreeMap, VecDeque};

use hn_core::NodeId;

use crate::graph::Graph;
use crate::resolve::EdgeValue;

/// A simple undirected edge with its resolved spanning-tree cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndirectedEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub cost: f64,
}

/// Undirected view of a [`Graph`], with adjacency for traversal.
#[derive(Debug, Clone)]
pub struct UndirectedProjection {
    node_count: usize,
    edges: Vec<UndirectedEdge>,
    adj: Vec<Vec<(NodeId, f64)>>,
}

impl UndirectedProjection {
    /// Project a directed graph onto its simple undirected edge set.
    pub fn of(graph: &Graph) -> Self {
        let node_count = graph.node_count();

        // Keyed by (low index, high index) so edge order is deterministic.
        let mut best: BTreeMap<(u32, u32), f64> = BTreeMap::new();
        for edge in graph.edges() {
            // Self-loops can never join components; drop them here.
            if edge.from == edge.to {
                continue;
            }
            let cost = EdgeValue::TreeCost.resolve(&edge.attrs);
            let (lo, hi) = if edge.from.index() <= edge.to.index() {
                (edge.from.index(), edge.to.index())
            } else {
                (edge.to.index(), edge.from.index())
            };
            best.entry((lo, hi))
                .and_modify(|c| {
                    if cost < *c {
                        *c = cost;
                    }
                })
                .or_insert(cost);
        }

        let mut edges = Vec::with_capacity(best.len());
        let mut adj = vec![Vec::new(); node_count];
        for (&(lo, hi), &cost) in &best {
            let a = NodeId::from_index(lo);
            let b = NodeId::from_index(hi);
            edges.push(UndirectedEdge { a, b, cost });
            adj[lo as usize].push((b, cost));
            adj[hi as usize].push((a, cost));
        }

        Self {
            node_count,
            edges,
            adj,
        }
    }

    /// All undirected edges, ordered by endpoint pair.
    pub fn edges(&self) -> &[UndirectedEdge] {
        &self.edges
    }

    /// Number of nodes in the underlying graph.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Undirected neighbors of a node with edge costs.
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, f64)] {
        self.adj
            .get(id.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Connected components, each listed in breadth-first discovery order.
    ///
    /// Isolated nodes form singleton components.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut seen = vec![false; self.node_count];
        let mut components = Vec::new();

        for start in 0..self.node_count {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back(NodeId::from_index(start as u32));
            while let Some(u) = queue.pop_front() {
                component.push(u);
                for &(v, _) in self.neighbors(u) {
                    let idx = v.index() as usize;
                    if !seen[idx] {
                        seen[idx] = true;
                        queue.push_back(v);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
