//! Minimum spanning tree / forest over the undirected projection.
//!
//! Kruskal and Prim are both provided; on a disconnected projection each
//! runs per connected component and the result is a spanning forest. The
//! two algorithms must always agree on total cost (edge sets may differ
//! only under cost ties).

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::str::FromStr;

use hn_core::NodeId;
use hn_graph::{Graph, UndirectedProjection};
use tracing::debug;

use crate::error::EngineResult;

/// Spanning-tree algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MstAlgorithm {
    Kruskal,
    #[default]
    Prim,
}

impl FromStr for MstAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" | "kruskals" => Ok(MstAlgorithm::Kruskal),
            "prim" | "prims" => Ok(MstAlgorithm::Prim),
            other => Err(format!("unknown MST algorithm: {other}")),
        }
    }
}

/// Spanning forest: one tree per connected component plus aggregate cost.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    pub edges: Vec<(NodeId, NodeId)>,
    pub total_cost: f64,
}

/// Union-find with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);
        if px == py {
            return false;
        }
        match self.rank[px].cmp(&self.rank[py]) {
            Ordering::Less => self.parent[px] = py,
            Ordering::Greater => self.parent[py] = px,
            Ordering::Equal => {
                self.parent[py] = px;
                self.rank[px] += 1;
            }
        }
        true
    }
}

/// Compute the minimum spanning forest of the graph's undirected projection.
pub fn minimum_spanning_forest(
    graph: &Graph,
    algorithm: MstAlgorithm,
) -> EngineResult<SpanningForest> {
    let projection = UndirectedProjection::of(graph);
    let forest = match algorithm {
        MstAlgorithm::Kruskal => kruskal(&projection),
        MstAlgorithm::Prim => prim(&projection),
    };
    debug!(
        ?algorithm,
        edges = forest.edges.len(),
        total_cost = forest.total_cost,
        "spanning forest computed"
    );
    Ok(forest)
}

fn kruskal(projection: &UndirectedProjection) -> SpanningForest {
    let mut sorted: Vec<_> = projection.edges().to_vec();
    sorted.sort_by(|x, y| {
        x.cost
            .total_cmp(&y.cost)
            .then_with(|| x.a.cmp(&y.a))
            .then_with(|| x.b.cmp(&y.b))
    });

    let mut uf = UnionFind::new(projection.node_count());
    let mut edges = Vec::new();
    let mut total_cost = 0.0;
    for edge in sorted {
        if uf.union(edge.a.index() as usize, edge.b.index() as usize) {
            edges.push((edge.a, edge.b));
            total_cost += edge.cost;
        }
    }

    SpanningForest { edges, total_cost }
}

/// Min-heap entry for Prim's frontier.
struct FrontierEdge {
    cost: f64,
    seq: u64,
    from: NodeId,
    to: NodeId,
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

fn prim(projection: &UndirectedProjection) -> SpanningForest {
    let n = projection.node_count();
    let mut visited = vec![false; n];
    let mut edges = Vec::new();
    let mut total_cost = 0.0;
    let mut seq = 0u64;

    // One growth pass per component, starting from its lowest-index node.
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;

        let mut frontier = BinaryHeap::new();
        push_neighbors(projection, NodeId::from_index(start as u32), &mut frontier, &mut seq);

        while let Some(FrontierEdge { cost, from, to, .. }) = frontier.pop() {
            let idx = to.index() as usize;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            edges.push((from, to));
            total_cost += cost;
            push_neighbors(projection, to, &mut frontier, &mut seq);
        }
    }

    SpanningForest { edges, total_cost }
}

fn push_neighbors(
    projection: &UndirectedProjection,
    node: NodeId,
    frontier: &mut BinaryHeap<FrontierEdge>,
    seq: &mut u64,
) {
    for &(to, cost) in projection.neighbors(node) {
        *seq += 1;
        frontier.push(FrontierEdge {
            cost,
            seq: *seq,
            from: node,
            to,
        });
    }
}
