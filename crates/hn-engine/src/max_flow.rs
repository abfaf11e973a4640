//! Edmonds-Karp maximum flow with multi-sink aggregation.
//!
//! The residual network is a paired forward/reverse arc list; BFS walks
//! arcs in insertion order, so augmenting-path selection is deterministic.
//! Multi-sink queries get a synthetic aggregation node on a scoped copy of
//! the network; callers never observe it.

use hn_core::NodeId;
use hn_graph::{EdgeValue, Graph};
use tracing::debug;

use crate::error::{EngineResult, GraphError};

/// One edge of the resulting assignment; only positive flows are reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub flow: f64,
}

/// Maximum flow value plus the edge-level assignment that realizes it.
///
/// The assignment is not decomposed into source-to-sink paths.
#[derive(Debug, Clone)]
pub struct MaxFlow {
    pub value: f64,
    pub edges: Vec<FlowEdge>,
}

struct Arc {
    from: usize,
    to: usize,
    cap: f64,
    flow: f64,
}

/// Residual network. Forward arcs sit at even indices; `i ^ 1` is the
/// paired reverse arc.
struct Residual {
    adj: Vec<Vec<usize>>,
    arcs: Vec<Arc>,
}

impl Residual {
    fn new(slots: usize) -> Self {
        Self {
            adj: vec![Vec::new(); slots],
            arcs: Vec::new(),
        }
    }

    fn push(&mut self, from: usize, to: usize, cap: f64) {
        let idx = self.arcs.len();
        self.arcs.push(Arc {
            from,
            to,
            cap,
            flow: 0.0,
        });
        self.adj[from].push(idx);
        self.arcs.push(Arc {
            from: to,
            to: from,
            cap: 0.0,
            flow: 0.0,
        });
        self.adj[to].push(idx + 1);
    }

    fn residual(&self, arc: usize) -> f64 {
        self.arcs[arc].cap - self.arcs[arc].flow
    }

    /// Shortest augmenting path via BFS; returns per-node parent arcs.
    fn bfs(&self, source: usize, target: usize) -> Option<Vec<Option<usize>>> {
        let mut parent: Vec<Option<usize>> = vec![None; self.adj.len()];
        let mut seen = vec![false; self.adj.len()];
        let mut queue = std::collections::VecDeque::new();
        seen[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for &a in &self.adj[u] {
                let v = self.arcs[a].to;
                if !seen[v] && self.residual(a) > 0.0 {
                    seen[v] = true;
                    parent[v] = Some(a);
                    if v == target {
                        return Some(parent);
                    }
                    queue.push_back(v);
                }
            }
        }
        None
    }
}

/// Compute the maximum flow from `source` to one or more `sinks`.
///
/// With several sinks, each is joined to a synthetic aggregation node whose
/// inbound edges carry the sum of all capacities in the graph (a safe
/// stand-in for unlimited capacity); the synthetic node is stripped from
/// the result. Worst case O(V·E²).
pub fn max_flow(graph: &Graph, source: &str, sinks: &[&str]) -> EngineResult<MaxFlow> {
    if sinks.is_empty() {
        return Err(GraphError::NoSinks);
    }
    let src = graph
        .node_id(source)
        .ok_or_else(|| GraphError::UnknownNode {
            name: source.to_string(),
        })?;
    let mut sink_ids = Vec::with_capacity(sinks.len());
    for sink in sinks {
        let id = graph.node_id(sink).ok_or_else(|| GraphError::UnknownNode {
            name: sink.to_string(),
        })?;
        if id == src {
            return Err(GraphError::SourceIsSink {
                name: sink.to_string(),
            });
        }
        sink_ids.push(id);
    }

    // Validate capacities and compute the aggregation stand-in capacity.
    let mut total_capacity = 0.0;
    for edge in graph.edges() {
        let cap = EdgeValue::FlowCapacity.resolve(&edge.attrs);
        if cap < 0.0 {
            return Err(GraphError::NegativeCapacity {
                from: graph.node_name(edge.from).unwrap_or("?").to_string(),
                to: graph.node_name(edge.to).unwrap_or("?").to_string(),
                value: cap,
            });
        }
        total_capacity += cap;
    }

    let n = graph.node_count();
    let super_sink = (sink_ids.len() > 1).then_some(n);
    let slots = n + usize::from(super_sink.is_some());

    let mut net = Residual::new(slots);
    for node in graph.nodes() {
        for edge in graph.out_edges(node.id) {
            let cap = EdgeValue::FlowCapacity.resolve(&edge.attrs);
            net.push(edge.from.index() as usize, edge.to.index() as usize, cap);
        }
    }
    if let Some(agg) = super_sink {
        for &sink in &sink_ids {
            net.push(sink.index() as usize, agg, total_capacity);
        }
    }

    let source_slot = src.index() as usize;
    let target_slot = super_sink.unwrap_or(sink_ids[0].index() as usize);

    let mut value = 0.0;
    let mut rounds = 0u64;
    while let Some(parent) = net.bfs(source_slot, target_slot) {
        // Bottleneck along the augmenting path; the walk stops at the
        // source, whose parent arc is unset.
        let mut bottleneck = f64::INFINITY;
        let mut v = target_slot;
        while let Some(a) = parent[v] {
            bottleneck = bottleneck.min(net.residual(a));
            v = net.arcs[a].from;
        }

        let mut v = target_slot;
        while let Some(a) = parent[v] {
            net.arcs[a].flow += bottleneck;
            net.arcs[a ^ 1].flow -= bottleneck;
            v = net.arcs[a].from;
        }

        value += bottleneck;
        rounds += 1;
    }
    debug!(source, value, rounds, "max flow converged");

    // Report positive forward flows, dropping anything touching the
    // synthetic node.
    let mut edges = Vec::new();
    for a in (0..net.arcs.len()).step_by(2) {
        let arc = &net.arcs[a];
        if Some(arc.to) == super_sink || Some(arc.from) == super_sink {
            continue;
        }
        if arc.flow > 0.0 {
            edges.push(FlowEdge {
                from: NodeId::from_index(arc.from as u32),
                to: NodeId::from_index(arc.to as u32),
                flow: arc.flow,
            });
        }
    }

    Ok(MaxFlow { value, edges })
}
