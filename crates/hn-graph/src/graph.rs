//! Core graph data structures.

use std::collections::HashMap;

use hn_core::NodeId;

/// Role tag on a node (informational only; no algorithm consults it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Supply point (reservoir, treatment plant).
    Source,
    /// Demand point (consumer, service area).
    Sink,
    /// Interior pipe junction.
    Junction,
}

/// A node in the distribution network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub role: Option<NodeRole>,
}

/// Raw, as-declared edge attributes.
///
/// Each field is `None` when the input never declared it; resolution to a
/// concrete number happens per consumer via [`crate::EdgeValue`], never here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeAttrs {
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub cost: Option<f64>,
    pub capacity: Option<f64>,
}

impl EdgeAttrs {
    /// Attributes with only a weight declared.
    pub fn weight(w: f64) -> Self {
        Self {
            weight: Some(w),
            ..Self::default()
        }
    }

    /// Attributes with only a capacity declared.
    pub fn capacity(c: f64) -> Self {
        Self {
            capacity: Some(c),
            ..Self::default()
        }
    }

    /// Attributes with only a cost declared.
    pub fn cost(c: f64) -> Self {
        Self {
            cost: Some(c),
            ..Self::default()
        }
    }
}

/// A directed edge with its raw attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub attrs: EdgeAttrs,
}

/// The graph: a validated, immutable collection of nodes and directed edges.
///
/// Adjacency is stored per node in edge insertion order, which is what the
/// engines use as their deterministic discovery order. At most one edge
/// exists per ordered `(from, to)` pair.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, NodeId>,
    pub(crate) out: Vec<Vec<Edge>>,
}

impl Graph {
    /// Return all nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Look up a node ID by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Node name for an ID, if the ID belongs to this graph.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn out_edges(&self, id: NodeId) -> &[Edge] {
        self.out
            .get(id.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every directed edge, in node order then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.out.iter().flatten()
    }
}
