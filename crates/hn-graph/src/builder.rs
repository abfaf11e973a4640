//! Incremental graph builder.

use std::collections::HashMap;

use hn_core::NodeId;

use crate::error::{GraphResult, ValidationError};
use crate::graph::{Edge, EdgeAttrs, Graph, Node, NodeRole};

/// Builder for constructing a graph incrementally.
///
/// Declare nodes with `add_node`, then wire them with `add_edge`, then call
/// `build()` to validate and freeze the result into an immutable [`Graph`].
///
/// Edge semantics follow the network description contract:
/// - an edge may only reference declared nodes,
/// - a later definition for the same ordered `(from, to)` pair overwrites
///   the earlier one,
/// - an undirected edge is materialized as two directed edges with
///   identical attributes.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    out: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-seeded with another graph's node table.
    ///
    /// Used by transforms that keep topology but replace edge attributes.
    pub fn from_nodes(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes.clone(),
            index: graph.index.clone(),
            out: vec![Vec::new(); graph.nodes.len()],
        }
    }

    /// Declare a node and return its ID.
    ///
    /// Declaring the same name twice is idempotent: the existing ID is
    /// returned and the role is updated in place.
    pub fn add_node(&mut self, name: impl Into<String>, role: Option<NodeRole>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            self.nodes[id.index() as usize].role = role;
            return id;
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.index.insert(name.clone(), id);
        self.nodes.push(Node { id, name, role });
        self.out.push(Vec::new());
        id
    }

    /// Declare an edge between two previously declared nodes.
    ///
    /// Fails with [`ValidationError::UnknownEndpoint`] when either endpoint
    /// was never declared.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        attrs: EdgeAttrs,
        directed: bool,
    ) -> GraphResult<()> {
        let from_id = self.lookup(from, from, to)?;
        let to_id = self.lookup(to, from, to)?;
        self.push_edge(from_id, to_id, attrs);
        if !directed {
            self.push_edge(to_id, from_id, attrs);
        }
        Ok(())
    }

    fn lookup(&self, name: &str, from: &str, to: &str) -> GraphResult<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ValidationError::UnknownEndpoint {
                from: from.to_string(),
                to: to.to_string(),
                missing: name.to_string(),
            })
    }

    /// Declare a directed edge by node ID.
    ///
    /// For callers that already hold IDs from a source graph (see
    /// [`GraphBuilder::from_nodes`]). Fails when either ID is out of range.
    pub fn add_edge_by_id(
        &mut self,
        from: NodeId,
        to: NodeId,
        attrs: EdgeAttrs,
    ) -> GraphResult<()> {
        for id in [from, to] {
            if id.index() as usize >= self.nodes.len() {
                return Err(ValidationError::UnknownEndpoint {
                    from: self.name_or_id(from),
                    to: self.name_or_id(to),
                    missing: self.name_or_id(id),
                });
            }
        }
        self.push_edge(from, to, attrs);
        Ok(())
    }

    fn name_or_id(&self, id: NodeId) -> String {
        self.nodes
            .get(id.index() as usize)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }

    /// Insert or overwrite the edge for an ordered `(from, to)` pair.
    fn push_edge(&mut self, from: NodeId, to: NodeId, attrs: EdgeAttrs) {
        let slot = &mut self.out[from.index() as usize];
        match slot.iter_mut().find(|e| e.to == to) {
            Some(existing) => existing.attrs = attrs,
            None => slot.push(Edge { from, to, attrs }),
        }
    }

    /// Validate attribute values and freeze the graph.
    pub fn build(self) -> GraphResult<Graph> {
        for edge in self.out.iter().flatten() {
            self.check_finite(edge, "weight", edge.attrs.weight)?;
            self.check_finite(edge, "distance", edge.attrs.distance)?;
            self.check_finite(edge, "cost", edge.attrs.cost)?;
            self.check_finite(edge, "capacity", edge.attrs.capacity)?;
        }
        Ok(Graph {
            nodes: self.nodes,
            index: self.index,
            out: self.out,
        })
    }

    fn check_finite(&self, edge: &Edge, attr: &'static str, value: Option<f64>) -> GraphResult<()> {
        match value {
            Some(v) if !v.is_finite() => Err(ValidationError::NonFiniteAttr {
                from: self.nodes[edge.from.index() as usize].name.clone(),
                to: self.nodes[edge.to.index() as usize].name.clone(),
                attr,
                value: v,
            }),
            _ => Ok(()),
        }
    }
}
