//! Compilation of a network description into a validated graph.

use hn_graph::{EdgeAttrs, Graph, GraphBuilder, NodeRole};

use crate::schema::{EdgeDef, NetworkDef};
use crate::ProjectResult;

/// Build an immutable [`Graph`] from a network description.
///
/// Node `type` strings map onto informational roles; unknown strings are
/// simply carried without a role. Edge attribute resolution stays raw here:
/// the engines decide precedence, not the schema.
pub fn compile_network(def: &NetworkDef) -> ProjectResult<Graph> {
    let mut builder = GraphBuilder::new();
    for node in &def.nodes {
        builder.add_node(&node.id, role_from(node.kind.as_deref()));
    }
    for edge in &def.edges {
        builder.add_edge(&edge.source, &edge.target, edge.attrs(), edge.directed)?;
    }
    Ok(builder.build()?)
}

impl EdgeDef {
    /// Raw attribute view of this definition for the graph layer.
    pub fn attrs(&self) -> EdgeAttrs {
        EdgeAttrs {
            weight: self.weight,
            distance: self.distance,
            cost: self.cost,
            capacity: self.capacity,
        }
    }
}

fn role_from(kind: Option<&str>) -> Option<NodeRole> {
    match kind? {
        "source" | "reservoir" => Some(NodeRole::Source),
        "sink" | "consumer" => Some(NodeRole::Sink),
        "junction" => Some(NodeRole::Junction),
        _ => None,
    }
}
