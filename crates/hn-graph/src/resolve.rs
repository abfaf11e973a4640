//! Per-consumer edge attribute resolution.
//!
//! Every engine reads edge attributes through one of these policies, each
//! with a fixed, documented precedence list. The fallback for a fully
//! undeclared edge is always 1.

use crate::graph::EdgeAttrs;

/// Which numeric value an engine wants from an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeValue {
    /// Shortest-path weight: `weight` → `distance` → `cost` → 1.
    PathWeight,
    /// Flow capacity: `capacity` → `weight` → 1.
    FlowCapacity,
    /// Spanning-tree cost: `cost` → `weight` → 1.
    TreeCost,
}

impl EdgeValue {
    /// Resolve this policy against a set of raw attributes.
    pub fn resolve(self, attrs: &EdgeAttrs) -> f64 {
        match self {
            EdgeValue::PathWeight => attrs
                .weight
                .or(attrs.distance)
                .or(attrs.cost)
                .unwrap_or(1.0),
            EdgeValue::FlowCapacity => attrs.capacity.or(attrs.weight).unwrap_or(1.0),
            EdgeValue::TreeCost => attrs.cost.or(attrs.weight).unwrap_or(1.0),
        }
    }
}
