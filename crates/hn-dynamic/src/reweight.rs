//! The reweighting transform itself.

use hn_core::ensure_finite;
use hn_graph::{EdgeAttrs, EdgeValue, Graph, GraphBuilder};
use tracing::debug;

use crate::error::{DynamicError, DynamicResult};
use crate::sensor::SensorSample;

/// Scale factor applied to every resolved edge weight:
/// `(|pressure1 - pressure2| + 1) / (flowRate + 1)`.
pub fn reweight_factor(sample: &SensorSample) -> DynamicResult<f64> {
    ensure_finite(sample.pressure1, "pressure1")?;
    ensure_finite(sample.pressure2, "pressure2")?;
    ensure_finite(sample.flow_rate, "flowRate")?;
    if sample.flow_rate == -1.0 {
        return Err(DynamicError::DegenerateSample {
            flow_rate: sample.flow_rate,
        });
    }
    let factor = ((sample.pressure1 - sample.pressure2).abs() + 1.0) / (sample.flow_rate + 1.0);
    if !factor.is_finite() {
        return Err(DynamicError::NonFiniteFactor { factor });
    }
    Ok(factor)
}

/// Produce a reweighted copy of `base`: same nodes, same topology, every
/// edge's resolved path weight multiplied by the sample's factor. Cost and
/// capacity attributes are carried through untouched.
pub fn reweight(base: &Graph, sample: &SensorSample) -> DynamicResult<Graph> {
    let factor = reweight_factor(sample)?;

    let mut builder = GraphBuilder::from_nodes(base);
    for edge in base.edges() {
        let scaled = EdgeValue::PathWeight.resolve(&edge.attrs) * factor;
        let attrs = EdgeAttrs {
            weight: Some(scaled),
            distance: None,
            cost: edge.attrs.cost,
            capacity: edge.attrs.capacity,
        };
        // Base adjacency already has both directions of undirected edges.
        builder.add_edge_by_id(edge.from, edge.to, attrs)?;
    }
    let graph = builder.build()?;
    debug!(factor, edges = graph.edge_count(), "graph reweighted");
    Ok(graph)
}
