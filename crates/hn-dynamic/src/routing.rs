//! Live routing table: reweight, then shortest paths.

use std::collections::BTreeMap;

use hn_engine::shortest_paths;
use hn_graph::Graph;

use crate::error::DynamicResult;
use crate::reweight::reweight;
use crate::sensor::SensorSample;

/// Name-keyed distance map over the reweighted graph; unreachable nodes
/// are absent. BTreeMap keeps the output order stable.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingTable {
    pub source: String,
    pub distances: BTreeMap<String, f64>,
}

/// Build the live routing table for `source` under the given sensor sample.
pub fn routing_table(
    base: &Graph,
    sample: &SensorSample,
    source: &str,
) -> DynamicResult<RoutingTable> {
    let dynamic = reweight(base, sample)?;
    let tree = shortest_paths(&dynamic, source)?;

    let mut distances = BTreeMap::new();
    for node in dynamic.nodes() {
        if let Some(d) = tree.distance(node.id) {
            distances.insert(node.name.clone(), d);
        }
    }

    Ok(RoutingTable {
        source: source.to_string(),
        distances,
    })
}
