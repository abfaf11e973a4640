//! The four analysis operations exposed to front ends.
//!
//! Each operation takes a parsed [`NetworkDef`], compiles it, runs the
//! matching engine and shapes the result into the wire response types from
//! hn-project.

use std::collections::BTreeMap;

use hn_dynamic::{reweight_factor, routing_table, SensorSample};
use hn_engine::{max_flow, minimum_spanning_forest, shortest_paths, MstAlgorithm};
use hn_graph::{EdgeValue, Graph};
use hn_project::{
    compile_network, DynamicRoutingResponse, FlowEdgeDef, MaxFlowResponse, MstResponse,
    NetworkDef, NetworkSnapshot, RoutedEdgeDef, RoutedNodeDef, ShortestPathResponse,
};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Dijkstra shortest path between two named nodes.
///
/// An unreachable or unknown target is reported as [`AppError::NoPath`];
/// an unknown source is a graph error from the engine.
pub fn shortest_path(
    def: &NetworkDef,
    source: &str,
    target: &str,
) -> AppResult<ShortestPathResponse> {
    let graph = compile_network(def)?;
    let tree = shortest_paths(&graph, source)?;

    let found = graph
        .node_id(target)
        .and_then(|id| Some((tree.distance(id)?, tree.path(id)?)));
    let (distance, ids) = match found {
        Some(hit) => hit,
        None => {
            return Err(AppError::NoPath {
                target: target.to_string(),
            })
        }
    };

    let path = ids
        .into_iter()
        .map(|id| node_name(&graph, id))
        .collect::<AppResult<Vec<_>>>()?;
    info!(source, target, distance, "shortest path computed");
    Ok(ShortestPathResponse { distance, path })
}

/// Edmonds-Karp maximum flow using the definition's `source` and `sink`
/// fields. Both are required; `sink` may name one node or several.
pub fn max_flow_analysis(def: &NetworkDef) -> AppResult<MaxFlowResponse> {
    let source = def
        .source
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("flow analysis requires a source node".into()))?;
    let sink = def
        .sink
        .as_ref()
        .ok_or_else(|| AppError::InvalidInput("flow analysis requires a sink node".into()))?;

    let graph = compile_network(def)?;
    let result = max_flow(&graph, source, &sink.names())?;

    let flow_paths = result
        .edges
        .iter()
        .map(|e| {
            Ok(FlowEdgeDef {
                path: [node_name(&graph, e.from)?, node_name(&graph, e.to)?],
                flow: e.flow,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;
    info!(source, max_flow = result.value, "max flow computed");
    Ok(MaxFlowResponse {
        max_flow: result.value,
        flow_paths,
    })
}

/// Minimum spanning forest over the undirected cost projection.
pub fn mst_analysis(def: &NetworkDef, algorithm: MstAlgorithm) -> AppResult<MstResponse> {
    let graph = compile_network(def)?;
    let forest = minimum_spanning_forest(&graph, algorithm)?;

    let mst_edges = forest
        .edges
        .iter()
        .map(|&(a, b)| Ok([node_name(&graph, a)?, node_name(&graph, b)?]))
        .collect::<AppResult<Vec<_>>>()?;
    info!(
        ?algorithm,
        total_cost = forest.total_cost,
        "spanning forest computed"
    );
    Ok(MstResponse {
        mst_edges,
        total_cost: forest.total_cost,
    })
}

/// Sensor-driven dynamic routing: reweight the network by the sample's
/// factor, run shortest paths from `source` (falling back to the
/// definition's `source` field) and echo the reweighted network for
/// visualization.
pub fn dynamic_routing(
    def: &NetworkDef,
    sample: &SensorSample,
    source: Option<&str>,
) -> AppResult<DynamicRoutingResponse> {
    let source = source
        .or(def.source.as_deref())
        .ok_or_else(|| AppError::InvalidInput("dynamic routing requires a source node".into()))?;

    let graph = compile_network(def)?;
    let factor = reweight_factor(sample)?;
    let table = routing_table(&graph, sample, source)?;

    let nodes = def
        .nodes
        .iter()
        .map(|n| RoutedNodeDef {
            id: n.id.clone(),
            kind: n.kind.clone(),
            x: n.x.unwrap_or(0.0),
            y: n.y.unwrap_or(0.0),
            distance: table.distances.get(&n.id).copied(),
        })
        .collect();
    let edges = def
        .edges
        .iter()
        .map(|e| {
            let scaled = EdgeValue::PathWeight.resolve(&e.attrs()) * factor;
            RoutedEdgeDef {
                source: e.source.clone(),
                target: e.target.clone(),
                distance: scaled,
                value: scaled,
            }
        })
        .collect();
    let routing_table: BTreeMap<String, f64> = table.distances;

    info!(source, factor, "dynamic routing computed");
    Ok(DynamicRoutingResponse {
        network: NetworkSnapshot { nodes, edges },
        routing_table,
    })
}

fn node_name(graph: &Graph, id: hn_core::NodeId) -> AppResult<String> {
    graph
        .node_name(id)
        .map(str::to_string)
        .ok_or_else(|| AppError::Graph(format!("node id {id:?} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_project::parse_network;

    fn demo_network() -> NetworkDef {
        parse_network(
            r#"{
                "nodes": [
                    {"id": "A", "type": "source", "x": 0, "y": 0},
                    {"id": "B", "x": 1, "y": 0},
                    {"id": "C", "x": 0, "y": 1},
                    {"id": "D", "type": "sink", "x": 1, "y": 1}
                ],
                "edges": [
                    {"source": "A", "target": "B", "weight": 5, "capacity": 3, "directed": true},
                    {"source": "A", "target": "C", "weight": 2, "capacity": 2, "directed": true},
                    {"source": "C", "target": "B", "weight": 1, "capacity": 2, "directed": true},
                    {"source": "B", "target": "D", "weight": 4, "capacity": 4, "directed": true}
                ],
                "source": "A",
                "sink": "D"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn shortest_path_prefers_cheaper_detour() {
        let def = demo_network();
        let response = shortest_path(&def, "A", "D").unwrap();
        assert_eq!(response.path, vec!["A", "C", "B", "D"]);
        assert!((response.distance - 7.0).abs() < 1e-12);
    }

    #[test]
    fn shortest_path_to_unreachable_is_no_path() {
        let mut def = demo_network();
        def.nodes.push(serde_json::from_str(r#"{"id":"island"}"#).unwrap());
        let err = shortest_path(&def, "A", "island").unwrap_err();
        assert!(matches!(err, AppError::NoPath { ref target } if target == "island"));
    }

    #[test]
    fn unknown_target_is_no_path_not_a_crash() {
        let def = demo_network();
        let err = shortest_path(&def, "A", "nope").unwrap_err();
        assert!(matches!(err, AppError::NoPath { .. }));
    }

    #[test]
    fn max_flow_limited_by_source_capacity() {
        let def = demo_network();
        let response = max_flow_analysis(&def).unwrap();
        // A can push 3 + 2 but B->D caps the total at 4.
        assert!((response.max_flow - 4.0).abs() < 1e-12);
        for fe in &response.flow_paths {
            assert!(fe.flow > 0.0);
        }
    }

    #[test]
    fn max_flow_requires_source_and_sink() {
        let mut def = demo_network();
        def.source = None;
        assert!(matches!(
            max_flow_analysis(&def).unwrap_err(),
            AppError::InvalidInput(_)
        ));

        let mut def = demo_network();
        def.sink = None;
        assert!(matches!(
            max_flow_analysis(&def).unwrap_err(),
            AppError::InvalidInput(_)
        ));
    }

    #[test]
    fn mst_connects_all_nodes() {
        let def = demo_network();
        let response = mst_analysis(&def, MstAlgorithm::Kruskal).unwrap();
        assert_eq!(response.mst_edges.len(), 3);
        // weight fallback: 2 (A-C) + 1 (C-B) + 4 (B-D)
        assert!((response.total_cost - 7.0).abs() < 1e-12);
    }

    #[test]
    fn dynamic_routing_scales_distances() {
        let def = demo_network();
        // factor = (|10-8|+1)/(4+1) = 0.6
        let sample = SensorSample::new(10.0, 8.0, 4.0);
        let response = dynamic_routing(&def, &sample, None).unwrap();

        assert!((response.routing_table["D"] - 7.0 * 0.6).abs() < 1e-12);
        let a = response
            .network
            .nodes
            .iter()
            .find(|n| n.id == "A")
            .unwrap();
        assert_eq!(a.distance, Some(0.0));
        let ab = response
            .network
            .edges
            .iter()
            .find(|e| e.source == "A" && e.target == "B")
            .unwrap();
        assert!((ab.distance - 3.0).abs() < 1e-12);
        assert_eq!(ab.distance, ab.value);
    }

    #[test]
    fn dynamic_routing_source_override() {
        let def = demo_network();
        let sample = SensorSample::new(1.0, 1.0, 0.0);
        let response = dynamic_routing(&def, &sample, Some("C")).unwrap();
        assert_eq!(response.routing_table["C"], 0.0);
        assert!(!response.routing_table.contains_key("A"));
    }

    #[test]
    fn dynamic_routing_needs_some_source() {
        let mut def = demo_network();
        def.source = None;
        let err = dynamic_routing(&def, &SensorSample::new(1.0, 1.0, 0.0), None).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
