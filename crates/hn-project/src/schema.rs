//! Network description and response payload definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A network description as submitted by an external caller.
///
/// `source`/`sink` are only required for flow queries; other analyses
/// ignore them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub nodes: Vec<NodeDef>,
    pub edges: Vec<EdgeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<SinkDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Layout coordinates; visualization-only, never consulted by engines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub directed: bool,
}

/// A flow query's sink: a single node or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SinkDef {
    One(String),
    Many(Vec<String>),
}

impl SinkDef {
    pub fn names(&self) -> Vec<&str> {
        match self {
            SinkDef::One(name) => vec![name.as_str()],
            SinkDef::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortestPathResponse {
    pub distance: f64,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowEdgeDef {
    /// One reported edge `[u, v]`; not a full source-to-sink path.
    pub path: [String; 2],
    pub flow: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaxFlowResponse {
    pub max_flow: f64,
    pub flow_paths: Vec<FlowEdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MstResponse {
    pub mst_edges: Vec<[String; 2]>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DynamicRoutingResponse {
    pub network: NetworkSnapshot,
    pub routing_table: BTreeMap<String, f64>,
}

/// Reweighted network echo for visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSnapshot {
    pub nodes: Vec<RoutedNodeDef>,
    pub edges: Vec<RoutedEdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutedNodeDef {
    pub id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutedEdgeDef {
    pub source: String,
    pub target: String,
    /// Reweighted path weight.
    pub distance: f64,
    /// Display value; mirrors the reweighted distance.
    pub value: f64,
}
