//! hn-engine: graph algorithm engines for hydronet.
//!
//! Self-contained, synchronous, CPU-bound computations over the hn-graph
//! model:
//! - Dijkstra single-source shortest paths
//! - Edmonds-Karp maximum flow with multi-sink aggregation
//! - Kruskal/Prim minimum spanning forest
//!
//! Every operation validates its inputs before running, owns its transient
//! structures for the duration of one call, and returns a typed error with
//! no partial output on failure.

pub mod error;
pub mod max_flow;
pub mod mst;
pub mod shortest_path;

pub use error::{EngineResult, GraphError};
pub use max_flow::{max_flow, FlowEdge, MaxFlow};
pub use mst::{minimum_spanning_forest, MstAlgorithm, SpanningForest};
pub use shortest_path::{shortest_paths, ShortestPathTree};
