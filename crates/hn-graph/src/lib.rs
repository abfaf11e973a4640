//! hn-graph: graph/model layer for hydronet.
//!
//! Provides:
//! - Attributed directed graph data structures (Node, Edge, Graph)
//! - Incremental graph builder with validation
//! - Per-consumer edge attribute resolution policies
//! - Undirected projection with connected-component enumeration
//!
//! # Example
//!
//! ```
//! use hn_graph::{EdgeAttrs, GraphBuilder, NodeRole};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_node("reservoir", Some(NodeRole::Source));
//! builder.add_node("plant", None);
//! builder
//!     .add_edge("reservoir", "plant", EdgeAttrs::weight(3.0), true)
//!     .unwrap();
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod projection;
pub mod resolve;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphResult, ValidationError};
pub use graph::{Edge, EdgeAttrs, Graph, Node, NodeRole};
pub use projection::{UndirectedEdge, UndirectedProjection};
pub use resolve::EdgeValue;
