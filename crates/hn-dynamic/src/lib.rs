//! hn-dynamic: sensor-driven edge reweighting for hydronet.
//!
//! Takes a base graph plus one external sensor sample and produces a
//! reweighted graph for live routing. Pure and stateless: identical inputs
//! always yield an identical output graph, and the base graph is never
//! touched.

pub mod error;
pub mod reweight;
pub mod routing;
pub mod sensor;

pub use error::{DynamicError, DynamicResult};
pub use reweight::{reweight, reweight_factor};
pub use routing::{routing_table, RoutingTable};
pub use sensor::SensorSample;
