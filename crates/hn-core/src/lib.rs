//! hn-core: stable foundation for hydronet.
//!
//! Contains:
//! - ids (stable compact IDs for graph objects)
//! - numeric (float tolerances + finiteness checks)
//! - error (shared error type)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HnError, HnResult};
pub use ids::*;
pub use numeric::*;
