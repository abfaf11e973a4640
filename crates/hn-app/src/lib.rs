//! Shared analysis service layer for hydronet.
//!
//! Front ends (CLI today, an HTTP transport tomorrow) call these
//! operations with a parsed network description and get back wire-shaped
//! response payloads; every backend failure is folded into [`AppError`].

pub mod analysis;
pub mod error;

pub use analysis::{dynamic_routing, max_flow_analysis, mst_analysis, shortest_path};
pub use error::{AppError, AppResult};
