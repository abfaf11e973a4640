//! Errors of the dynamic weight transform.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynamicError {
    /// flow rate of -1 would divide by zero in the reweight factor.
    #[error("Degenerate sensor sample: flow rate {flow_rate} yields a zero divisor")]
    DegenerateSample { flow_rate: f64 },

    #[error("Reweight factor is not finite: {factor}")]
    NonFiniteFactor { factor: f64 },

    #[error(transparent)]
    Core(#[from] hn_core::HnError),

    #[error("Graph error: {0}")]
    Graph(#[from] hn_engine::GraphError),

    #[error("Validation error: {0}")]
    Validation(#[from] hn_graph::ValidationError),
}

pub type DynamicResult<T> = Result<T, DynamicError>;
