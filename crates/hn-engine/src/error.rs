//! Engine error types.

use thiserror::Error;

/// Semantically invalid requests against an otherwise well-formed graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    #[error("Negative weight on edge {from}->{to}: {value}")]
    NegativeWeight {
        from: String,
        to: String,
        value: f64,
    },

    #[error("Negative capacity on edge {from}->{to}: {value}")]
    NegativeCapacity {
        from: String,
        to: String,
        value: f64,
    },

    #[error("Flow source {name} is also a sink")]
    SourceIsSink { name: String },

    #[error("Flow query requires at least one sink")]
    NoSinks,
}

pub type EngineResult<T> = Result<T, GraphError>;
