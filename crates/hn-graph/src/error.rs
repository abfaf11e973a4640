//! Graph construction and validation errors.

/// Structural errors raised while building a graph from its declared
/// node and edge lists.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Edge {from}->{to} references undefined node {missing}")]
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Non-finite {attr} on edge {from}->{to}: {value}")]
    NonFiniteAttr {
        from: String,
        to: String,
        attr: &'static str,
        value: f64,
    },
}

pub type GraphResult<T> = Result<T, ValidationError>;
