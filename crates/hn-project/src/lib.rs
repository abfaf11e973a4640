//! hn-project: canonical network description format.
//!
//! The JSON wire format the analysis operations consume and produce:
//! node/edge definitions in, response payloads out, plus compilation of a
//! definition into an hn-graph [`hn_graph::Graph`].

pub mod compile;
pub mod schema;

pub use compile::compile_network;
pub use schema::*;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] hn_graph::ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a network description from a JSON file.
pub fn load_network(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    parse_network(&content)
}

/// Parse a network description from a JSON string.
pub fn parse_network(content: &str) -> ProjectResult<NetworkDef> {
    Ok(serde_json::from_str(content)?)
}
