use thiserror::Error;

pub type HnResult<T> = Result<T, HnError>;

/// Cross-crate error cases that do not belong to any one layer.
#[derive(Error, Debug)]
pub enum HnError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
