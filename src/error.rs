use thiserror::Error;

/// Errors surfaced by tree operations.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("child index {index} out of range for node with {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tree document: expected {expected}, found {found}")]
    InvalidNode {
        expected: &'static str,
        found: &'static str,
    },
}

pub type TreeResult<T> = Result<T, TreeError>;
