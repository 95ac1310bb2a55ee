use thiserror::Error;

use crate::fixtures::Value;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("ERROR: {strategy} failed for the test sequence of size {size}!")]
    Mismatch {
        strategy: &'static str,
        size: usize,
        expected: Vec<Value>,
        actual: Vec<Value>,
    },
    #[error("ERROR: results differ between strategies for size {size}")]
    Divergence { size: usize },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
