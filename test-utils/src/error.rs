use thiserror::Error;

/// Failures while setting up a test data directory.
#[derive(Error, Debug)]
pub enum TestError {
    #[error("failed to set up test data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode fixture JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
