//! Error types for lockbench

use std::io;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::Config("--threads must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: --threads must be at least 1"
        );

        let err = BenchError::Input("expected an integer, got 'abc'".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected an integer, got 'abc'");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: BenchError = io_err.into();
        assert!(matches!(err, BenchError::Io(_)));
    }
}
