use std::io;

/// Errors that can occur during pair-finder operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid token '{token}' at position {position}: expected {expected}")]
    InvalidToken {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for pair-finder operations
pub type Result<T> = std::result::Result<T, Error>;
