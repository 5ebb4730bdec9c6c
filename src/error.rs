//! Error types for longhand.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LonghandError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Input errors
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    // Splitting errors
    #[error("Split tool not found: {tool}")]
    SplitToolNotFound { tool: String },

    #[error("Audio splitting failed: {message}")]
    SplitFailed { message: String },

    #[error("No chunk files were produced in {dir}")]
    NoChunksProduced { dir: String },

    // Transcription errors (per-chunk, recoverable)
    #[error("Transcription request failed: {message}")]
    TranscriptionRequest { message: String },

    #[error("Transcription rejected with HTTP status {status}: {body}")]
    TranscriptionRejected { status: u16, body: String },

    #[error("Failed to parse transcription response: {message}")]
    ResponseParse { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl LonghandError {
    /// Whether this error affects only the current chunk.
    ///
    /// The orchestrator reports a recoverable error and moves on to the next
    /// chunk; everything else aborts the run with exit code 1.
    pub fn is_chunk_recoverable(&self) -> bool {
        matches!(
            self,
            LonghandError::TranscriptionRequest { .. }
                | LonghandError::TranscriptionRejected { .. }
                | LonghandError::ResponseParse { .. }
        )
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, LonghandError>;
