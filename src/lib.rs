//! longhand - Timestamped transcription for long audio files
//!
//! Splits oversized audio with ffmpeg, transcribes each chunk through a
//! Whisper-compatible HTTP API, and stitches the per-chunk results into one
//! timestamped transcript on the original file's timeline.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod exec;
pub mod split;
pub mod stt;
pub mod timefmt;
pub mod transcript;

// Core seams (external process, remote API)
pub use exec::{CommandExecutor, SystemCommandExecutor};
pub use stt::remote::HttpTranscriber;
pub use stt::transcriber::{ChunkTranscription, MockTranscriber, Segment, Transcriber};

// Run entry point
pub use app::{RunOptions, RunReport, run_transcription};

// Error handling
pub use error::{LonghandError, Result};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.2+abc1234"` when git hash is available, `"0.1.2"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
