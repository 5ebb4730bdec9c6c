//! Command-line interface for longhand
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Timestamped transcription for long audio files
#[derive(Parser, Debug)]
#[command(
    name = "longhand",
    version,
    about = "Timestamped transcription for long audio files",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Audio file to transcribe
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output transcript path (default: transcription_with_timestamps.txt)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: progress detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Transcription model override (default: whisper-1)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Transcription language (ISO 639-1, e.g. en, de; default: auto-detect)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Transcription endpoint override
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Nominal chunk duration for oversized files. Examples: 600, 600s, 10m
    #[arg(long, value_name = "DURATION", value_parser = parse_chunk_secs)]
    pub chunk_duration: Option<u32>,

    /// Maximum single-upload size in bytes (default: 25 MiB)
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,

    /// Keep chunk files instead of deleting them after the run
    #[arg(long)]
    pub keep_chunks: bool,
}

/// Parse a chunk duration string into seconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (seconds), single-unit (`600s`, `10m`), and compound (`9m30s`).
fn parse_chunk_secs(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let secs = if let Ok(secs) = s.parse::<u64>() {
        secs
    } else {
        humantime::parse_duration(s)
            .map(|d| d.as_secs())
            .map_err(|e| e.to_string())?
    };
    if secs == 0 {
        return Err("chunk duration must be at least one second".to_string());
    }
    u32::try_from(secs).map_err(|_| "chunk duration too large".to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check external dependencies and configuration
    Check,

    /// Configuration helpers
    Config {
        /// Action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print an annotated default configuration template
    Dump,
}
