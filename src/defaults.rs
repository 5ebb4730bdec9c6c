//! Default configuration constants for longhand.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default transcription API endpoint.
///
/// Any OpenAI-compatible `/audio/transcriptions` endpoint works; point
/// `api.url` (or `LONGHAND_API_URL`) at a self-hosted server to use one.
pub const API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Default transcription model identifier sent in the multipart request.
pub const MODEL: &str = "whisper-1";

/// Response format requested from the API.
///
/// `verbose_json` is the only format that carries per-segment timestamps,
/// which the transcript merger needs for offset adjustment.
pub const RESPONSE_FORMAT: &str = "verbose_json";

/// Maximum size of a single upload in bytes (25 MiB).
///
/// Files above this are split into chunks before transcription. 25 MiB is
/// the documented per-request limit of the Whisper API.
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// Nominal chunk duration in seconds (10 minutes).
///
/// Used both as the ffmpeg segment length and as the per-chunk time offset
/// advance. The final chunk is usually shorter than this; offsets are still
/// advanced by the nominal value, so its timestamps can drift — see the
/// known-approximation note in DESIGN.md.
pub const CHUNK_SECONDS: u32 = 600;

/// Filename infix inserted between the input stem and the chunk number.
///
/// A 30 MiB `talk.mp3` splits into `talk_chunk_000.mp3`, `talk_chunk_001.mp3`,
/// and so on. Zero-padded numbering keeps lexical order chronological.
pub const CHUNK_INFIX: &str = "_chunk_";

/// Default output filename when no output path is given on the command line.
pub const OUTPUT_FILENAME: &str = "transcription_with_timestamps.txt";

/// External tool used to split oversized audio.
pub const SPLIT_TOOL: &str = "ffmpeg";
