//! Transcript assembly: offset-adjusted, timestamped output lines.
//!
//! Each chunk's segments are rendered as `"[HH:MM:SS - HH:MM:SS] text"`
//! lines on the original file's timeline and appended to the output file,
//! followed by one blank separator line per chunk.

use crate::error::Result;
use crate::stt::transcriber::Segment;
use crate::timefmt::format_timestamp;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render one transcript line for a segment shifted by `offset` seconds.
///
/// The segment text is trimmed of surrounding whitespace; Whisper pads
/// segment text with a leading space.
pub fn render_segment_line(segment: &Segment, offset: f64) -> String {
    format!(
        "[{} - {}] {}",
        format_timestamp(segment.start + offset),
        format_timestamp(segment.end + offset),
        segment.text.trim()
    )
}

/// Append-only writer for the output transcript.
///
/// The file is opened per append and never truncated, so pre-existing
/// content at the same path is preserved and added to.
pub struct TranscriptWriter {
    path: PathBuf,
}

impl TranscriptWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one chunk's segments, shifted by `offset`, in received order.
    ///
    /// Writes one line per segment plus a trailing blank line, and returns
    /// the rendered lines so the caller can echo them to the console. An
    /// empty segment list writes nothing and does not create the file.
    pub fn append_chunk(&self, segments: &[Segment], offset: f64) -> Result<Vec<String>> {
        if segments.is_empty() {
            return Ok(Vec::new());
        }

        let lines: Vec<String> = segments
            .iter()
            .map(|segment| render_segment_line(segment, offset))
            .collect();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        for line in &lines {
            writeln!(file, "{}", line)?;
        }
        writeln!(file)?;

        Ok(lines)
    }
}
