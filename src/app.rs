//! Transcription run entry point.
//!
//! Orchestrates the complete flow:
//! validate input → size check → split if oversized → transcribe each chunk
//! → stitch offset-adjusted lines into the output transcript.

use crate::config::Config;
use crate::error::{LonghandError, Result};
use crate::exec::CommandExecutor;
use crate::split::{AudioSplitter, needs_splitting};
use crate::stt::transcriber::Transcriber;
use crate::transcript::TranscriptWriter;
use std::fs;
use std::path::{Path, PathBuf};

/// Run-level options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Keep chunk files on disk after the run.
    pub keep_chunks: bool,
    /// Suppress status messages.
    pub quiet: bool,
    /// Verbosity level (0=default, 1=progress detail).
    pub verbosity: u8,
}

/// Summary of a completed run.
///
/// A run that completes is a success even when individual chunks failed;
/// failures are already reported and only the summary counts remain.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Chunks processed (1 for an unsplit file).
    pub chunks: usize,
    /// Chunks that contributed no transcript output (failed call or
    /// segmentless response).
    pub skipped: usize,
}

/// Transcribe `input` into `output`.
///
/// Splitting, transcription, and stitching are strictly sequential; the
/// running time offset advances by the nominal chunk duration after each
/// chunk. Chunk files are deleted best-effort once the loop finishes.
///
/// # Errors
///
/// Fatal errors (missing input, split failure, zero chunks, I/O on the
/// output file) abort the run. A failed transcription call is reported and
/// skipped, and does not produce an error.
pub async fn run_transcription<E: CommandExecutor>(
    config: &Config,
    input: &Path,
    output: &Path,
    options: &RunOptions,
    transcriber: &dyn Transcriber,
    executor: E,
) -> Result<RunReport> {
    if !input.exists() {
        return Err(LonghandError::InputNotFound {
            path: input.display().to_string(),
        });
    }

    let file_size = fs::metadata(input)?.len();
    if !options.quiet {
        eprintln!("Input file size: {} bytes", file_size);
    }

    let writer = TranscriptWriter::new(output);
    let mut report = RunReport {
        chunks: 0,
        skipped: 0,
    };

    if !needs_splitting(file_size, config.transcribe.max_upload_bytes) {
        report.chunks = 1;
        if !process_chunk(transcriber, &writer, input, 0.0, options).await? {
            report.skipped += 1;
        }
    } else {
        if !options.quiet {
            eprintln!(
                "File size exceeds the maximum upload limit of {} bytes.",
                config.transcribe.max_upload_bytes
            );
            eprintln!(
                "Splitting audio into {}-second chunks...",
                config.transcribe.chunk_seconds
            );
        }

        let splitter = AudioSplitter::new(executor);
        let chunks = splitter.split(input, config.transcribe.chunk_seconds)?;
        report.chunks = chunks.len();
        if options.verbosity >= 1 {
            eprintln!("Produced {} chunk files.", chunks.len());
        }

        let mut offset = 0.0_f64;
        for chunk in &chunks {
            if !process_chunk(transcriber, &writer, chunk, offset, options).await? {
                report.skipped += 1;
            }
            // Nominal duration, not the chunk's measured duration; the final
            // (short) chunk inherits the full advance.
            offset += f64::from(config.transcribe.chunk_seconds);
        }

        if !options.keep_chunks {
            remove_chunks(&chunks, options.quiet);
        }
    }

    if !options.quiet {
        eprintln!("All transcriptions saved to {}", output.display());
    }
    Ok(report)
}

/// Transcribe one chunk and append its lines at `offset`.
///
/// Returns `Ok(true)` when the chunk produced transcript output, `Ok(false)`
/// when it was skipped (failed call or segmentless response). Only errors
/// outside the per-chunk contract (e.g. output file I/O) propagate.
async fn process_chunk(
    transcriber: &dyn Transcriber,
    writer: &TranscriptWriter,
    chunk: &Path,
    offset: f64,
    options: &RunOptions,
) -> Result<bool> {
    let result = match transcriber.transcribe(chunk).await {
        Ok(result) => result,
        Err(e) if e.is_chunk_recoverable() => {
            eprintln!("Failed to transcribe {}: {}", chunk.display(), e);
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    if !result.has_segments() {
        // Degraded path: no timestamps to stitch, surface the raw text on
        // the console and leave the output file untouched.
        eprintln!("No transcription segments found in the response.");
        if !result.text.is_empty() {
            println!("Full transcription:");
            println!("{}", result.text);
        }
        return Ok(false);
    }

    let lines = writer.append_chunk(&result.segments, offset)?;
    if !options.quiet {
        eprintln!("Transcription for {}:", chunk.display());
        for line in &lines {
            println!("{}", line);
        }
    }
    Ok(true)
}

/// Delete chunk files, best-effort; a missing file is not an error.
fn remove_chunks(chunks: &[PathBuf], quiet: bool) {
    for chunk in chunks {
        match fs::remove_file(chunk) {
            Ok(()) => {
                if !quiet {
                    eprintln!("Deleted chunk file: {}", chunk.display());
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                eprintln!("Failed to delete chunk file {}: {}", chunk.display(), e);
            }
        }
    }
}
