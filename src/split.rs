//! Chunk planning and ffmpeg-based audio splitting.
//!
//! Files above the upload size limit are cut into fixed-length segments with
//! ffmpeg's stream-copy segment muxer. The zero-padded `%03d` numbering makes
//! lexical filename order equal chronological order, which the orchestrator
//! relies on when accumulating time offsets.

use crate::defaults;
use crate::error::{LonghandError, Result};
use crate::exec::CommandExecutor;
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a file of `file_size` bytes must be split before upload.
pub fn needs_splitting(file_size: u64, max_bytes: u64) -> bool {
    file_size > max_bytes
}

/// Naming scheme for the chunk files of one input.
///
/// Chunks land next to the input file as `<stem>_chunk_NNN.<ext>`. The
/// extension is carried over from the input so the stream-copy output stays
/// in its original container.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkPlan {
    pub dir: PathBuf,
    pub prefix: String,
    pub extension: String,
}

impl ChunkPlan {
    pub fn for_input(input: &Path) -> Self {
        let dir = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        let extension = input
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mp3".to_string());
        Self {
            dir,
            prefix: format!("{}{}", stem, defaults::CHUNK_INFIX),
            extension,
        }
    }

    /// The ffmpeg output pattern, e.g. `/audio/talk_chunk_%03d.mp3`.
    fn output_pattern(&self) -> PathBuf {
        self.dir
            .join(format!("{}%03d.{}", self.prefix, self.extension))
    }

    /// Collect produced chunk files, sorted by name.
    fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut chunks: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let name = entry.file_name();
                let name = name.to_str()?;
                let suffix = format!(".{}", self.extension);
                if name.starts_with(&self.prefix) && name.ends_with(&suffix) {
                    Some(entry.path())
                } else {
                    None
                }
            })
            .collect();
        chunks.sort();
        Ok(chunks)
    }
}

/// Splits oversized audio into sequentially numbered chunk files.
pub struct AudioSplitter<E: CommandExecutor> {
    executor: E,
}

impl<E: CommandExecutor> AudioSplitter<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Split `input` into chunks of `chunk_seconds` nominal length.
    ///
    /// Returns the produced chunk paths in chronological (lexical) order.
    ///
    /// # Errors
    ///
    /// Fatal for the whole run: `SplitToolNotFound` or `SplitFailed` when
    /// ffmpeg cannot run or exits non-zero, `NoChunksProduced` when it exits
    /// zero without emitting any chunk files.
    pub fn split(&self, input: &Path, chunk_seconds: u32) -> Result<Vec<PathBuf>> {
        let plan = ChunkPlan::for_input(input);
        let input_arg = input.to_string_lossy();
        let pattern = plan.output_pattern();
        let pattern_arg = pattern.to_string_lossy();
        let segment_time = chunk_seconds.to_string();

        self.executor.execute(
            defaults::SPLIT_TOOL,
            &[
                "-i",
                &input_arg,
                "-f",
                "segment",
                "-segment_time",
                &segment_time,
                "-c",
                "copy",
                &pattern_arg,
            ],
        )?;

        let chunks = plan.collect()?;
        if chunks.is_empty() {
            return Err(LonghandError::NoChunksProduced {
                dir: plan.dir.display().to_string(),
            });
        }
        Ok(chunks)
    }
}
