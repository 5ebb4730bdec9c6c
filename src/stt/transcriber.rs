use crate::error::{LonghandError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One timestamped utterance returned by the transcription API.
///
/// Times are seconds from the start of the uploaded file; the transcript
/// merger shifts them onto the original file's timeline.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Parsed `verbose_json` response for one uploaded file.
///
/// `segments` may be empty even when `text` is not; the caller decides what
/// to do with a segmentless result.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChunkTranscription {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl ChunkTranscription {
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Trait for transcribing an audio file.
///
/// This trait allows swapping implementations (real HTTP client vs mock).
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one audio file.
    ///
    /// # Arguments
    /// * `audio` - Path to the audio file to upload
    ///
    /// # Returns
    /// The parsed transcription, or an error. Request, rejection, and parse
    /// errors are chunk-recoverable; see `LonghandError::is_chunk_recoverable`.
    async fn transcribe(&self, audio: &Path) -> Result<ChunkTranscription>;
}

/// Implement Transcriber for Arc<T> to allow sharing.
#[async_trait]
impl<T: Transcriber> Transcriber for Arc<T> {
    async fn transcribe(&self, audio: &Path) -> Result<ChunkTranscription> {
        (**self).transcribe(audio).await
    }
}

/// Mock transcriber for testing.
///
/// Records the paths it was asked to transcribe and returns queued
/// responses in order; once the queue is empty it returns an empty result.
#[derive(Debug, Default)]
pub struct MockTranscriber {
    calls: Mutex<Vec<PathBuf>>,
    responses: Mutex<VecDeque<Result<ChunkTranscription>>>,
}

impl MockTranscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response built from `(start, end, text)` triples.
    pub fn with_segments(self, segments: &[(f64, f64, &str)]) -> Self {
        let response = ChunkTranscription {
            text: segments
                .iter()
                .map(|(_, _, t)| t.trim())
                .collect::<Vec<_>>()
                .join(" "),
            segments: segments
                .iter()
                .map(|&(start, end, text)| Segment {
                    start,
                    end,
                    text: text.to_string(),
                })
                .collect(),
        };
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a response with full text but no segments.
    pub fn with_text_only(self, text: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(ChunkTranscription {
            text: text.to_string(),
            segments: Vec::new(),
        }));
        self
    }

    /// Queue an error response.
    pub fn with_error(self, error: LonghandError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Paths transcribed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, audio: &Path) -> Result<ChunkTranscription> {
        self.calls.lock().unwrap().push(audio.to_path_buf());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ChunkTranscription::default()))
    }
}
