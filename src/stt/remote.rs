//! HTTP client for the remote transcription API.
//!
//! Uploads an audio file as a multipart POST (model, response format,
//! optional language, file payload) authenticated with a bearer credential,
//! and parses the `verbose_json` response into `ChunkTranscription`.

use crate::config::ApiConfig;
use crate::defaults;
use crate::error::{LonghandError, Result};
use crate::stt::transcriber::{ChunkTranscription, Transcriber};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Transcriber backed by an OpenAI-compatible `/audio/transcriptions` endpoint.
pub struct HttpTranscriber {
    client: reqwest::Client,
    url: String,
    key: String,
    model: String,
    language: Option<String>,
}

impl HttpTranscriber {
    /// Create a transcriber from API configuration and a credential.
    pub fn new(api: &ApiConfig, key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: api.url.clone(),
            key: key.to_string(),
            model: api.model.clone(),
            language: api.language.clone(),
        }
    }

    fn request_error(e: impl std::fmt::Display) -> LonghandError {
        LonghandError::TranscriptionRequest {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &Path) -> Result<ChunkTranscription> {
        let bytes = tokio::fs::read(audio).await?;
        let filename = audio
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str(content_type_for(audio))
            .map_err(Self::request_error)?;

        let mut form = Form::new()
            .text("model", self.model.clone())
            .text("response_format", defaults::RESPONSE_FORMAT)
            .part("file", part);
        if let Some(lang) = &self.language {
            form = form.text("language", lang.clone());
        }

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.key)
            .multipart(form)
            .send()
            .await
            .map_err(Self::request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(LonghandError::TranscriptionRejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(Self::request_error)?;
        serde_json::from_str(&body).map_err(|e| LonghandError::ResponseParse {
            message: e.to_string(),
        })
    }
}

/// MIME type for an audio file, derived from its extension.
///
/// Unknown extensions fall back to `application/octet-stream`; the API keys
/// format detection off the payload anyway.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp3" | "mpga" | "mpeg") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a" | "mp4") => "audio/mp4",
        Some("ogg" | "oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}
