//! Speech-to-text via a remote transcription API.

pub mod remote;
pub mod transcriber;
