//! End-to-end transcription flow against fake external collaborators.
//!
//! Exercises the public API the way the binary wires it up, substituting a
//! mock transcriber for the HTTP API and a fake executor for ffmpeg.

use longhand::Config;
use longhand::app::{RunOptions, RunReport, run_transcription};
use longhand::error::{LonghandError, Result};
use longhand::exec::CommandExecutor;
use longhand::stt::transcriber::MockTranscriber;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Stand-in for ffmpeg: records its invocations and emits chunk files.
struct FakeFfmpeg {
    create: Vec<PathBuf>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeFfmpeg {
    fn creating(paths: Vec<PathBuf>) -> Self {
        Self {
            create: paths,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandExecutor for &FakeFfmpeg {
    fn execute(&self, command: &str, args: &[&str]) -> Result<String> {
        assert_eq!(command, "ffmpeg");
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|s| s.to_string()).collect());
        for path in &self.create {
            fs::write(path, b"chunk").unwrap();
        }
        Ok(String::new())
    }
}

struct NoFfmpeg;

impl CommandExecutor for NoFfmpeg {
    fn execute(&self, command: &str, _args: &[&str]) -> Result<String> {
        panic!("unexpected external command: {}", command);
    }
}

fn quiet() -> RunOptions {
    RunOptions {
        quiet: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn small_file_is_transcribed_without_splitting() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("interview.mp3");
    fs::write(&input, vec![0u8; 1024]).unwrap();
    let output = dir.path().join("interview.txt");

    let transcriber = MockTranscriber::new().with_segments(&[
        (0.0, 4.5, " Welcome to the interview."),
        (4.5, 9.0, " Thanks for having me."),
    ]);

    let report = run_transcription(
        &Config::default(),
        &input,
        &output,
        &quiet(),
        &transcriber,
        NoFfmpeg,
    )
    .await
    .unwrap();

    assert_eq!(report, RunReport { chunks: 1, skipped: 0 });
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "[00:00:00 - 00:00:04] Welcome to the interview.\n\
         [00:00:04 - 00:00:09] Thanks for having me.\n\n"
    );
}

#[tokio::test]
async fn oversized_file_is_split_and_offsets_accumulate() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("lecture.mp3");
    fs::write(&input, vec![0u8; 1024]).unwrap();
    let output = dir.path().join("lecture.txt");
    let chunks = vec![
        dir.path().join("lecture_chunk_000.mp3"),
        dir.path().join("lecture_chunk_001.mp3"),
    ];

    let mut config = Config::default();
    config.transcribe.max_upload_bytes = 512;
    config.transcribe.chunk_seconds = 600;

    let ffmpeg = FakeFfmpeg::creating(chunks.clone());
    let transcriber = MockTranscriber::new()
        .with_segments(&[(0.0, 30.0, " Part one.")])
        .with_segments(&[(12.0, 40.0, " Part two.")]);

    let report = run_transcription(&config, &input, &output, &quiet(), &transcriber, &ffmpeg)
        .await
        .unwrap();

    assert_eq!(report, RunReport { chunks: 2, skipped: 0 });

    // ffmpeg was invoked once with stream-copy segmentation
    let calls = ffmpeg.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains(&"segment".to_string()));
    assert!(calls[0].contains(&"600".to_string()));
    assert!(calls[0].contains(&"copy".to_string()));

    // Chunks were transcribed in lexical order
    assert_eq!(transcriber.calls(), chunks);

    // Chunk 2 lines carry the 600-second nominal offset
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "[00:00:00 - 00:00:30] Part one.\n\n[00:10:12 - 00:10:40] Part two.\n\n"
    );

    // Chunk files were cleaned up; the input survives
    for chunk in &chunks {
        assert!(!chunk.exists());
    }
    assert!(input.exists());
}

#[tokio::test]
async fn rejected_chunk_is_reported_but_does_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("podcast.mp3");
    fs::write(&input, vec![0u8; 1024]).unwrap();
    let output = dir.path().join("podcast.txt");
    let chunks = vec![
        dir.path().join("podcast_chunk_000.mp3"),
        dir.path().join("podcast_chunk_001.mp3"),
        dir.path().join("podcast_chunk_002.mp3"),
    ];

    let mut config = Config::default();
    config.transcribe.max_upload_bytes = 512;

    let ffmpeg = FakeFfmpeg::creating(chunks);
    let transcriber = MockTranscriber::new()
        .with_segments(&[(0.0, 5.0, " Intro.")])
        .with_error(LonghandError::TranscriptionRejected {
            status: 500,
            body: "server exploded".to_string(),
        })
        .with_segments(&[(0.0, 5.0, " Outro.")]);

    let report = run_transcription(&config, &input, &output, &quiet(), &transcriber, &ffmpeg)
        .await
        .unwrap();

    assert_eq!(report, RunReport { chunks: 3, skipped: 1 });
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "[00:00:00 - 00:00:05] Intro.\n\n[00:20:00 - 00:20:05] Outro.\n\n"
    );
}

#[tokio::test]
async fn segmentless_response_leaves_no_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("memo.mp3");
    fs::write(&input, vec![0u8; 64]).unwrap();
    let output = dir.path().join("memo.txt");

    let transcriber = MockTranscriber::new().with_text_only("a quick voice memo");
    let report = run_transcription(
        &Config::default(),
        &input,
        &output,
        &quiet(),
        &transcriber,
        NoFfmpeg,
    )
    .await
    .unwrap();

    assert_eq!(report, RunReport { chunks: 1, skipped: 1 });
    assert!(!output.exists());
}

#[tokio::test]
async fn repeated_runs_append_to_the_same_transcript() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("memo.mp3");
    fs::write(&input, vec![0u8; 64]).unwrap();
    let output = dir.path().join("memo.txt");

    for text in [" First run.", " Second run."] {
        let transcriber = MockTranscriber::new().with_segments(&[(0.0, 2.0, text)]);
        run_transcription(
            &Config::default(),
            &input,
            &output,
            &quiet(),
            &transcriber,
            NoFfmpeg,
        )
        .await
        .unwrap();
    }

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "[00:00:00 - 00:00:02] First run.\n\n[00:00:00 - 00:00:02] Second run.\n\n"
    );
}
