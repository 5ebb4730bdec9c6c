use anyhow::Result;
use clap::{CommandFactory, Parser};
use longhand::app::{RunOptions, run_transcription};
use longhand::cli::{Cli, Commands, ConfigAction};
use longhand::config::Config;
use longhand::defaults;
use longhand::exec::SystemCommandExecutor;
use longhand::stt::remote::HttpTranscriber;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            let Some(input) = cli.input.clone() else {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                std::process::exit(1);
            };
            run_main_command(&cli, input).await;
        }
        Some(Commands::Check) => {
            let config = load_config(&cli)?;
            longhand::diagnostics::check_dependencies(&config);
        }
        Some(Commands::Config {
            action: ConfigAction::Dump,
        }) => {
            print!("{}", Config::dump_template());
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "longhand",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Run the transcription command; all errors surface here as exit code 1.
///
/// Per-chunk transcription failures are reported inside the run and leave
/// the exit code untouched.
async fn run_main_command(cli: &Cli, input: PathBuf) {
    let config = match load_config(cli) {
        Ok(config) => apply_overrides(config, cli),
        Err(e) => fail(e),
    };
    let key = match config.require_key() {
        Ok(key) => key.to_string(),
        Err(e) => fail(e),
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_FILENAME));
    let options = RunOptions {
        keep_chunks: cli.keep_chunks,
        quiet: cli.quiet,
        verbosity: cli.verbose,
    };
    let transcriber = HttpTranscriber::new(&config.api, &key);

    match run_transcription(
        &config,
        &input,
        &output,
        &options,
        &transcriber,
        SystemCommandExecutor::new(),
    )
    .await
    {
        Ok(report) => {
            if !cli.quiet && report.skipped > 0 {
                eprintln!(
                    "{}",
                    format!(
                        "{} of {} chunks produced no transcript output",
                        report.skipped, report.chunks
                    )
                    .yellow()
                );
            }
        }
        Err(e) => fail(e),
    }
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/longhand/config.toml)
/// 3. Built-in defaults
/// Environment variable overrides apply on top of all three.
fn load_config(cli: &Cli) -> Result<Config, longhand::LonghandError> {
    let config = if let Some(path) = cli.config.as_deref() {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };
    Ok(config.with_env_overrides())
}

/// Apply CLI overrides on top of the loaded configuration.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(model) = &cli.model {
        config.api.model = model.clone();
    }
    if let Some(language) = &cli.language {
        config.api.language = Some(language.clone());
    }
    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
    }
    if let Some(secs) = cli.chunk_duration {
        config.transcribe.chunk_seconds = secs;
    }
    if let Some(bytes) = cli.max_size {
        config.transcribe.max_upload_bytes = bytes;
    }
    config
}

/// Report a fatal error and exit with status 1.
fn fail(error: longhand::LonghandError) -> ! {
    eprintln!("{}", format!("Error: {}", error).red());
    std::process::exit(1);
}
