//! External command execution with a testable seam.
//!
//! The splitter shells out to ffmpeg; the `CommandExecutor` trait keeps that
//! boundary mockable so the rest of the program can be tested without media
//! tools installed.

use crate::error::{LonghandError, Result};
use std::process::Command;

/// Trait for executing system commands.
///
/// Object-safe, Send + Sync for use behind trait objects.
/// Enables testability by allowing mock implementations.
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with arguments, waiting for it to finish.
    ///
    /// Returns the stdout of the command on success.
    /// Returns an error if the command fails or is not found.
    fn execute(&self, command: &str, args: &[&str]) -> Result<String>;
}

/// Production command executor using std::process::Command.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, command: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(command).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LonghandError::SplitToolNotFound {
                    tool: command.to_string(),
                }
            } else {
                LonghandError::SplitFailed {
                    message: format!("Failed to execute {}: {}", command, e),
                }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LonghandError::SplitFailed {
                message: format!(
                    "{} failed with status {:?}: {}",
                    command,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
