//! Command bridge to the tribe CLI.
//!
//! Turns a resolved tool call into one external process invocation and
//! captures its combined output. The bridge never times out and never
//! retries; a hung tribe command stalls the server until it exits.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::error::{Result, TribeError};

/// Bridge from tool calls to tribe CLI invocations.
#[derive(Debug, Clone)]
pub struct CommandBridge {
    program: PathBuf,
}

impl CommandBridge {
    /// Resolve the tribe executable.
    ///
    /// An explicit override wins; otherwise the standard install location
    /// `$HOME/.tribe/bin/tribe` is used when it exists, falling back to the
    /// bare name `tribe` resolved via `PATH` at spawn time.
    pub fn resolve(override_path: Option<PathBuf>) -> Self {
        let program = override_path.unwrap_or_else(default_program);
        Self { program }
    }

    /// The executable this bridge will spawn.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run tribe with the given arguments and return its trimmed combined
    /// stdout/stderr.
    ///
    /// Launch failures and non-zero exits come back as errors whose display
    /// text the dispatcher folds into the tool result; they never tear down
    /// the server.
    pub async fn run(&self, args: &[String]) -> Result<String> {
        debug!(program = %self.program.display(), ?args, "running tribe");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| TribeError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(TribeError::CommandFailed {
                program: self.program.display().to_string(),
                status: output.status,
            });
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text.trim().to_string())
    }
}

fn default_program() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let installed = Path::new(&home).join(".tribe").join("bin").join("tribe");
        if installed.exists() {
            return installed;
        }
    }
    PathBuf::from("tribe")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let bridge = CommandBridge::resolve(Some(PathBuf::from("/opt/tribe/tribe")));
        assert_eq!(bridge.program(), Path::new("/opt/tribe/tribe"));
    }

    #[test]
    fn default_resolution_prefers_local_install() {
        let home = tempfile::tempdir().unwrap();
        let bin = home.path().join(".tribe").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("tribe"), b"#!/bin/sh\n").unwrap();

        let saved = std::env::var_os("HOME");
        std::env::set_var("HOME", home.path());
        let resolved = default_program();
        match saved {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        assert_eq!(resolved, bin.join("tribe"));
    }

    #[test]
    fn default_resolution_falls_back_to_path_lookup() {
        let home = tempfile::tempdir().unwrap();

        let saved = std::env::var_os("HOME");
        std::env::set_var("HOME", home.path());
        let resolved = default_program();
        match saved {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        assert_eq!(resolved, PathBuf::from("tribe"));
    }

    #[tokio::test]
    async fn run_captures_trimmed_output() {
        let bridge = CommandBridge::resolve(Some(PathBuf::from("echo")));
        let out = bridge
            .run(&["hello".to_string(), "world".to_string()])
            .await
            .unwrap();
        assert_eq!(out, "hello world");
    }

    #[tokio::test]
    async fn run_reports_non_zero_exit() {
        let bridge = CommandBridge::resolve(Some(PathBuf::from("false")));
        let err = bridge.run(&[]).await.unwrap_err();
        assert!(matches!(err, TribeError::CommandFailed { .. }));
        assert!(err.to_string().contains("false exited with"));
    }

    #[tokio::test]
    async fn run_reports_launch_failure() {
        let bridge = CommandBridge::resolve(Some(PathBuf::from("/nonexistent/tribe-bin")));
        let err = bridge.run(&[]).await.unwrap_err();
        assert!(matches!(err, TribeError::Launch { .. }));
        assert!(err.to_string().starts_with("failed to launch"));
    }
}
