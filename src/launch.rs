//! Launching the Clapgrep application on a directory.
//!
//! The launch is fire-and-forget: we request process creation and return
//! without waiting, observing no exit status or output. The menu code only
//! sees the [`Launch`] trait, so tests can substitute a recording double.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config;

// ───────────────────────────────────────── error ─────────────

/// The launcher binary itself could not be run.
///
/// A Clapgrep that is missing *inside* the sandbox fails in the detached
/// child and is never observed here.
#[derive(Debug, thiserror::Error)]
#[error("failed to run `{command}`: {source}")]
pub struct LaunchError {
    /// The command line we attempted, for log/CLI context.
    pub command: String,
    #[source]
    pub source: io::Error,
}

// ───────────────────────────────────────── trait ─────────────

/// Capability to open the search application on a directory.
pub trait Launch: Send + Sync {
    /// Request a new, detached process searching `dir`. Returns as soon as
    /// process creation has been requested.
    fn open(&self, dir: &Path) -> Result<(), LaunchError>;
}

// ───────────────────────────────────────── flatpak ───────────

/// Launches Clapgrep through its Flatpak:
/// `flatpak run de.leopoldluley.Clapgrep <dir>`.
///
/// The path travels as its own argv element — no shell is involved, so
/// whitespace and quote characters in paths pass through untouched.
#[derive(Debug, Clone)]
pub struct FlatpakLauncher {
    flatpak_bin: String,
    app_id: String,
}

impl FlatpakLauncher {
    pub fn new(flatpak_bin: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            flatpak_bin: flatpak_bin.into(),
            app_id: app_id.into(),
        }
    }

    /// Is the Clapgrep Flatpak currently installed?
    ///
    /// Runs `flatpak info <app-id>` to completion and reports its exit
    /// status. Errors only when the `flatpak` binary itself cannot be run.
    pub fn probe(&self) -> Result<bool, LaunchError> {
        let status = Command::new(&self.flatpak_bin)
            .arg("info")
            .arg(&self.app_id)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| LaunchError {
                command: format!("{} info {}", self.flatpak_bin, self.app_id),
                source,
            })?;
        Ok(status.success())
    }

    fn command_line(&self, dir: &Path) -> String {
        format!("{} run {} {}", self.flatpak_bin, self.app_id, dir.display())
    }
}

impl Default for FlatpakLauncher {
    fn default() -> Self {
        Self::new(config::DEFAULT_FLATPAK_BIN, config::DEFAULT_APP_ID)
    }
}

impl Launch for FlatpakLauncher {
    fn open(&self, dir: &Path) -> Result<(), LaunchError> {
        let child = Command::new(&self.flatpak_bin)
            .arg("run")
            .arg(&self.app_id)
            .arg(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError {
                command: self.command_line(dir),
                source,
            })?;

        tracing::debug!("launched {} (pid {})", self.app_id, child.id());
        // Not waited on: the child stays in the process table until the
        // host exits, and its outcome is never observed.
        drop(child);
        Ok(())
    }
}

// ───────────────────────────────────────── tests ─────────────
