//! User configuration — launcher overrides and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/clapgrep-nautilus/config.toml` (default
//! `~/.config/clapgrep-nautilus/config.toml`). No file means defaults.

use std::path::PathBuf;

/// Binary used to launch the sandboxed application.
pub const DEFAULT_FLATPAK_BIN: &str = "flatpak";

/// Flatpak application id of the Clapgrep search app.
pub const DEFAULT_APP_ID: &str = "de.leopoldluley.Clapgrep";

// ───────────────────────────────────────── config ────────────

/// Application configuration — how Clapgrep gets launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The `flatpak` executable (name or absolute path).
    pub flatpak_bin: String,
    /// Application id passed to `flatpak run` / `flatpak info`.
    pub app_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            flatpak_bin: DEFAULT_FLATPAK_BIN.into(),
            app_id: DEFAULT_APP_ID.into(),
        }
    }
}

impl AppConfig {
    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');
            if value.is_empty() {
                continue;
            }

            match key {
                "flatpak_bin" => config.flatpak_bin = value.to_string(),
                "app_id" => config.app_id = value.to_string(),
                _ => {}
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let lines = vec![
            "# clapgrep-nautilus configuration".to_string(),
            String::new(),
            "# Binary used to launch the sandboxed application".to_string(),
            format!("flatpak_bin = \"{}\"", self.flatpak_bin),
            String::new(),
            "# Flatpak application id of the search app".to_string(),
            format!("app_id = \"{}\"", self.app_id),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Return the config file path
/// (`$XDG_CONFIG_HOME/clapgrep-nautilus/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("clapgrep-nautilus").join("config.toml")
}

// ───────────────────────────────────────── tests ─────────────
