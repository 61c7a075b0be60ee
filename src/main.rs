//! CLI driver that stands in for the file-manager host.
//!
//! Feeds a simulated selection to the menu provider and prints the items a
//! host would receive, one per line. Stdout carries only the result lines;
//! diagnostics go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use clapgrep_nautilus::config::AppConfig;
use clapgrep_nautilus::files::FileReference;
use clapgrep_nautilus::launch::FlatpakLauncher;
use clapgrep_nautilus::menu::provider::{ClapgrepMenuProvider, MenuProvider};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "Exercise the Clapgrep context-menu integration from the command line"
)]
struct Cli {
    /// Paths forming the simulated selection (defaults to `.`).
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Query the background (current-folder) menu instead of the
    /// selection menu. Only the first path is used.
    #[arg(long)]
    background: bool,

    /// Activate the returned items — this actually launches Clapgrep.
    #[arg(long)]
    open: bool,

    /// Report whether the Clapgrep Flatpak is installed and exit.
    #[arg(long)]
    check: bool,
}

// ───────────────────────────────────────── main ──────────────

fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load();
    let launcher = FlatpakLauncher::new(&config.flatpak_bin, &config.app_id);

    // ── installation probe ────────────────────────────────────
    if cli.check {
        if launcher.probe()? {
            println!("{} is installed", config.app_id);
            return Ok(());
        }
        println!("{} is not installed", config.app_id);
        std::process::exit(1);
    }

    // ── simulated menu query ──────────────────────────────────
    let provider = ClapgrepMenuProvider::new(Arc::new(launcher));

    let items = if cli.background {
        match cli.paths.first() {
            Some(path) => provider.background_items(&FileReference::from_path(path)?),
            None => Vec::new(),
        }
    } else {
        let selection = cli
            .paths
            .iter()
            .map(|path| FileReference::from_path(path))
            .collect::<std::io::Result<Vec<_>>>()?;
        provider.file_items(&selection)
    };

    for item in &items {
        println!("{}\t{}\t{}", item.name, item.label, item.icon);
        if cli.open {
            item.activate();
        }
    }

    Ok(())
}
