//! Nautilus context-menu integration for the Clapgrep search application.
//!
//! Right-clicking a folder (or the background of one) offers an
//! "Open in Clapgrep" entry; activating it launches the Clapgrep Flatpak on
//! that folder as a detached process. The host-specific registration glue
//! lives outside this crate — it implements discovery and forwards the two
//! menu callbacks to a [`menu::provider::MenuProvider`].

pub mod config;
pub mod files;
pub mod launch;
pub mod menu;

pub use files::{FileKind, FileReference};
pub use launch::{FlatpakLauncher, Launch, LaunchError};
pub use menu::item::MenuItem;
pub use menu::provider::{ClapgrepMenuProvider, MenuProvider};
