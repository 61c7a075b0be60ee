//! File references handed to the menu callbacks.
//!
//! The host owns the real file objects; per callback invocation we only see
//! a path and whether it points at a directory, so that is all we keep.

use std::path::{Path, PathBuf};

// ───────────────────────────────────────── file kind ─────────

/// The one type distinction the integration cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Other,
}

// ───────────────────────────────────────── reference ─────────

/// A snapshot of one selected file, valid for a single menu query.
///
/// Hosts that already know the type tag build this directly; the CLI driver
/// uses [`FileReference::from_path`] to classify real paths.
#[derive(Debug, Clone)]
pub struct FileReference {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl FileReference {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Classify `path` by asking the filesystem.
    ///
    /// Symlinks are followed, so a link to a folder counts as a directory —
    /// the same way the file manager presents it.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            kind: if meta.is_dir() {
                FileKind::Directory
            } else {
                FileKind::Other
            },
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

// ───────────────────────────────────────── tests ─────────────
