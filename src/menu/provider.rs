//! The menu-provider capabilities and their Clapgrep implementation.

use std::sync::Arc;

use crate::files::FileReference;
use crate::launch::{FlatpakLauncher, Launch};
use crate::menu::item::MenuItem;

/// Label shown in the context menu.
pub const ITEM_LABEL: &str = "Open in Clapgrep";

/// Icon name, resolved against the desktop icon theme.
pub const ITEM_ICON: &str = "search-symbolic";

// ───────────────────────────────────────── capabilities ──────

/// The two extension points a file-manager host queries.
///
/// The host glue registers an implementation with the file manager's
/// extension discovery and forwards each callback here; how that
/// registration happens is host-specific and lives outside this crate.
pub trait MenuProvider: Send + Sync {
    /// Items for the context menu of the current selection.
    fn file_items(&self, selection: &[FileReference]) -> Vec<MenuItem>;

    /// Items for the background (empty-selection) context menu of the
    /// directory currently being browsed.
    fn background_items(&self, current: &FileReference) -> Vec<MenuItem>;
}

// ───────────────────────────────────────── which menu ────────

/// Which of the two menus an item was produced for. Only affects the
/// host-facing item name, so repeated queries stay distinguishable in the
/// host's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuContext {
    Selection,
    Background,
}

impl MenuContext {
    fn item_name(self) -> &'static str {
        match self {
            MenuContext::Selection => "ClapgrepMenuProvider::Search::File",
            MenuContext::Background => "ClapgrepMenuProvider::Search::Background",
        }
    }
}

// ───────────────────────────────────────── provider ──────────

/// Provides the "Open in Clapgrep" entry for directories.
///
/// Stateless across calls; the only thing it holds is the launcher shared
/// into each item's activation callback.
pub struct ClapgrepMenuProvider {
    launcher: Arc<dyn Launch>,
}

impl ClapgrepMenuProvider {
    pub fn new(launcher: Arc<dyn Launch>) -> Self {
        Self { launcher }
    }

    /// Build the search item for `file`, or `None` when it isn't a
    /// directory.
    fn search_item(&self, file: &FileReference, context: MenuContext) -> Option<MenuItem> {
        if !file.is_dir() {
            return None;
        }

        let launcher = Arc::clone(&self.launcher);
        let dir = file.path.clone();
        Some(MenuItem::new(
            context.item_name(),
            ITEM_LABEL,
            "",
            ITEM_ICON,
            move || {
                // Fire-and-forget: the menu callback has no error channel,
                // so a failed spawn is logged and dropped.
                if let Err(err) = launcher.open(&dir) {
                    tracing::warn!("could not open Clapgrep on {}: {err}", dir.display());
                }
            },
        ))
    }
}

impl Default for ClapgrepMenuProvider {
    fn default() -> Self {
        Self::new(Arc::new(FlatpakLauncher::default()))
    }
}

impl MenuProvider for ClapgrepMenuProvider {
    fn file_items(&self, selection: &[FileReference]) -> Vec<MenuItem> {
        match selection {
            [only] => self
                .search_item(only, MenuContext::Selection)
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    fn background_items(&self, current: &FileReference) -> Vec<MenuItem> {
        self.search_item(current, MenuContext::Background)
            .into_iter()
            .collect()
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileKind;
    use crate::launch::LaunchError;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Records every launch request instead of spawning anything.
    #[derive(Default)]
    struct RecordingLauncher {
        opened: Mutex<Vec<PathBuf>>,
        fail: bool,
    }

    impl Launch for RecordingLauncher {
        fn open(&self, dir: &Path) -> Result<(), LaunchError> {
            self.opened.lock().unwrap().push(dir.to_path_buf());
            if self.fail {
                return Err(LaunchError {
                    command: format!("flatpak run test {}", dir.display()),
                    source: io::Error::new(io::ErrorKind::NotFound, "no flatpak"),
                });
            }
            Ok(())
        }
    }

    fn provider() -> (Arc<RecordingLauncher>, ClapgrepMenuProvider) {
        let launcher = Arc::new(RecordingLauncher::default());
        let provider = ClapgrepMenuProvider::new(Arc::clone(&launcher) as Arc<dyn Launch>);
        (launcher, provider)
    }

    fn dir(path: &str) -> FileReference {
        FileReference::new(path, FileKind::Directory)
    }

    fn file(path: &str) -> FileReference {
        FileReference::new(path, FileKind::Other)
    }

    #[test]
    fn single_directory_selection_yields_one_item() {
        let (_, provider) = provider();
        let items = provider.file_items(&[dir("/home/user/Documents")]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, ITEM_LABEL);
        assert_eq!(items[0].icon, ITEM_ICON);
        assert_eq!(items[0].name, "ClapgrepMenuProvider::Search::File");
        assert!(items[0].tip.is_empty());
    }

    #[test]
    fn non_directory_selection_yields_nothing() {
        let (_, provider) = provider();
        assert!(provider.file_items(&[file("/home/user/notes.txt")]).is_empty());
    }

    #[test]
    fn empty_and_multi_selections_yield_nothing() {
        let (_, provider) = provider();
        assert!(provider.file_items(&[]).is_empty());
        assert!(provider
            .file_items(&[dir("/home/a"), dir("/home/b")])
            .is_empty());
    }

    #[test]
    fn background_items_gate_on_directory() {
        let (_, provider) = provider();

        let items = provider.background_items(&dir("/srv/data"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "ClapgrepMenuProvider::Search::Background");

        assert!(provider.background_items(&file("/srv/data.img")).is_empty());
    }

    #[test]
    fn activation_launches_on_the_selected_directory() {
        let (launcher, provider) = provider();
        let items = provider.file_items(&[dir("/home/user/Documents")]);

        items[0].activate();

        let opened = launcher.opened.lock().unwrap();
        assert_eq!(opened.as_slice(), [PathBuf::from("/home/user/Documents")]);
    }

    #[test]
    fn awkward_paths_pass_through_verbatim() {
        let (launcher, provider) = provider();
        let awkward = "/home/user/my \"quoted\" dir";
        let items = provider.file_items(&[dir(awkward)]);

        items[0].activate();

        let opened = launcher.opened.lock().unwrap();
        assert_eq!(opened.as_slice(), [PathBuf::from(awkward)]);
    }

    #[test]
    fn activation_swallows_launch_errors() {
        let launcher = Arc::new(RecordingLauncher {
            fail: true,
            ..Default::default()
        });
        let provider = ClapgrepMenuProvider::new(Arc::clone(&launcher) as Arc<dyn Launch>);

        let items = provider.background_items(&dir("/tmp"));
        items[0].activate();

        assert_eq!(launcher.opened.lock().unwrap().len(), 1);
    }

    #[test]
    fn items_outlive_the_provider() {
        // Ownership transfers to the host; the provider may be gone by the
        // time the user clicks.
        let (launcher, provider) = provider();
        let items = provider.file_items(&[dir("/home/user/Documents")]);
        drop(provider);

        items[0].activate();
        assert_eq!(launcher.opened.lock().unwrap().len(), 1);
    }
}
