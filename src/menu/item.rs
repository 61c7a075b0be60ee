//! Menu-entry value object.

use std::fmt;

/// One clickable context-menu entry.
///
/// Created per menu query; ownership moves to the host, which drops the item
/// once the menu closes. The activation callback captures everything it
/// needs at creation time, so the item stays self-contained.
pub struct MenuItem {
    /// Host-facing identifier, `Provider::Action::Context` style.
    pub name: String,
    pub label: String,
    pub tip: String,
    /// Icon name from the desktop icon theme (e.g. `"search-symbolic"`).
    pub icon: String,
    on_activate: Box<dyn Fn() + Send>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        tip: impl Into<String>,
        icon: impl Into<String>,
        on_activate: impl Fn() + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            tip: tip.into(),
            icon: icon.into(),
            on_activate: Box::new(on_activate),
        }
    }

    /// Run the attached activation callback (the host calls this when the
    /// user clicks the entry).
    pub fn activate(&self) {
        (self.on_activate)();
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("tip", &self.tip)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

// ───────────────────────────────────────── tests ─────────────
