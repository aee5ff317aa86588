//! Browser Glue
//!
//! Thin `web-sys` wrappers for local storage, the color-scheme media query,
//! the document root class list and the location hash.

use web_sys::{Storage, Window};

use crate::state::theme::{StorageUnavailable, Theme, ThemeBackend, DARK_CLASS, THEME_STORAGE_KEY};

fn window() -> Option<Window> {
    web_sys::window()
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Theme backend over `localStorage` and `document.documentElement`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTheme;

impl ThemeBackend for BrowserTheme {
    fn load(&self) -> Result<Option<Theme>, StorageUnavailable> {
        let storage = local_storage().ok_or(StorageUnavailable)?;
        let stored = storage.get_item(THEME_STORAGE_KEY).ok().flatten();
        Ok(stored.as_deref().and_then(Theme::parse))
    }

    fn save(&self, theme: Theme) -> Result<(), StorageUnavailable> {
        let storage = local_storage().ok_or(StorageUnavailable)?;
        storage
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(|_| StorageUnavailable)
    }

    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn apply_dark_class(&self, dark: bool) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
    }
}

/// Current `location.hash`, empty outside a browser
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_hash(hash);
    }
}
