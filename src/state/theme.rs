//! Theme Preference Store
//!
//! Light/dark preference with persisted storage and a presentation class on
//! the document root. The store is injected through context, and all
//! mutation goes through [`ThemeStore::set_theme`].

use thiserror::Error;
use tracing::{info, warn};

/// Local storage key for the preference
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class toggled on the document root
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("preference storage is not available")]
pub struct StorageUnavailable;

/// Environment the store reads from and writes to
pub trait ThemeBackend {
    /// Persisted preference, `Ok(None)` when nothing valid is stored
    fn load(&self) -> Result<Option<Theme>, StorageUnavailable>;
    fn save(&self, theme: Theme) -> Result<(), StorageUnavailable>;
    /// Operating system's color-scheme preference
    fn prefers_dark(&self) -> bool;
    /// Add or remove the dark class on the document root
    fn apply_dark_class(&self, dark: bool);
}

#[derive(Debug, Clone)]
pub struct ThemeStore<B> {
    backend: B,
    current: Option<Theme>,
}

impl<B: ThemeBackend> ThemeStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, current: None }
    }

    /// `None` until initialized; views render a neutral placeholder then
    pub fn theme(&self) -> Option<Theme> {
        self.current
    }

    /// Resolve the initial theme on first mount: stored value, else the OS
    /// preference. Stays uninitialized while storage is unreachable.
    pub fn initialize(&mut self) -> Option<Theme> {
        if self.current.is_some() {
            return self.current;
        }
        let stored = match self.backend.load() {
            Ok(stored) => stored,
            Err(err) => {
                warn!(%err, "theme not initialized");
                return None;
            }
        };
        let theme = stored.unwrap_or(if self.backend.prefers_dark() { Theme::Dark } else { Theme::Light });
        self.set_theme(theme);
        Some(theme)
    }

    /// Persist, update state and apply the root class in one step
    pub fn set_theme(&mut self, theme: Theme) {
        if let Err(err) = self.backend.save(theme) {
            warn!(%err, theme = theme.as_str(), "theme not persisted");
        }
        self.current = Some(theme);
        self.backend.apply_dark_class(theme == Theme::Dark);
        info!(theme = theme.as_str(), "theme set");
    }

    pub fn toggle(&mut self) {
        if let Some(theme) = self.current {
            self.set_theme(theme.toggled());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryBackend {
        stored: RefCell<Option<String>>,
        unavailable: bool,
        os_dark: bool,
        root_dark: Cell<bool>,
        class_applications: Cell<u32>,
    }

    impl ThemeBackend for MemoryBackend {
        fn load(&self) -> Result<Option<Theme>, StorageUnavailable> {
            if self.unavailable {
                return Err(StorageUnavailable);
            }
            Ok(self.stored.borrow().as_deref().and_then(Theme::parse))
        }

        fn save(&self, theme: Theme) -> Result<(), StorageUnavailable> {
            if self.unavailable {
                return Err(StorageUnavailable);
            }
            *self.stored.borrow_mut() = Some(theme.as_str().to_string());
            Ok(())
        }

        fn prefers_dark(&self) -> bool {
            self.os_dark
        }

        fn apply_dark_class(&self, dark: bool) {
            self.root_dark.set(dark);
            self.class_applications.set(self.class_applications.get() + 1);
        }
    }

    #[test]
    fn test_os_dark_preference_applies_class_once() {
        let mut store = ThemeStore::new(MemoryBackend { os_dark: true, ..Default::default() });
        assert_eq!(store.theme(), None);
        assert_eq!(store.initialize(), Some(Theme::Dark));
        assert_eq!(store.theme(), Some(Theme::Dark));
        assert!(store.backend.root_dark.get());
        assert_eq!(store.backend.class_applications.get(), 1);

        // a second mount does not re-apply
        store.initialize();
        assert_eq!(store.backend.class_applications.get(), 1);
    }

    #[test]
    fn test_stored_value_beats_os_preference() {
        let backend = MemoryBackend { os_dark: true, ..Default::default() };
        *backend.stored.borrow_mut() = Some("light".into());
        let mut store = ThemeStore::new(backend);
        assert_eq!(store.initialize(), Some(Theme::Light));
        assert!(!store.backend.root_dark.get());
    }

    #[test]
    fn test_invalid_stored_value_falls_back_to_os() {
        let backend = MemoryBackend::default();
        *backend.stored.borrow_mut() = Some("sepia".into());
        let mut store = ThemeStore::new(backend);
        assert_eq!(store.initialize(), Some(Theme::Light));
    }

    #[test]
    fn test_unavailable_storage_keeps_placeholder() {
        let mut store = ThemeStore::new(MemoryBackend { unavailable: true, os_dark: true, ..Default::default() });
        assert_eq!(store.initialize(), None);
        assert_eq!(store.theme(), None);
        assert_eq!(store.backend.class_applications.get(), 0);
    }

    #[test]
    fn test_set_theme_persists_and_syncs_class() {
        let mut store = ThemeStore::new(MemoryBackend::default());
        store.initialize();
        store.toggle();
        assert_eq!(store.theme(), Some(Theme::Dark));
        assert!(store.backend.root_dark.get());
        assert_eq!(store.backend.stored.borrow().as_deref(), Some("dark"));

        store.set_theme(Theme::Light);
        assert!(!store.backend.root_dark.get());
        assert_eq!(store.backend.stored.borrow().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_before_initialize_is_noop() {
        let mut store = ThemeStore::new(MemoryBackend::default());
        store.toggle();
        assert_eq!(store.theme(), None);
        assert_eq!(store.backend.class_applications.get(), 0);
    }
}
