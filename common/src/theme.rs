//! Persisted color theme.
//!
//! [`ThemeStore`] is the single writer of the active [`Theme`]. It reads the
//! stored name once on load, falls back to the default for anything it does
//! not recognise, and pushes every change to both the storage and the
//! presentation surface.

use crate::model::theme::Theme;
use std::cell::RefCell;
use std::rc::Rc;

/// Key of the persisted theme name in client-local storage.
pub const STORAGE_KEY: &str = "theme";

pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// Outcome of reading the stored value, kept so the caller can report a
/// discarded entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredTheme {
    Missing,
    Valid(Theme),
    Ignored(String),
}

pub struct ThemeStore<S, P> {
    storage: S,
    surface: P,
    theme: Theme,
    stored: StoredTheme,
}

impl<S: ThemeStorage, P: ThemeSurface> ThemeStore<S, P> {
    pub fn load(storage: S, surface: P) -> Self {
        let stored = match storage.load() {
            None => StoredTheme::Missing,
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => StoredTheme::Valid(theme),
                Err(_) => StoredTheme::Ignored(raw),
            },
        };
        let theme = match stored {
            StoredTheme::Valid(theme) => theme,
            _ => Theme::default(),
        };

        storage.save(theme.as_str());
        surface.apply(theme);

        Self {
            storage,
            surface,
            theme,
            stored,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn stored(&self) -> &StoredTheme {
        &self.stored
    }

    /// Persists and applies `theme`. Returns whether it differs from the
    /// previous value.
    pub fn set(&mut self, theme: Theme) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;
        self.storage.save(theme.as_str());
        self.surface.apply(theme);
        changed
    }
}

/// In-memory storage. Clones share the same slot, which lets tests simulate
/// a page reload by building a second store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStorage {
    pub fn with_value(value: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&self, value: &str) {
        *self.slot.borrow_mut() = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct RecordingSurface {
        applied: Rc<RefCell<Vec<Theme>>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn empty_storage_loads_default() {
        let surface = RecordingSurface::default();
        let store = ThemeStore::load(MemoryThemeStorage::default(), surface.clone());
        assert_eq!(store.theme(), Theme::Default);
        assert_eq!(store.stored(), &StoredTheme::Missing);
        assert_eq!(*surface.applied.borrow(), vec![Theme::Default]);
    }

    #[test]
    fn set_then_get_round_trips_every_theme() {
        let storage = MemoryThemeStorage::default();
        let mut store = ThemeStore::load(storage.clone(), RecordingSurface::default());
        for theme in Theme::ALL {
            store.set(theme);
            assert_eq!(store.theme(), theme);
            assert_eq!(storage.value().as_deref(), Some(theme.as_str()));
        }
    }

    #[test]
    fn theme_survives_reload() {
        let storage = MemoryThemeStorage::default();
        let mut store = ThemeStore::load(storage.clone(), RecordingSurface::default());
        store.set(Theme::Cyberpunk);
        drop(store);

        let surface = RecordingSurface::default();
        let reloaded = ThemeStore::load(storage, surface.clone());
        assert_eq!(reloaded.theme(), Theme::Cyberpunk);
        assert_eq!(*surface.applied.borrow(), vec![Theme::Cyberpunk]);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_default() {
        let storage = MemoryThemeStorage::with_value("solarized");
        let store = ThemeStore::load(storage.clone(), RecordingSurface::default());
        assert_eq!(store.theme(), Theme::Default);
        assert_eq!(store.stored(), &StoredTheme::Ignored("solarized".to_string()));
        assert_eq!(storage.value().as_deref(), Some("default"));
    }

    #[test]
    fn set_reports_change() {
        let surface = RecordingSurface::default();
        let mut store = ThemeStore::load(MemoryThemeStorage::default(), surface.clone());
        assert!(store.set(Theme::Dark));
        assert!(!store.set(Theme::Dark));
        assert_eq!(surface.applied.borrow().last(), Some(&Theme::Dark));
    }
}
