//! Browser side of the theme store: `localStorage` persistence and the
//! `data-theme` attribute on `<body>`.

use common::model::theme::Theme;
use common::theme::{ThemeStorage, ThemeStore, ThemeSurface, STORAGE_KEY};
use web_sys::Storage;

pub type SiteThemeStore = ThemeStore<LocalThemeStorage, BodyThemeSurface>;

pub struct LocalThemeStorage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
}

pub struct BodyThemeSurface;

impl ThemeSurface for BodyThemeSurface {
    fn apply(&self, theme: Theme) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}
