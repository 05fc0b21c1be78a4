//! Theme preference persistence and application.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Selecting a theme writes
//! back to `localStorage` and updates that attribute.
//!
//! DESIGN
//! ======
//! Storage and the document root are reached through the `PreferenceStore`
//! and `ThemeRoot` traits and passed in by the caller. Browser-backed
//! implementations exist only under `hydrate`; SSR and native tests use
//! their own implementations, and the browser convenience wrappers no-op.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Theme;

/// Storage key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Attribute written on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Inline script for the document `<head>`: applies a stored `light`/`dark`
/// preference to `<html>` before the first paint, ahead of hydration.
pub const EARLY_THEME_SCRIPT: &str = r#"(function(){try{var t=localStorage.getItem("theme");if(t==="light"||t==="dark"){document.documentElement.setAttribute("data-theme",t);}}catch(e){}})();"#;

/// Durable per-origin key-value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Element that reflects the active theme.
pub trait ThemeRoot {
    fn set_theme(&self, theme: Theme);
}

/// Apply the stored preference, if any, to `root`.
///
/// Returns the stored theme so the caller can sync the toggle control.
/// Nothing is written when no recognizable preference is stored.
pub fn restore(root: &impl ThemeRoot, store: &impl PreferenceStore) -> Option<Theme> {
    let theme = store.load(STORAGE_KEY).as_deref().and_then(Theme::parse)?;
    root.set_theme(theme);
    Some(theme)
}

/// Apply the theme chosen by the toggle control and persist it.
pub fn select(checked: bool, root: &impl ThemeRoot, store: &impl PreferenceStore) -> Theme {
    let theme = Theme::from_checked(checked);
    root.set_theme(theme);
    store.save(STORAGE_KEY, theme.as_str());
    theme
}

/// `localStorage` for the current window. Missing storage (private mode,
/// sandboxed frames) degrades to a store that remembers nothing.
#[cfg(feature = "hydrate")]
pub struct LocalStorage(Option<web_sys::Storage>);

#[cfg(feature = "hydrate")]
impl LocalStorage {
    pub fn current() -> Self {
        Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("theme preference not saved: {e:?}");
            }
        }
    }
}

/// The `<html>` element of the current document.
#[cfg(feature = "hydrate")]
pub struct DocumentRoot(Option<web_sys::Element>);

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    pub fn current() -> Self {
        Self(
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element()),
        )
    }
}

#[cfg(feature = "hydrate")]
impl ThemeRoot for DocumentRoot {
    fn set_theme(&self, theme: Theme) {
        if let Some(el) = &self.0 {
            if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("theme attribute not applied: {e:?}");
            }
        }
    }
}

/// Restore the stored theme onto the live document.
pub fn restore_document_theme() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        restore(&DocumentRoot::current(), &LocalStorage::current())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Apply and persist the toggle's choice on the live document.
pub fn select_document_theme(checked: bool) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        select(checked, &DocumentRoot::current(), &LocalStorage::current())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::from_checked(checked)
    }
}
