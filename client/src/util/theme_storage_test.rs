use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.save(key, value);
        store
    }

    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Default)]
struct RecordingRoot {
    attribute: RefCell<Option<&'static str>>,
    writes: RefCell<usize>,
}

impl ThemeRoot for RecordingRoot {
    fn set_theme(&self, theme: Theme) {
        *self.attribute.borrow_mut() = Some(theme.as_str());
        *self.writes.borrow_mut() += 1;
    }
}

// =============================================================
// select
// =============================================================

#[test]
fn checking_toggle_applies_and_persists_dark() {
    let root = RecordingRoot::default();
    let store = MemoryStore::default();

    assert_eq!(select(true, &root, &store), Theme::Dark);
    assert_eq!(*root.attribute.borrow(), Some("dark"));
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn unchecking_toggle_applies_and_persists_light() {
    let root = RecordingRoot::default();
    let store = MemoryStore::default();

    select(true, &root, &store);
    assert_eq!(select(false, &root, &store), Theme::Light);
    assert_eq!(*root.attribute.borrow(), Some("light"));
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn selecting_same_theme_twice_is_idempotent() {
    let root = RecordingRoot::default();
    let store = MemoryStore::default();

    select(true, &root, &store);
    select(true, &root, &store);
    assert_eq!(*root.attribute.borrow(), Some("dark"));
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(store.items.borrow().len(), 1);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_dark_applies_attribute_and_reports_dark() {
    let root = RecordingRoot::default();
    let store = MemoryStore::with(STORAGE_KEY, "dark");

    let restored = restore(&root, &store);
    assert_eq!(restored, Some(Theme::Dark));
    assert!(restored.is_some_and(Theme::is_dark));
    assert_eq!(*root.attribute.borrow(), Some("dark"));
}

#[test]
fn restore_light_leaves_toggle_unchecked() {
    let root = RecordingRoot::default();
    let store = MemoryStore::with(STORAGE_KEY, "light");

    let restored = restore(&root, &store);
    assert_eq!(restored, Some(Theme::Light));
    assert!(!restored.is_some_and(Theme::is_dark));
    assert_eq!(*root.attribute.borrow(), Some("light"));
}

#[test]
fn restore_without_preference_touches_nothing() {
    let root = RecordingRoot::default();
    let store = MemoryStore::default();

    assert_eq!(restore(&root, &store), None);
    assert_eq!(*root.writes.borrow(), 0);
}

#[test]
fn restore_ignores_unrecognized_value() {
    let root = RecordingRoot::default();
    let store = MemoryStore::with(STORAGE_KEY, "solarized");

    assert_eq!(restore(&root, &store), None);
    assert_eq!(*root.writes.borrow(), 0);
}

#[test]
fn restore_after_select_round_trips_choice() {
    let store = MemoryStore::default();
    select(true, &RecordingRoot::default(), &store);

    let fresh_root = RecordingRoot::default();
    assert_eq!(restore(&fresh_root, &store), Some(Theme::Dark));
    assert_eq!(*fresh_root.attribute.borrow(), Some("dark"));
}

// =============================================================
// early theme script
// =============================================================

#[test]
fn early_script_reads_storage_key_and_sets_root_attribute() {
    assert!(EARLY_THEME_SCRIPT.contains(&format!("localStorage.getItem(\"{STORAGE_KEY}\")")));
    assert!(EARLY_THEME_SCRIPT.contains(&format!("setAttribute(\"{THEME_ATTRIBUTE}\",t)")));
}

#[test]
fn early_script_only_applies_known_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        assert!(EARLY_THEME_SCRIPT.contains(&format!("t===\"{}\"", theme.as_str())));
    }
}

#[test]
fn early_script_cannot_close_its_script_element() {
    assert!(!EARLY_THEME_SCRIPT.contains("</"));
}

// =============================================================
// browser wrappers outside hydrate
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_wrappers_noop_without_browser() {
    assert_eq!(restore_document_theme(), None);
    assert_eq!(select_document_theme(true), Theme::Dark);
    assert_eq!(select_document_theme(false), Theme::Light);
}
