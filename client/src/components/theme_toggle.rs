//! Light/dark theme switch.

use leptos::prelude::*;

use crate::util::theme_storage;

/// Checkbox switching the page theme.
///
/// Starts unchecked so server and client markup agree; once mounted in the
/// browser the checkbox is synced to the stored preference. The `<html>`
/// attribute itself is already set by the shell's early theme script.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(false);

    Effect::new(move || {
        if let Some(theme) = theme_storage::restore_document_theme() {
            dark.set(theme.is_dark());
        }
    });

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let theme = theme_storage::select_document_theme(event_target_checked(&ev));
        dark.set(theme.is_dark());
    };

    view! {
        <label class="theme-switch" for="theme-toggle" title="Toggle dark mode">
            <input
                type="checkbox"
                id="theme-toggle"
                prop:checked=move || dark.get()
                on:click=on_click
            />
            <span class="theme-switch__slider"></span>
        </label>
    }
}
