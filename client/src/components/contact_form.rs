//! Contact form posting to the configured form endpoint.

use leptos::prelude::*;

use crate::state::contact::ContactState;

/// Contact form with name, email and message fields plus a status region.
///
/// `action` is the endpoint URL; the submit handler reads it back from the
/// form element so the markup stays the single source.
#[component]
pub fn ContactForm(#[prop(into)] action: String) -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        state.update(|s| started = s.begin());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get_untracked() else {
                state.update(|s| {
                    s.settle(&Err(crate::net::contact::ContactError::Network("form not mounted".to_owned())));
                });
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::contact::submit(&form).await;
                match &result {
                    Ok(()) => log::info!("contact message sent"),
                    Err(e) => log::warn!("contact message failed: {e}"),
                }
                let mut clear = false;
                state.update(|s| clear = s.settle(&result));
                if clear {
                    form.reset();
                }
            });
        }
    };

    view! {
        <form id="contact-form" class="contact-form" action=action method="POST" node_ref=form_ref on:submit=on_submit>
            <label for="contact-name">"Name"</label>
            <input id="contact-name" type="text" name="name" required/>

            <label for="contact-email">"Email"</label>
            <input id="contact-email" type="email" name="email" required/>

            <label for="contact-message">"Message"</label>
            <textarea id="contact-message" name="message" rows="5" required></textarea>

            <button class="btn" type="submit" disabled=move || state.get().submitting>
                "Send Message"
            </button>
            <p
                id="form-status"
                class=move || state.get().status_class()
                style:display=move || if state.get().status_visible() { "block" } else { "none" }
            >
                {move || state.get().status_message()}
            </p>
        </form>
    }
}
