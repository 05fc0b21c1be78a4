//! Contact form submission to the third-party form endpoint.
//!
//! Client-side (hydrate): the form's fields are posted as multipart
//! `FormData` via `gloo-net`, asking for a JSON reply.
//! Server-side (SSR): nothing is sent; the form only submits in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, including an unreadable or malformed reply body, collapses
//! into a `ContactError` so the caller always settles the form exactly once.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Deserialize;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const SERVER_FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Oops! A network error occurred. Please check your connection and try again.";

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The endpoint listed validation errors for the submitted fields.
    #[error("submission rejected: {}", .0.join(", "))]
    Rejected(Vec<String>),
    /// Non-success reply without a recognizable error list.
    #[error("form endpoint returned status {status}")]
    Server { status: u16 },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

impl ContactError {
    /// Text shown in the status region.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(messages) => messages.join(", "),
            Self::Server { .. } => SERVER_FAILURE_MESSAGE.to_owned(),
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Failure reply shape; `errors` is optional.
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

/// One itemized validation error.
#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    message: Option<String>,
}

/// Classify a non-success reply from its status and raw body.
///
/// An `errors` list with at least one `message` becomes `Rejected`; anything
/// else, including a body that is not JSON, becomes `Server`.
pub fn classify_failure(status: u16, body: &str) -> ContactError {
    let messages: Vec<String> = serde_json::from_str::<FailureBody>(body)
        .ok()
        .and_then(|b| b.errors)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.message)
        .collect();

    if messages.is_empty() {
        ContactError::Server { status }
    } else {
        ContactError::Rejected(messages)
    }
}

/// Resolve a completed HTTP exchange into the submission result.
pub fn resolve_reply(status: u16, body: Option<&str>) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(classify_failure(status, body.unwrap_or_default()))
}

/// Post `form`'s fields to its `action` URL.
///
/// # Errors
///
/// Returns `ContactError` describing why the message was not accepted.
#[cfg(feature = "hydrate")]
pub async fn submit(form: &web_sys::HtmlFormElement) -> Result<(), ContactError> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|e| ContactError::Network(format!("form data: {e:?}")))?;
    let resp = gloo_net::http::Request::post(&form.action())
        .header("Accept", "application/json")
        .body(data)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if resp.ok() {
        return Ok(());
    }
    let body = resp.text().await.ok();
    resolve_reply(resp.status(), body.as_deref())
}
