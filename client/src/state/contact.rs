//! Contact form submission state.
//!
//! DESIGN
//! ======
//! A submission moves through `begin` -> `settle`. `settle` is the single
//! terminal step for every outcome and always re-enables the submit button.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::{ContactError, SENDING_MESSAGE, SENT_MESSAGE};

/// Visual category of the status region; doubles as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Text and category currently shown in the status region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub kind: StatusKind,
}

/// Contact form state. The status region stays hidden until the first submit.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub status: Option<FormStatus>,
    pub submitting: bool,
}

impl ContactState {
    /// Start a submission. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.status = Some(FormStatus { message: SENDING_MESSAGE.to_owned(), kind: StatusKind::Info });
        true
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Returns `true` when the form fields should be cleared.
    pub fn settle(&mut self, result: &Result<(), ContactError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.status = Some(FormStatus { message: SENT_MESSAGE.to_owned(), kind: StatusKind::Success });
                true
            }
            Err(e) => {
                self.status = Some(FormStatus { message: e.user_message(), kind: StatusKind::Error });
                false
            }
        }
    }

    pub fn status_message(&self) -> String {
        self.status.as_ref().map(|s| s.message.clone()).unwrap_or_default()
    }

    pub fn status_class(&self) -> &'static str {
        self.status.as_ref().map_or("", |s| s.kind.class())
    }

    pub fn status_visible(&self) -> bool {
        self.status.is_some()
    }
}
