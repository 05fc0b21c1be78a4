//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` posts the contact form to the third-party form endpoint; it is
//! the only network call the page makes.

pub mod contact;
