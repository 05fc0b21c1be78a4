//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`projects`, `theme`, `contact`) so each
//! component depends on one small model.

pub mod contact;
pub mod projects;
pub mod theme;
