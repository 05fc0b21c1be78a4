//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one independent page behavior; none reads another's
//! state.

pub mod contact_form;
pub mod project_list;
pub mod theme_toggle;
