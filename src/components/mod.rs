//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated chrome and shared interaction
//! surfaces while reading shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod main_layout;
pub mod navbar;
pub mod route_guard;
pub mod sidebar;
