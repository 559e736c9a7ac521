//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state,
//! navigation) and keeps its validation and list logic in pure helpers
//! with sibling tests. Rendering details stay local; shared chrome lives
//! in `components`.

pub mod billing;
pub mod customer_detail;
pub mod customer_form;
pub mod customer_list;
pub mod dashboard;
pub mod login;
pub mod plan_detail;
pub mod plan_form;
pub mod plan_list;
pub mod register;
pub mod support;
