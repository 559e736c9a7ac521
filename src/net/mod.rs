//! Networking modules for the remote CRM microservices.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single HTTP wrapper every request goes through (bearer
//! attachment, 401 interception), `error` defines the failure taxonomy,
//! `types` the shared wire schema, and the remaining modules are flat
//! per-resource request builders.

pub mod auth;
pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod plans;
pub mod support;
pub mod types;
