//! HTTP handlers for all web routes.

pub mod api;
pub mod checker;
