//! healthbot-web — Web UI for the HealthBot symptom checker
//! Provides:
//!   - Checker page: symptom textarea + severity select, rendered results
//!   - JSON API for the matcher and the symptom list
//!   - Liveness probe

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
