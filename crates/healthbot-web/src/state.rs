//! Shared application state for the web server.

use std::sync::Arc;

use healthbot_core::SymptomDb;

/// Shared state injected into every Axum handler.
/// The knowledge base is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SymptomDb>,
}

impl AppState {
    pub fn new() -> Self {
        Self { db: Arc::new(SymptomDb::embedded()) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<AppState>;
