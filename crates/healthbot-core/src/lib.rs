//! healthbot-core — Symptom knowledge base and matcher.
//!
//! Pure, synchronous lookup: free-text symptom descriptions in,
//! {precautions, medicines, tips} out. No I/O, no shared mutable state.

pub mod analyzer;
pub mod db;
pub mod records;

// Re-export commonly used types
pub use analyzer::analyze_symptoms;
pub use db::SymptomDb;
pub use records::{AnalysisResult, Severity, SymptomRecord};
