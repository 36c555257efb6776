/// Core data types for the symptom checker.
/// Records are built once as part of the embedded knowledge base and never mutated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Symptom record
// ---------------------------------------------------------------------------

/// The advice attached to one symptom key: three deduplicated string sets.
/// `BTreeSet` keeps iteration lexicographic, so rendering is deterministic
/// without a separate sort step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub precautions: BTreeSet<String>,
    pub medicines: BTreeSet<String>,
    pub tips: BTreeSet<String>,
}

impl SymptomRecord {
    pub fn new(precautions: &[&str], medicines: &[&str], tips: &[&str]) -> Self {
        Self {
            precautions: to_set(precautions),
            medicines: to_set(medicines),
            tips: to_set(tips),
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Union of the records of every matched symptom for one query.
/// Built fresh per call; empty on no match, which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub precautions: BTreeSet<String>,
    pub medicines: BTreeSet<String>,
    pub tips: BTreeSet<String>,
}

impl AnalysisResult {
    /// Merge a matched record into the accumulating result via set union.
    pub fn merge(&mut self, record: &SymptomRecord) {
        self.precautions.extend(record.precautions.iter().cloned());
        self.medicines.extend(record.medicines.iter().cloned());
        self.tips.extend(record.tips.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.precautions.is_empty() && self.medicines.is_empty() && self.tips.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Caller-supplied severity. Used only to decide whether the presentation
/// layer shows a "seek medical attention" advisory; never affects matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Human-readable label for form options and rendered pages.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    /// Parse leniently; unknown input falls back to Mild.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "severe" => Severity::Severe,
            "moderate" => Severity::Moderate,
            _ => Severity::Mild,
        }
    }

    pub fn is_severe(&self) -> bool {
        matches!(self, Severity::Severe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_deduplicates_across_records() {
        let a = SymptomRecord::new(&["Rest well"], &["Paracetamol"], &["Monitor temperature"]);
        let b = SymptomRecord::new(&["Drink water"], &["Paracetamol", "Ibuprofen"], &["Rest"]);

        let mut result = AnalysisResult::default();
        result.merge(&a);
        result.merge(&b);

        // "Paracetamol" appears in both records but only once in the union.
        assert_eq!(result.medicines.len(), 2);
        assert_eq!(result.precautions.len(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn empty_result_is_empty() {
        assert!(AnalysisResult::default().is_empty());
    }

    #[test]
    fn severity_round_trips() {
        for sev in [Severity::Mild, Severity::Moderate, Severity::Severe] {
            assert_eq!(Severity::from_str(sev.as_str()), sev);
        }
        assert_eq!(Severity::from_str("SEVERE"), Severity::Severe);
        assert_eq!(Severity::from_str("unknown"), Severity::Mild);
    }

    #[test]
    fn only_severe_triggers_advisory() {
        assert!(Severity::Severe.is_severe());
        assert!(!Severity::Moderate.is_severe());
        assert!(!Severity::Mild.is_severe());
    }
}
