//! Symptom matcher: free text in, union of matched advice out.
//!
//! A symptom key matches when the full phrase occurs as a substring of the
//! lowercased input, or when any single word of the phrase appears among the
//! input's whitespace-delimited words. The one-word rule is deliberately
//! permissive: "chest" alone pulls in the "chest pain" record, and "pain"
//! alone pulls in every pain-related entry. Do not tighten it.

use std::collections::HashSet;

use tracing::debug;

use crate::db::SymptomDb;
use crate::records::AnalysisResult;

/// Pure, total function: any string input yields a result, possibly empty.
/// O(symptoms × input length); the table has tens of entries.
pub fn analyze_symptoms(db: &SymptomDb, text: &str) -> AnalysisResult {
    let text = text.to_lowercase();
    let words: HashSet<&str> = text.split_whitespace().collect();

    let mut result = AnalysisResult::default();
    let mut matched = 0usize;

    for (symptom, record) in db.iter() {
        let hit = text.contains(symptom)
            || symptom.split_whitespace().any(|w| words.contains(w));
        if hit {
            result.merge(record);
            matched += 1;
        }
    }

    debug!("matched {} of {} symptom keys", matched, db.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn db() -> SymptomDb {
        SymptomDb::embedded()
    }

    #[test]
    fn empty_input_yields_empty_sets() {
        let result = analyze_symptoms(&db(), "");
        assert!(result.is_empty());
    }

    #[test]
    fn unmatched_input_yields_empty_sets() {
        let result = analyze_symptoms(&db(), "xyz unknown symptom");
        assert!(result.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let db = db();
        assert_eq!(analyze_symptoms(&db, "FEVER"), analyze_symptoms(&db, "fever"));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let db = db();
        let text = "I have fever and a sore throat";
        assert_eq!(analyze_symptoms(&db, text), analyze_symptoms(&db, text));
    }

    #[test]
    fn every_key_matches_its_own_record() {
        let db = db();
        for (symptom, record) in db.iter() {
            let result = analyze_symptoms(&db, symptom);
            assert!(
                result.precautions.is_superset(&record.precautions)
                    && result.medicines.is_superset(&record.medicines)
                    && result.tips.is_superset(&record.tips),
                "record for {symptom} not fully merged"
            );
        }
    }

    #[test]
    fn fever_and_cough_sentence_merges_both_records() {
        let result = analyze_symptoms(&db(), "I have fever and cough");

        for item in ["Drink fluids", "Rest well", "Stay hydrated", "Use a humidifier"] {
            assert!(result.precautions.contains(item), "missing precaution {item}");
        }
        for item in ["Paracetamol", "Cough syrup"] {
            assert!(result.medicines.contains(item), "missing medicine {item}");
        }
        for item in ["Avoid cold drinks", "Monitor temperature", "Avoid allergens", "Use lozenges"] {
            assert!(result.tips.contains(item), "missing tip {item}");
        }
    }

    #[test]
    fn headache_alone_yields_exactly_the_headache_record() {
        let db = db();
        let result = analyze_symptoms(&db, "headache");
        let record = db.get("headache").unwrap();

        assert_eq!(result.precautions, record.precautions);
        assert_eq!(result.medicines, record.medicines);
        assert_eq!(result.tips, record.tips);
    }

    #[test]
    fn single_word_overlap_matches_multi_word_key() {
        // Permissive by design: "chest" alone matches "chest pain".
        let db = db();
        let result = analyze_symptoms(&db, "chest");
        let chest_pain = db.get("chest pain").unwrap();

        assert!(result.medicines.is_superset(&chest_pain.medicines));
        assert!(result.precautions.is_superset(&chest_pain.precautions));
    }

    #[test]
    fn bare_pain_fans_out_to_every_pain_entry() {
        // Known false-positive surface of the word-overlap rule, preserved
        // rather than fixed: "pain" triggers all five pain-phrased keys.
        let db = db();
        let result = analyze_symptoms(&db, "pain");

        for key in ["back pain", "chest pain", "joint pain", "abdominal pain", "ear pain"] {
            let record = db.get(key).unwrap();
            assert!(
                result.medicines.is_superset(&record.medicines),
                "expected {key} to match on bare \"pain\""
            );
        }
    }

    #[test]
    fn matching_is_monotonic_under_appended_words() {
        let db = db();
        let base = analyze_symptoms(&db, "I have a headache");
        let extended = analyze_symptoms(&db, "I have a headache and fever");

        assert!(extended.precautions.is_superset(&base.precautions));
        assert!(extended.medicines.is_superset(&base.medicines));
        assert!(extended.tips.is_superset(&base.tips));
    }
}
