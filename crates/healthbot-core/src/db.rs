//! Embedded symptom knowledge base.
//!
//! A static table of symptom key → {precautions, medicines, tips}, compiled
//! into the crate. Built once at startup, read-only for the process lifetime;
//! concurrent readers need no locking.

use std::collections::BTreeMap;

use tracing::info;

use crate::analyzer::analyze_symptoms;
use crate::records::{AnalysisResult, SymptomRecord};

/// Read-only mapping from lowercase symptom key (single word or phrase,
/// e.g. "fever" or "sore throat") to its advice record.
pub struct SymptomDb {
    entries: BTreeMap<String, SymptomRecord>,
}

impl SymptomDb {
    /// Build the embedded knowledge base (~29 common symptoms).
    pub fn embedded() -> Self {
        let table: Vec<(&str, SymptomRecord)> = vec![
            (
                "fever",
                SymptomRecord::new(
                    &["Drink fluids", "Rest well"],
                    &["Paracetamol"],
                    &["Avoid cold drinks", "Monitor temperature"],
                ),
            ),
            (
                "cough",
                SymptomRecord::new(
                    &["Stay hydrated", "Use a humidifier"],
                    &["Cough syrup"],
                    &["Avoid allergens", "Use lozenges"],
                ),
            ),
            (
                "headache",
                SymptomRecord::new(
                    &["Rest in a quiet room", "Drink water"],
                    &["Ibuprofen", "Paracetamol"],
                    &["Avoid screen time", "Apply cold compress"],
                ),
            ),
            (
                "cold",
                SymptomRecord::new(
                    &["Stay warm", "Drink hot fluids"],
                    &["Antihistamines"],
                    &["Use saline drops", "Rest well"],
                ),
            ),
            (
                "sore throat",
                SymptomRecord::new(
                    &["Gargle with salt water", "Avoid spicy food"],
                    &["Lozenges"],
                    &["Drink warm liquids", "Use humidifier"],
                ),
            ),
            (
                "fatigue",
                SymptomRecord::new(
                    &["Get enough sleep", "Reduce stress"],
                    &["Vitamin supplements"],
                    &["Take short naps", "Eat balanced meals"],
                ),
            ),
            (
                "nausea",
                SymptomRecord::new(
                    &["Eat light meals", "Avoid strong odors"],
                    &["Antiemetics"],
                    &["Sip ginger tea", "Rest after eating"],
                ),
            ),
            (
                "vomiting",
                SymptomRecord::new(
                    &["Stay hydrated", "Avoid solid foods initially"],
                    &["Antiemetics"],
                    &["Eat bland foods", "Rest"],
                ),
            ),
            (
                "diarrhea",
                SymptomRecord::new(
                    &["Drink oral rehydration solution", "Avoid dairy"],
                    &["ORS", "Loperamide"],
                    &["Eat bananas", "Avoid spicy foods"],
                ),
            ),
            (
                "constipation",
                SymptomRecord::new(
                    &["Increase fiber intake", "Drink more water"],
                    &["Laxatives"],
                    &["Exercise regularly", "Eat fruits"],
                ),
            ),
            (
                "back pain",
                SymptomRecord::new(
                    &["Use proper posture", "Avoid heavy lifting"],
                    &["Pain relievers"],
                    &["Apply heat/cold", "Do stretching exercises"],
                ),
            ),
            (
                "chest pain",
                SymptomRecord::new(
                    &["Rest", "Avoid exertion"],
                    &["Aspirin (if prescribed)"],
                    &["Seek medical help if severe", "Monitor symptoms"],
                ),
            ),
            (
                "shortness of breath",
                SymptomRecord::new(
                    &["Sit upright", "Avoid allergens"],
                    &["Inhalers"],
                    &["Practice deep breathing", "Seek medical help if severe"],
                ),
            ),
            (
                "rash",
                SymptomRecord::new(
                    &["Avoid scratching", "Keep area clean"],
                    &["Antihistamines", "Topical creams"],
                    &["Use moisturizer", "Wear loose clothing"],
                ),
            ),
            (
                "dizziness",
                SymptomRecord::new(
                    &["Sit or lie down", "Avoid sudden movements"],
                    &["Meclizine"],
                    &["Drink water", "Rest"],
                ),
            ),
            (
                "runny nose",
                SymptomRecord::new(
                    &["Use tissues", "Wash hands frequently"],
                    &["Decongestants"],
                    &["Use saline spray", "Stay hydrated"],
                ),
            ),
            (
                "sneezing",
                SymptomRecord::new(
                    &["Avoid allergens", "Use tissues"],
                    &["Antihistamines"],
                    &["Keep windows closed", "Clean your room"],
                ),
            ),
            (
                "body ache",
                SymptomRecord::new(
                    &["Rest", "Stay hydrated"],
                    &["Pain relievers"],
                    &["Warm bath", "Gentle stretching"],
                ),
            ),
            (
                "loss of appetite",
                SymptomRecord::new(
                    &["Eat small meals", "Avoid oily foods"],
                    &["Appetite stimulants (if prescribed)"],
                    &["Eat favorite foods", "Drink juices"],
                ),
            ),
            (
                "sweating",
                SymptomRecord::new(
                    &["Wear light clothes", "Stay cool"],
                    &["Antiperspirants"],
                    &["Drink water", "Avoid spicy foods"],
                ),
            ),
            (
                "chills",
                SymptomRecord::new(
                    &["Keep warm", "Rest"],
                    &["Paracetamol"],
                    &["Drink warm fluids", "Monitor temperature"],
                ),
            ),
            (
                "itching",
                SymptomRecord::new(
                    &["Avoid scratching", "Keep skin moisturized"],
                    &["Antihistamines", "Topical creams"],
                    &["Use cool compress", "Wear cotton clothes"],
                ),
            ),
            (
                "joint pain",
                SymptomRecord::new(
                    &["Rest joints", "Apply ice"],
                    &["Pain relievers"],
                    &["Gentle exercise", "Stretching"],
                ),
            ),
            (
                "abdominal pain",
                SymptomRecord::new(
                    &["Eat light meals", "Avoid spicy foods"],
                    &["Antacids", "Pain relievers"],
                    &["Warm compress", "Rest"],
                ),
            ),
            (
                "sensitivity to light",
                SymptomRecord::new(
                    &["Wear sunglasses", "Stay indoors"],
                    &["Pain relievers"],
                    &["Dim lights", "Rest eyes"],
                ),
            ),
            (
                "ear pain",
                SymptomRecord::new(
                    &["Avoid loud noises", "Keep ears dry"],
                    &["Pain relievers", "Ear drops"],
                    &["Warm compress", "See a doctor if severe"],
                ),
            ),
            (
                "eye redness",
                SymptomRecord::new(
                    &["Avoid touching eyes", "Use clean towels"],
                    &["Eye drops"],
                    &["Cold compress", "Rest eyes"],
                ),
            ),
            (
                "swelling",
                SymptomRecord::new(
                    &["Elevate affected area", "Apply ice"],
                    &["Anti-inflammatories"],
                    &["Rest", "Monitor swelling"],
                ),
            ),
            (
                "palpitations",
                SymptomRecord::new(
                    &["Avoid caffeine", "Practice relaxation"],
                    &["Beta blockers (if prescribed)"],
                    &["Deep breathing", "Monitor heart rate"],
                ),
            ),
        ];

        let entries: BTreeMap<String, SymptomRecord> = table
            .into_iter()
            .map(|(symptom, record)| (symptom.to_string(), record))
            .collect();

        info!("Symptom knowledge base loaded: {} entries", entries.len());

        Self { entries }
    }

    pub fn get(&self, symptom: &str) -> Option<&SymptomRecord> {
        self.entries.get(symptom)
    }

    /// Iterate symptom/record pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymptomRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Known symptom keys, in key order.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the matcher against this knowledge base.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        analyze_symptoms(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_has_expected_size() {
        let db = SymptomDb::embedded();
        assert_eq!(db.len(), 29);
        assert!(!db.is_empty());
    }

    #[test]
    fn keys_are_nonempty_lowercase() {
        let db = SymptomDb::embedded();
        for symptom in db.symptoms() {
            assert!(!symptom.is_empty());
            assert_eq!(symptom, symptom.to_lowercase());
        }
    }

    #[test]
    fn every_record_field_is_a_nonempty_set_of_nonempty_strings() {
        let db = SymptomDb::embedded();
        for (symptom, record) in db.iter() {
            for set in [&record.precautions, &record.medicines, &record.tips] {
                assert!(!set.is_empty(), "empty advice set for {symptom}");
                assert!(set.iter().all(|s| !s.is_empty()));
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        let db = SymptomDb::embedded();
        let headache = db.get("headache").unwrap();
        assert!(headache.medicines.contains("Ibuprofen"));
        assert!(db.get("time travel sickness").is_none());
    }
}
