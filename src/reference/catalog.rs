//! Compiled-in reference catalog.
//!
//! Two ordered tables keyed by normalized (lower-case, trimmed)
//! condition names: ICD-10 classifications and textbook citations.
//! Coverage is deliberately partial: common presentations only; a miss
//! is an expected outcome, not an error.
//!
//! Slice order is load-bearing: the matcher scans front to back and the
//! first substring hit wins, so reordering or inserting entries changes
//! match results for ambiguous names.

use crate::models::{Icd10Code, MedicalCitation};

/// One ICD-10 catalog row.
pub struct CatalogCode {
    pub key: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl CatalogCode {
    pub fn to_code(&self) -> Icd10Code {
        Icd10Code {
            code: self.code.into(),
            description: self.description.into(),
            category: self.category.into(),
        }
    }
}

/// One citation catalog row: a condition key and the textbook chapters
/// that cover it.
pub struct CatalogCitations {
    pub key: &'static str,
    pub sources: &'static [CitationSource],
}

pub struct CitationSource {
    pub source: &'static str,
    pub locator: &'static str,
    pub edition: Option<&'static str>,
}

impl CitationSource {
    pub fn to_citation(&self) -> MedicalCitation {
        MedicalCitation {
            source: self.source.into(),
            locator: self.locator.into(),
            edition: self.edition.map(Into::into),
        }
    }
}

/// ICD-10 codes for frequently reported conditions, in match-priority
/// order.
pub const ICD10_CATALOG: &[CatalogCode] = &[
    // Cardiovascular
    CatalogCode { key: "myocardial infarction", code: "I21", description: "Acute myocardial infarction", category: "Cardiovascular" },
    CatalogCode { key: "angina", code: "I20", description: "Angina pectoris", category: "Cardiovascular" },
    CatalogCode { key: "hypertension", code: "I10", description: "Essential hypertension", category: "Cardiovascular" },
    CatalogCode { key: "heart failure", code: "I50", description: "Heart failure", category: "Cardiovascular" },
    CatalogCode { key: "atrial fibrillation", code: "I48", description: "Atrial fibrillation and flutter", category: "Cardiovascular" },
    // Respiratory
    CatalogCode { key: "pneumonia", code: "J18", description: "Pneumonia, unspecified organism", category: "Respiratory" },
    CatalogCode { key: "asthma", code: "J45", description: "Asthma", category: "Respiratory" },
    CatalogCode { key: "copd", code: "J44", description: "Chronic obstructive pulmonary disease", category: "Respiratory" },
    CatalogCode { key: "bronchitis", code: "J40", description: "Bronchitis, not specified as acute or chronic", category: "Respiratory" },
    // Gastrointestinal
    CatalogCode { key: "gastritis", code: "K29", description: "Gastritis and duodenitis", category: "Gastrointestinal" },
    CatalogCode { key: "peptic ulcer", code: "K27", description: "Peptic ulcer, site unspecified", category: "Gastrointestinal" },
    CatalogCode { key: "gastroenteritis", code: "K59.1", description: "Gastroenteritis and colitis", category: "Gastrointestinal" },
    CatalogCode { key: "appendicitis", code: "K37", description: "Unspecified appendicitis", category: "Gastrointestinal" },
    // Neurological
    CatalogCode { key: "migraine", code: "G43", description: "Migraine", category: "Neurological" },
    CatalogCode { key: "tension headache", code: "G44.2", description: "Tension-type headache", category: "Neurological" },
    CatalogCode { key: "seizure", code: "G40", description: "Epilepsy", category: "Neurological" },
    CatalogCode { key: "stroke", code: "I64", description: "Stroke, not specified", category: "Neurological" },
    // Endocrine
    CatalogCode { key: "diabetes mellitus", code: "E11", description: "Type 2 diabetes mellitus", category: "Endocrine" },
    CatalogCode { key: "hyperthyroidism", code: "E05", description: "Thyrotoxicosis", category: "Endocrine" },
    CatalogCode { key: "hypothyroidism", code: "E03", description: "Other hypothyroidism", category: "Endocrine" },
    // Infectious
    CatalogCode { key: "influenza", code: "J11", description: "Influenza due to unidentified influenza virus", category: "Infectious" },
    CatalogCode { key: "cellulitis", code: "L03", description: "Cellulitis and acute lymphangitis", category: "Infectious" },
    CatalogCode { key: "urinary tract infection", code: "N39.0", description: "Urinary tract infection", category: "Infectious" },
    // Musculoskeletal
    CatalogCode { key: "arthritis", code: "M19", description: "Other and unspecified osteoarthritis", category: "Musculoskeletal" },
    CatalogCode { key: "back pain", code: "M54.9", description: "Dorsalgia, unspecified", category: "Musculoskeletal" },
    CatalogCode { key: "fibromyalgia", code: "M79.3", description: "Panniculitis, unspecified", category: "Musculoskeletal" },
];

/// Standard textbook references, same key space and ordering rules as
/// [`ICD10_CATALOG`].
pub const CITATION_CATALOG: &[CatalogCitations] = &[
    // Cardiovascular conditions
    CatalogCitations {
        key: "myocardial infarction",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 295: ST-Elevation Myocardial Infarction", edition: Some("21st") },
            CitationSource { source: "Braunwald's Heart Disease", locator: "Chapter 60: STEMI", edition: Some("12th") },
        ],
    },
    CatalogCitations {
        key: "angina",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 293: Ischemic Heart Disease", edition: Some("21st") },
            CitationSource { source: "Braunwald's Heart Disease", locator: "Chapter 59: Stable Ischemic Heart Disease", edition: Some("12th") },
        ],
    },
    CatalogCitations {
        key: "hypertension",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 298: Hypertensive Vascular Disease", edition: Some("21st") },
            CitationSource { source: "Park's Textbook of Preventive and Social Medicine", locator: "Chapter 6: Epidemiology of Chronic Diseases", edition: Some("25th") },
        ],
    },
    // Respiratory conditions
    CatalogCitations {
        key: "pneumonia",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 149: Pneumonia", edition: Some("21st") },
            CitationSource { source: "Park's Textbook of Preventive and Social Medicine", locator: "Chapter 4: Epidemiology of Communicable Diseases", edition: Some("25th") },
        ],
    },
    CatalogCitations {
        key: "asthma",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 281: Asthma", edition: Some("21st") },
            CitationSource { source: "Park's Textbook of Preventive and Social Medicine", locator: "Chapter 6: Epidemiology of Chronic Diseases", edition: Some("25th") },
        ],
    },
    // Gastrointestinal conditions
    CatalogCitations {
        key: "gastritis",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 317: Peptic Ulcer Disease", edition: Some("21st") },
            CitationSource { source: "Sleisenger and Fordtran's Gastrointestinal Disease", locator: "Chapter 52: Gastritis", edition: Some("11th") },
        ],
    },
    CatalogCitations {
        key: "peptic ulcer",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 317: Peptic Ulcer Disease", edition: Some("21st") },
            CitationSource { source: "Sleisenger and Fordtran's Gastrointestinal Disease", locator: "Chapter 53: Peptic Ulcer Disease", edition: Some("11th") },
        ],
    },
    // Neurological conditions
    CatalogCitations {
        key: "migraine",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 422: Migraine", edition: Some("21st") },
            CitationSource { source: "Adams and Victor's Neurology", locator: "Chapter 10: Headache", edition: Some("12th") },
        ],
    },
    CatalogCitations {
        key: "stroke",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 419: Cerebrovascular Diseases", edition: Some("21st") },
            CitationSource { source: "Adams and Victor's Neurology", locator: "Chapter 34: Cerebrovascular Disease", edition: Some("12th") },
        ],
    },
    // Endocrine conditions
    CatalogCitations {
        key: "diabetes mellitus",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 396: Diabetes Mellitus", edition: Some("21st") },
            CitationSource { source: "Park's Textbook of Preventive and Social Medicine", locator: "Chapter 6: Epidemiology of Chronic Diseases", edition: Some("25th") },
        ],
    },
    // Infectious diseases
    CatalogCitations {
        key: "influenza",
        sources: &[
            CitationSource { source: "Harrison's Principles of Internal Medicine", locator: "Chapter 195: Influenza", edition: Some("21st") },
            CitationSource { source: "Park's Textbook of Preventive and Social Medicine", locator: "Chapter 4: Epidemiology of Communicable Diseases", edition: Some("25th") },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icd10_catalog_covers_expected_conditions() {
        assert_eq!(ICD10_CATALOG.len(), 26);
        // Declaration order is the match order; the cardiovascular block
        // leads and myocardial infarction is the very first key.
        assert_eq!(ICD10_CATALOG[0].key, "myocardial infarction");
        assert_eq!(ICD10_CATALOG[0].code, "I21");
    }

    #[test]
    fn citation_catalog_covers_expected_conditions() {
        assert_eq!(CITATION_CATALOG.len(), 11);
        // Every cited condition also has an ICD-10 entry.
        for entry in CITATION_CATALOG {
            assert!(
                ICD10_CATALOG.iter().any(|c| c.key == entry.key),
                "citation key {:?} missing from ICD-10 catalog",
                entry.key
            );
            assert!(!entry.sources.is_empty());
        }
    }

    #[test]
    fn keys_are_normalized() {
        for entry in ICD10_CATALOG {
            assert_eq!(entry.key, entry.key.trim().to_lowercase());
        }
        for entry in CITATION_CATALOG {
            assert_eq!(entry.key, entry.key.trim().to_lowercase());
        }
    }

    #[test]
    fn catalog_rows_convert_to_owned_models() {
        let code = ICD10_CATALOG[2].to_code();
        assert_eq!(code.code, "I10");
        assert_eq!(code.category, "Cardiovascular");

        let citation = CITATION_CATALOG[0].sources[0].to_citation();
        assert_eq!(citation.source, "Harrison's Principles of Internal Medicine");
        assert_eq!(citation.edition.as_deref(), Some("21st"));
    }

    #[test]
    fn categories_span_all_body_systems() {
        let mut categories: Vec<&str> = ICD10_CATALOG.iter().map(|c| c.category).collect();
        categories.dedup();
        assert_eq!(
            categories,
            [
                "Cardiovascular",
                "Respiratory",
                "Gastrointestinal",
                "Neurological",
                "Endocrine",
                "Infectious",
                "Musculoskeletal",
            ]
        );
    }
}
