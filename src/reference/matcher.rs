//! Condition-name resolution against the reference catalog.
//!
//! Exact key match first, then a front-to-back substring scan where
//! either side containing the other counts as a hit. First hit wins and
//! ambiguity is not disambiguated further. A short key like "back pain"
//! will match inside any longer phrase that mentions it, which trades
//! precision for recall on free-text model output. The tests pin that
//! behavior so a change here is a conscious one.

use crate::models::{Icd10Code, MedicalCitation};

use super::catalog::{CITATION_CATALOG, ICD10_CATALOG};
use super::normalize;

/// Resolve a free-text condition name to an ICD-10 classification.
/// `None` means the catalog simply does not cover the condition.
pub fn resolve_code(condition: &str) -> Option<Icd10Code> {
    let normalized = normalize(condition);

    // Direct match
    if let Some(entry) = ICD10_CATALOG.iter().find(|e| e.key == normalized) {
        return Some(entry.to_code());
    }

    // Partial match for complex condition names
    ICD10_CATALOG
        .iter()
        .find(|e| normalized.contains(e.key) || e.key.contains(normalized.as_str()))
        .map(|e| e.to_code())
}

/// Textbook citations for a condition; empty when uncovered.
pub fn citations_for(condition: &str) -> Vec<MedicalCitation> {
    let normalized = normalize(condition);

    if let Some(entry) = CITATION_CATALOG.iter().find(|e| e.key == normalized) {
        return entry.sources.iter().map(|s| s.to_citation()).collect();
    }

    CITATION_CATALOG
        .iter()
        .find(|e| normalized.contains(e.key) || e.key.contains(normalized.as_str()))
        .map(|e| e.sources.iter().map(|s| s.to_citation()).collect())
        .unwrap_or_default()
}
