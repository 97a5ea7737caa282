//! Evidence-level grading.
//!
//! Grades follow the usual clinical shorthand:
//!   A — randomized controlled trials, meta-analyses
//!   B — well-designed clinical studies
//!   C — case series, expert committee reports
//!   Expert Opinion — clinical experience
//!
//! The assignment below is a fixed triage heuristic over condition
//! identity and model probability, not a literature lookup. Thresholds
//! and keyword sets are business rules reproduced as-is.

use crate::models::EvidenceLevel;

use super::normalize;

/// Conditions whose standard workups carry trial-grade evidence.
const HIGH_EVIDENCE_CONDITIONS: &[&str] = &[
    "myocardial infarction",
    "hypertension",
    "diabetes mellitus",
    "pneumonia",
    "asthma",
    "stroke",
    "migraine",
];

const MODERATE_EVIDENCE_CONDITIONS: &[&str] = &[
    "angina",
    "gastritis",
    "peptic ulcer",
    "influenza",
    "arthritis",
];

/// Assign an evidence level from condition identity and probability.
///
/// Branches are evaluated in order and the first hit wins; keyword
/// matching is name-contains-keyword only.
pub fn assign_evidence_level(condition: &str, probability: u8) -> EvidenceLevel {
    let normalized = normalize(condition);

    if probability >= 80
        && HIGH_EVIDENCE_CONDITIONS.iter().any(|c| normalized.contains(c))
    {
        EvidenceLevel::A
    } else if probability >= 60
        && MODERATE_EVIDENCE_CONDITIONS.iter().any(|c| normalized.contains(c))
    {
        EvidenceLevel::B
    } else if probability >= 40 {
        EvidenceLevel::C
    } else {
        EvidenceLevel::ExpertOpinion
    }
}
