//! Medical reference annotation.
//!
//! Takes the model's ranked differential and enriches each candidate
//! condition from a curated, compiled-in catalog: ICD-10 classification,
//! textbook citations, an evidence level, and clinical guideline names.
//! The model's own judgments (probability, urgency, explanation) are
//! never altered; annotation only adds.
//!
//! Everything here is pure and total: lookups degrade to absent/empty,
//! never to an error, so the module has no error type. Callers guarantee
//! well-formed candidates (non-empty condition, probability 0–100);
//! the API's parse boundary enforces that contract.

pub mod annotate;
pub mod catalog;
pub mod evidence;
pub mod matcher;

pub use annotate::{annotate, annotate_all};
pub use evidence::assign_evidence_level;
pub use matcher::{citations_for, resolve_code};

/// Canonical form for catalog comparison: trimmed and lower-cased.
pub(crate) fn normalize(condition: &str) -> String {
    condition.trim().to_lowercase()
}
