//! Per-candidate enrichment: code + citations + evidence level +
//! guideline triggers, assembled into an [`AnnotatedDiagnosis`].

use crate::models::{AnnotatedDiagnosis, DiagnosisCandidate};

use super::{evidence, matcher, normalize};

/// Clinical guideline triggers: a keyword contained in the normalized
/// condition name pulls the guideline into the annotation.
const GUIDELINE_TRIGGERS: &[(&str, &str)] = &[
    ("hypertension", "ACC/AHA Hypertension Guidelines 2017"),
    ("diabetes", "ADA Standards of Medical Care in Diabetes 2024"),
    ("pneumonia", "IDSA/ATS Community-Acquired Pneumonia Guidelines"),
];

/// Enrich one model candidate with reference metadata.
///
/// Pure and total: the candidate's own fields pass through unchanged,
/// and every lookup degrades to absent/empty rather than failing.
pub fn annotate(candidate: &DiagnosisCandidate) -> AnnotatedDiagnosis {
    let icd10_code = matcher::resolve_code(&candidate.condition);
    let citations = matcher::citations_for(&candidate.condition);
    let evidence_level =
        evidence::assign_evidence_level(&candidate.condition, candidate.probability);

    let normalized = normalize(&candidate.condition);
    let guidelines: Vec<String> = GUIDELINE_TRIGGERS
        .iter()
        .filter(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, guideline)| (*guideline).to_string())
        .collect();

    AnnotatedDiagnosis {
        candidate: candidate.clone(),
        icd10_code,
        citations,
        evidence_level,
        clinical_guidelines: (!guidelines.is_empty()).then_some(guidelines),
    }
}

/// Annotate a full differential element-wise, preserving order and
/// count exactly.
pub fn annotate_all(candidates: &[DiagnosisCandidate]) -> Vec<AnnotatedDiagnosis> {
    candidates.iter().map(annotate).collect()
}
