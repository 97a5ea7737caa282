//! Domain types shared across the API, provider client and reference
//! annotation layers.
//!
//! Wire-facing structs keep the camelCase field names the original web
//! form client speaks; Rust code uses snake_case via serde renames.

pub mod diagnosis;
pub mod enums;

pub use diagnosis::{
    AnnotatedDiagnosis, DiagnosisAnalysis, DiagnosisCandidate, DiagnosisInput, DiagnosisRecord,
    DiagnosisReport, Icd10Code, MedicalCitation,
};
pub use enums::{EnumParseError, EvidenceLevel, Gender, Urgency};
