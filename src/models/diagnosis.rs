use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{EvidenceLevel, Gender, Urgency};

/// Patient-reported symptom intake, as submitted by the web form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisInput {
    pub primary_symptom: String,
    #[serde(default)]
    pub associated_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// One ranked condition from the model's differential.
///
/// Only `condition` and `probability` drive the reference annotation;
/// the remaining fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisCandidate {
    pub condition: String,
    /// Likelihood estimate in percent, 0–100 (enforced at the parse
    /// boundary, assumed valid past it).
    pub probability: u8,
    pub explanation: String,
    pub urgency: Urgency,
    #[serde(default)]
    pub matching_symptoms: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// ICD-10 classification for a recognized condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icd10Code {
    pub code: String,
    pub description: String,
    pub category: String,
}

/// A textbook citation backing a condition. `source` is the textbook
/// title, `locator` the chapter reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCitation {
    pub source: String,
    pub locator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
}

/// A diagnosis candidate enriched with reference metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedDiagnosis {
    #[serde(flatten)]
    pub candidate: DiagnosisCandidate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd10_code: Option<Icd10Code>,
    #[serde(default)]
    pub citations: Vec<MedicalCitation>,
    pub evidence_level: EvidenceLevel,
    /// Omitted from JSON entirely when no guideline triggered, matching
    /// the wire format the form client already handles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_guidelines: Option<Vec<String>>,
}

/// The model's differential analysis as parsed from its JSON reply,
/// before reference annotation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisAnalysis {
    pub summary: String,
    pub results: Vec<DiagnosisCandidate>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub analysis_timestamp: String,
}

/// The finished analysis returned to the client and stored on the
/// request record: the model's differential with every candidate
/// annotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    pub summary: String,
    pub results: Vec<AnnotatedDiagnosis>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub analysis_timestamp: String,
}

/// A stored intake request. `results` stays `None` until the analysis
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    pub id: Uuid,
    pub primary_symptom: String,
    pub associated_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub results: Option<DiagnosisReport>,
    pub created_at: DateTime<Utc>,
}
