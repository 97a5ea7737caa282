//! Ephemeral diagnosis-request store.
//!
//! Requests live in process memory only and vanish on restart; the
//! service is a stateless triage front end, not a medical record
//! system. The lock is held for map operations only, never across an
//! await point.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{DiagnosisInput, DiagnosisRecord, DiagnosisReport};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Diagnosis request not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Internal lock error")]
    LockPoisoned,
}

/// In-memory store of diagnosis requests keyed by id.
pub struct DiagnosisStore {
    records: RwLock<HashMap<Uuid, DiagnosisRecord>>,
}

impl DiagnosisStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create and insert a record for a validated intake. `results`
    /// starts empty; [`Self::attach_results`] fills it after analysis.
    pub fn create(&self, input: &DiagnosisInput) -> Result<DiagnosisRecord, StoreError> {
        let record = DiagnosisRecord {
            id: Uuid::new_v4(),
            primary_symptom: input.primary_symptom.clone(),
            associated_symptoms: input.associated_symptoms.clone(),
            age: input.age,
            gender: input.gender.clone(),
            results: None,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(record.id, record.clone());
        Ok(record)
    }

    /// Attach the finished report to an existing record.
    ///
    /// A missing id is an internal inconsistency: the handler created
    /// the record moments earlier in the same request.
    pub fn attach_results(
        &self,
        id: Uuid,
        report: DiagnosisReport,
    ) -> Result<DiagnosisRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let record = records.get_mut(&id).ok_or(StoreError::RecordNotFound(id))?;
        record.results = Some(report);
        Ok(record.clone())
    }

    pub fn get(&self, id: Uuid) -> Result<Option<DiagnosisRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    /// The `limit` most recent records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<DiagnosisRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut all: Vec<DiagnosisRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit);
        Ok(all)
    }
}

impl Default for DiagnosisStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EvidenceLevel, Gender};

    fn sample_input(primary: &str) -> DiagnosisInput {
        DiagnosisInput {
            primary_symptom: primary.into(),
            associated_symptoms: vec!["fatigue".into()],
            age: Some(44),
            gender: Some(Gender::Other),
        }
    }

    fn sample_report() -> DiagnosisReport {
        DiagnosisReport {
            summary: "test summary".into(),
            results: vec![],
            recommendations: vec![],
            analysis_timestamp: "2026-02-03T10:00:00Z".into(),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = DiagnosisStore::new();
        let record = store.create(&sample_input("chest pain")).unwrap();

        let fetched = store.get(record.id).unwrap().unwrap();
        assert_eq!(fetched.primary_symptom, "chest pain");
        assert_eq!(fetched.age, Some(44));
        assert!(fetched.results.is_none());
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = DiagnosisStore::new();
        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn attach_results_updates_the_record() {
        let store = DiagnosisStore::new();
        let record = store.create(&sample_input("fever")).unwrap();

        let updated = store.attach_results(record.id, sample_report()).unwrap();
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.results.unwrap().summary, "test summary");

        // The stored copy was updated too, not just the returned one.
        let fetched = store.get(record.id).unwrap().unwrap();
        assert!(fetched.results.is_some());
    }

    #[test]
    fn attach_results_to_unknown_id_errors() {
        let store = DiagnosisStore::new();
        let err = store.attach_results(Uuid::new_v4(), sample_report()).unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound(_)));
    }

    #[test]
    fn recent_returns_newest_first_up_to_limit() {
        let store = DiagnosisStore::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let mut record = store.create(&sample_input(&format!("symptom {i}"))).unwrap();
            // Spread creation times so ordering is deterministic.
            record.created_at = Utc::now() + chrono::Duration::seconds(i);
            store
                .records
                .write()
                .unwrap()
                .insert(record.id, record.clone());
            ids.push(record.id);
        }

        let recent = store.recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id, ids[4]);
        assert_eq!(recent[1].id, ids[3]);
        assert_eq!(recent[2].id, ids[2]);
    }

    #[test]
    fn recent_with_large_limit_returns_everything() {
        let store = DiagnosisStore::new();
        store.create(&sample_input("a")).unwrap();
        store.create(&sample_input("b")).unwrap();
        assert_eq!(store.recent(100).unwrap().len(), 2);
    }

    #[test]
    fn annotated_results_survive_storage() {
        let store = DiagnosisStore::new();
        let record = store.create(&sample_input("headache")).unwrap();

        let mut report = sample_report();
        report.results = vec![crate::reference::annotate(&crate::models::DiagnosisCandidate {
            condition: "Migraine".into(),
            probability: 85,
            explanation: "x".into(),
            urgency: crate::models::Urgency::Moderate,
            matching_symptoms: vec![],
            recommendations: vec![],
        })];

        let updated = store.attach_results(record.id, report).unwrap();
        let results = updated.results.unwrap().results;
        assert_eq!(results[0].evidence_level, EvidenceLevel::A);
        assert_eq!(results[0].icd10_code.as_ref().unwrap().code, "G43");
    }
}
