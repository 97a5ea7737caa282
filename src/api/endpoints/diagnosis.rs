//! Diagnosis endpoints.
//!
//! Three endpoints:
//! - `POST /api/diagnosis` — run the full intake → model → annotation flow
//! - `GET /api/diagnosis/:id` — fetch one stored request
//! - `GET /api/diagnosis?limit=N` — recent requests, newest first

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::llm::{parser, prompt};
use crate::models::{DiagnosisInput, DiagnosisRecord, DiagnosisReport};
use crate::reference;

/// Wire shape of a completed analysis: the record id plus the report
/// fields at the top level, as the form client expects.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub report: DiagnosisReport,
}

/// `POST /api/diagnosis` — generate an annotated differential.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(input): Json<DiagnosisInput>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    // Validate
    if input.primary_symptom.trim().is_empty() {
        return Err(ApiError::BadRequest("Primary symptom is required".into()));
    }
    if let Some(age) = input.age {
        if !(1..=120).contains(&age) {
            return Err(ApiError::BadRequest(
                "Age must be between 1 and 120".into(),
            ));
        }
    }

    let record = ctx.store.create(&input)?;
    tracing::info!(id = %record.id, "Diagnosis request created");

    // The model call is blocking HTTP; keep it off the async workers.
    let user_prompt = prompt::build_diagnosis_prompt(&input, &Utc::now().to_rfc3339());
    let model = ctx.model.clone();
    let reply = tokio::task::spawn_blocking(move || {
        model.generate(prompt::DIAGNOSIS_SYSTEM_PROMPT, &user_prompt)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Model task failed: {e}")))??;

    let analysis = parser::parse_analysis(&reply)?;
    tracing::info!(
        id = %record.id,
        candidates = analysis.results.len(),
        "Differential received from model"
    );

    let report = DiagnosisReport {
        summary: analysis.summary,
        results: reference::annotate_all(&analysis.results),
        recommendations: analysis.recommendations,
        analysis_timestamp: if analysis.analysis_timestamp.is_empty() {
            Utc::now().to_rfc3339()
        } else {
            analysis.analysis_timestamp
        },
    };

    let updated = ctx.store.attach_results(record.id, report.clone())?;

    Ok(Json(AnalyzeResponse {
        id: updated.id,
        report,
    }))
}

/// `GET /api/diagnosis/:id` — fetch one stored diagnosis request.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DiagnosisRecord>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid diagnosis id".into()))?;

    match ctx.store.get(id)? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound("Diagnosis not found".into())),
    }
}

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// `GET /api/diagnosis` — recent diagnosis requests.
pub async fn recent(
    State(ctx): State<ApiContext>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<DiagnosisRecord>>, ApiError> {
    // limit=0 falls back to the default, like an absent parameter.
    let limit = query.limit.filter(|l| *l > 0).unwrap_or(10);
    Ok(Json(ctx.store.recent(limit)?))
}
