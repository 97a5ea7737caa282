//! SymCheck — AI-assisted symptom triage service.
//!
//! Takes patient-reported symptoms over HTTP, asks a Gemini model for a
//! ranked differential diagnosis, and enriches every candidate
//! condition from a compiled-in medical reference catalog (ICD-10
//! codes, textbook citations, evidence levels, clinical guidelines)
//! before returning and storing the result.

pub mod api;
pub mod config;
pub mod llm;
pub mod models;
pub mod reference;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::{DiagnosisModel, GeminiClient};

/// Initialize tracing, build the service context from the environment,
/// and serve until Ctrl-C.
pub async fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let model = GeminiClient::from_env().map_err(|e| e.to_string())?;
    tracing::info!(model = %model.describe(), "Diagnosis model configured");

    let ctx = api::ApiContext::new(Arc::new(model));
    let mut server = api::start_server(ctx, config::bind_addr()).await?;
    tracing::info!(addr = %server.addr(), "SymCheck listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;

    tracing::info!("Shutdown requested");
    server.shutdown();
    Ok(())
}
