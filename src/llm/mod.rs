//! Differential-diagnosis model access.
//!
//! A blocking HTTP client for the Gemini `generateContent` REST API
//! behind the [`DiagnosisModel`] trait, plus the prompt that elicits the
//! structured differential and the parser that turns the model's reply
//! into typed results. Async callers bridge via
//! `tokio::task::spawn_blocking`.

pub mod client;
pub mod parser;
pub mod prompt;

use thiserror::Error;

pub use client::{DiagnosisModel, GeminiClient, MockModel};
pub use parser::parse_analysis;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Cannot reach model endpoint at {0}")]
    Connection(String),

    #[error("Model request timed out after {0}s")]
    Timeout(u64),

    #[error("Model endpoint returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Model returned an empty reply")]
    EmptyReply,

    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    #[error("Model reply failed validation: {0}")]
    InvalidReply(String),

    #[error("Model configuration error: {0}")]
    Config(String),
}
