use serde::{Deserialize, Serialize};

use super::ModelError;
use crate::config;

/// A model that can run the differential-diagnosis prompt.
///
/// Implementations are blocking; async callers wrap invocations in
/// `tokio::task::spawn_blocking`.
pub trait DiagnosisModel: Send + Sync {
    /// Run the prompt and return the model's raw text reply.
    fn generate(&self, system: &str, prompt: &str) -> Result<String, ModelError>;

    /// Human-readable identifier for health reporting and logs.
    fn describe(&self) -> String;
}

/// HTTP client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a client against an explicit endpoint.
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Build a client from `GEMINI_API_KEY` / `GEMINI_BASE_URL` /
    /// `GEMINI_MODEL`. The key is required; the rest default to the
    /// public endpoint and [`config::DEFAULT_GEMINI_MODEL`].
    pub fn from_env() -> Result<Self, ModelError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ModelError::Config("GEMINI_API_KEY environment variable is required but not set".into()))?;
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| config::DEFAULT_GEMINI_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| config::DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self::new(&base_url, &api_key, &model, config::MODEL_TIMEOUT_SECS))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Forces the model to answer with a JSON document instead of prose.
#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ReplyCandidate>,
}

#[derive(Deserialize)]
struct ReplyCandidate {
    content: Option<ReplyContent>,
}

#[derive(Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

impl DiagnosisModel for GeminiClient {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part { text: system }],
            },
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        // The key travels in a header, never in the URL, so it cannot
        // leak through request logs.
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ModelError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ModelError::Timeout(self.timeout_secs)
                } else {
                    ModelError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| ModelError::MalformedReply(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ModelError::EmptyReply);
        }

        Ok(text)
    }

    fn describe(&self) -> String {
        format!("gemini/{}", self.model)
    }
}

/// Mock model for testing — returns a configured reply or failure.
pub struct MockModel {
    reply: Result<String, String>,
}

impl MockModel {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
        }
    }
}

impl DiagnosisModel for MockModel {
    fn generate(&self, _system: &str, _prompt: &str) -> Result<String, ModelError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ModelError::Connection(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "mock".into()
    }
}
