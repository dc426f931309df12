use async_trait::async_trait;
use serde::Deserialize;

use crate::config::InferenceConfig;
use crate::error::InferenceError;

/// Something that turns a prompt into a completion.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for Ollama's non-streaming `/api/generate` endpoint.
///
/// One request per call. No retries, and no timeout beyond reqwest's defaults.
pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false
        });

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "calling inference service");
        let resp = self.http.post(&self.endpoint).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(InferenceError::Unavailable(format!(
                "inference service returned {}",
                status
            )));
        }

        // Completion is passed through as-is, even when empty.
        let data: GenerateResponse = resp.json().await?;
        Ok(data.response)
    }
}
