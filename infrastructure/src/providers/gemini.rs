//! Gemini backend adapter

use super::status_to_error;
use async_trait::async_trait;
use oath_application::ports::text_generator::{GeneratorError, TextGenerator};
use serde_json::{Value, json};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text generator backed by the Gemini `generateContent` API
pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-pro-latest";

    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    /// Override the API host, e.g. for a proxy or a test server.
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                { "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "temperature": 1.0,
                "topP": 0.95,
                "topK": 0,
                "maxOutputTokens": 8192
            },
            "safetySettings": [
                { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" }
            ]
        })
    }

    /// Pull the generated text out of a `generateContent` response:
    /// `candidates[0].content.parts[*].text`, concatenated.
    fn extract_text(response: &Value) -> Result<String, GeneratorError> {
        let candidates = response
            .get("candidates")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                GeneratorError::MalformedResponse("no candidates in response".to_string())
            })?;

        let candidate = candidates.first().ok_or_else(|| {
            GeneratorError::MalformedResponse("empty candidates list".to_string())
        })?;

        let parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
            GeneratorError::MalformedResponse("candidate has no content parts".to_string())
        })?;

        let text: String = parts
            .iter()
            .filter_map(|p| p["text"].as_str())
            .collect();

        if text.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = self.endpoint();

        debug!(model = %self.model, "calling Gemini generateContent");

        let response = self
            .http
            .post(&url)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| GeneratorError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_to_error(status, body));
        }

        let value: Value = response.json().await.map_err(|e| {
            GeneratorError::MalformedResponse(format!("failed to parse response: {}", e))
        })?;

        Self::extract_text(&value)
    }
}
