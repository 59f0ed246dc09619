//! OpenAI backend adapter

use super::status_to_error;
use async_trait::async_trait;
use oath_application::ports::text_generator::{GeneratorError, TextGenerator};
use serde_json::{Value, json};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Text generator backed by the OpenAI chat completions API
pub struct OpenAiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";

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
        format!("{}/chat/completions", self.base_url)
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": 1.0
        })
    }

    /// Pull the generated text out of a chat completion:
    /// `choices[0].message.content`.
    fn extract_text(response: &Value) -> Result<String, GeneratorError> {
        let choices = response
            .get("choices")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                GeneratorError::MalformedResponse("no choices in response".to_string())
            })?;

        let content = choices
            .first()
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| {
                GeneratorError::MalformedResponse("choice has no message content".to_string())
            })?;

        if content.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = self.endpoint();

        debug!(model = %self.model, "calling OpenAI chat completions");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_routes_requests_to_that_host() {
        let generator = OpenAiGenerator::with_base_url(
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
            "http://localhost:8080/v1".to_string(),
        );
        assert_eq!(
            generator.endpoint(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_generate_against_unreachable_host_is_unavailable() {
        let generator = OpenAiGenerator::with_base_url(
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
            "http://127.0.0.1:1".to_string(),
        );
        assert!(matches!(
            generator.generate("hi").await,
            Err(GeneratorError::Unavailable(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let generator =
            OpenAiGenerator::new("sk-test".to_string(), "gpt-4o-mini".to_string());
        let body = generator.request_body("write copy");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "write copy");
    }

    #[test]
    fn test_extract_text_from_valid_response() {
        let response = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "COPY" } }
            ]
        });
        assert_eq!(OpenAiGenerator::extract_text(&response).unwrap(), "COPY");
    }

    #[test]
    fn test_extract_text_missing_choices() {
        let response = json!({ "id": "chatcmpl-1" });
        assert!(matches!(
            OpenAiGenerator::extract_text(&response),
            Err(GeneratorError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_text_blank_content_is_empty_response() {
        let response = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "" } }
            ]
        });
        assert!(matches!(
            OpenAiGenerator::extract_text(&response),
            Err(GeneratorError::EmptyResponse)
        ));
    }
}
