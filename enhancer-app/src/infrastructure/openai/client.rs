use super::prompt::build_enhancement_prompt;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::{ModelId, PromptInput};
use enhancer_errors::AppError;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct OpenAiClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self::with_endpoint(OPENAI_API_URL.to_string())
    }

    /// Endpoint override for tests; production callers use `new`.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// One chat-completion call, one attempt. The caller has already checked
    /// that the key is present.
    pub async fn enhance(
        &self,
        api_key: &str,
        model: ModelId,
        input: &PromptInput,
    ) -> Result<String, AppError> {
        let prompt = build_enhancement_prompt(input);
        let request = ChatCompletionRequest::new(model.name(), prompt);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::CompletionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI error: {} - {}", status, body);
            return Err(AppError::CompletionFailed(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::CompletionFailed(e.to_string()))?;

        completion.first_text().ok_or(AppError::EmptyCompletion)
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}
