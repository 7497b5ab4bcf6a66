use crate::domain::{EnhancedPrompt, EnhancerSettings, PromptInput};
use crate::infrastructure::openai::OpenAiClient;
use enhancer_errors::AppError;

pub const MISSING_API_KEY_MESSAGE: &str = "Please enter your OpenAI API key in the sidebar.";

/// One submit-to-render cycle. Checks run in a fixed order: field
/// completeness, then credential presence, then the single network call.
pub struct EnhancePrompt {
    client: OpenAiClient,
}

impl EnhancePrompt {
    pub fn new() -> Self {
        Self {
            client: OpenAiClient::new(),
        }
    }

    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        input: &PromptInput,
        settings: &EnhancerSettings,
    ) -> Result<EnhancedPrompt, AppError> {
        input.validate()?;

        if settings.api_key.is_empty() {
            return Ok(EnhancedPrompt::new(MISSING_API_KEY_MESSAGE.to_string()));
        }

        tracing::info!(model = %settings.model, "requesting prompt enhancement");

        let text = match self
            .client
            .enhance(&settings.api_key, settings.model, input)
            .await
        {
            Ok(text) => text,
            Err(e) => format!("Error: {}", e),
        };

        Ok(EnhancedPrompt::new(text))
    }
}

impl Default for EnhancePrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelId;

    fn complete_input() -> PromptInput {
        PromptInput::new(
            "You are a data scientist".to_string(),
            "churn analysis project".to_string(),
            "build an analysis plan".to_string(),
        )
    }

    #[tokio::test]
    async fn test_incomplete_input_beats_missing_key() {
        let use_case = EnhancePrompt::new();
        let input = PromptInput::new(String::new(), "x".to_string(), "y".to_string());
        let settings = EnhancerSettings::new(String::new(), ModelId::Gpt4o);

        let result = use_case.execute(&input, &settings).await;
        assert!(matches!(result, Err(AppError::IncompleteInput)));
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let use_case = EnhancePrompt::new();
        let settings = EnhancerSettings::new(String::new(), ModelId::Gpt4o);

        let enhanced = use_case
            .execute(&complete_input(), &settings)
            .await
            .unwrap();
        assert_eq!(enhanced.text, MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_completion_failure_becomes_error_text() {
        // Port 9 (discard) is not listening, so the call fails without
        // leaving the machine.
        let client = OpenAiClient::with_endpoint("http://127.0.0.1:9/v1/chat/completions".to_string());
        let use_case = EnhancePrompt::with_client(client);
        let settings = EnhancerSettings::new("sk-test".to_string(), ModelId::Gpt35Turbo);

        let enhanced = use_case
            .execute(&complete_input(), &settings)
            .await
            .unwrap();
        assert!(enhanced.text.starts_with("Error: "));
    }
}
