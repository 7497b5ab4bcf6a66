use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("role, context, and task are all required")]
    IncompleteInput,

    #[error("{0}")]
    CompletionFailed(String),

    #[error("no completion choices returned")]
    EmptyCompletion,
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::IncompleteInput => "Please fill in all fields (Role, Context, and Task).",
            Self::CompletionFailed(_) => "The enhancement request failed. Check your API key and try again.",
            Self::EmptyCompletion => "The model returned an empty response. Try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_user_message() {
        assert_eq!(
            AppError::IncompleteInput.user_message(),
            "Please fill in all fields (Role, Context, and Task)."
        );
    }

    #[test]
    fn test_completion_failed_displays_description() {
        let err = AppError::CompletionFailed("API error: 401 Unauthorized".to_string());
        assert_eq!(err.to_string(), "API error: 401 Unauthorized");
    }
}
