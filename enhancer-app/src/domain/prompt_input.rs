use enhancer_errors::AppError;
use serde::{Deserialize, Serialize};

/// One atomic snapshot of the three form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptInput {
    pub role: String,
    pub context: String,
    pub task: String,
}

impl PromptInput {
    pub fn new(role: String, context: String, task: String) -> Self {
        Self {
            role,
            context,
            task,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.role.is_empty() && !self.context.is_empty() && !self.task.is_empty()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(AppError::IncompleteInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(role: &str, context: &str, task: &str) -> PromptInput {
        PromptInput::new(role.to_string(), context.to_string(), task.to_string())
    }

    #[test]
    fn test_complete_input_validates() {
        assert!(input("a data scientist", "churn analysis", "make a plan")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_any_empty_field_is_rejected() {
        assert!(matches!(
            input("", "x", "y").validate(),
            Err(AppError::IncompleteInput)
        ));
        assert!(matches!(
            input("x", "", "y").validate(),
            Err(AppError::IncompleteInput)
        ));
        assert!(matches!(
            input("x", "y", "").validate(),
            Err(AppError::IncompleteInput)
        ));
    }
}
