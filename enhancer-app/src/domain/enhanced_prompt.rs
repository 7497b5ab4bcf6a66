use serde::{Deserialize, Serialize};

/// The text produced by one enhancement cycle. Either the model's reply or a
/// human-readable failure string; callers render it either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedPrompt {
    pub text: String,
}

impl EnhancedPrompt {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}
