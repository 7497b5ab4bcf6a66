use std::fmt;

use crate::domain::ModelId;

/// Per-submission configuration from the sidebar. Read fresh at submit time,
/// never persisted.
#[derive(Clone, Default)]
pub struct EnhancerSettings {
    pub api_key: String,
    pub model: ModelId,
}

impl EnhancerSettings {
    pub fn new(api_key: String, model: ModelId) -> Self {
        Self { api_key, model }
    }
}

// The API key must never reach logs, so Debug redacts it.
impl fmt::Debug for EnhancerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnhancerSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = EnhancerSettings::new("sk-secret-123".to_string(), ModelId::Gpt4o);
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("sk-secret-123"));
        assert!(rendered.contains("<redacted>"));
    }
}
