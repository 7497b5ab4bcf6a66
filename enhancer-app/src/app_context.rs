use crate::application::EnhancePrompt;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub enhance_prompt: Arc<EnhancePrompt>,
}

impl AppContext {
    // The credential arrives with each submission, so nothing is read from
    // the environment here.
    pub fn new() -> Self {
        Self {
            enhance_prompt: Arc::new(EnhancePrompt::new()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
