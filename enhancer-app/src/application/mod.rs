mod enhance_prompt;

pub use enhance_prompt::{EnhancePrompt, MISSING_API_KEY_MESSAGE};
