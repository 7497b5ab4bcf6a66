mod home;

pub use home::{enhance_prompt, EnhancePromptFn, HomePage};
