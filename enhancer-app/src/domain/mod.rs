mod enhanced_prompt;
mod model;
mod prompt_input;
mod settings;

pub use enhanced_prompt::EnhancedPrompt;
pub use model::ModelId;
pub use prompt_input::PromptInput;
pub use settings::EnhancerSettings;
