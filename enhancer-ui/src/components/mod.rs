mod error_display;
mod loading_spinner;
mod prompt_form;
mod result_display;
mod settings_panel;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use prompt_form::PromptForm;
pub use result_display::{escape_html, markdown_to_html, ResultDisplay};
pub use settings_panel::SettingsPanel;
