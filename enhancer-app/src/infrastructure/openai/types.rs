use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are an expert at creating effective AI prompts.";

const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: MessageContent,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub content: String,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        }
    }
}

impl ChatCompletionResponse {
    pub fn first_text(&self) -> Option<String> {
        self.choices.first().map(|c| c.message.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatCompletionRequest::new("gpt-4o", "enhance this".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "enhance this");
    }

    #[test]
    fn test_first_text_extraction() {
        let body = r#"{"choices":[{"message":{"content":"PROMPT: improved"}},{"message":{"content":"second"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("PROMPT: improved"));
    }

    #[test]
    fn test_first_text_empty_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(response.first_text().is_none());
    }
}
