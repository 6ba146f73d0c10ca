use serde::{Deserialize, Serialize};

/// Thin passthrough to an OpenAI-compatible chat completions endpoint.
/// Failures come back as opaque strings the routes surface verbatim.
#[derive(Clone)]
pub struct AiLayer {
    api_key: String,
    base_url: String,
    model: String,
    http: reqwest::Client,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: String::from("system"),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: String::from("user"),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChatMessage,
}

impl AiLayer {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            api_key,
            base_url,
            model,
            http: reqwest::Client::new(),
        }
    }

    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("AI request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("AI provider returned {status}: {body}"));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| format!("AI response decode failed: {e}"))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| String::from("AI provider returned no choices"))
    }

    pub async fn enhance(&self, text: String) -> Result<String, String> {
        let messages = vec![
            ChatMessage::system(
                "You improve form field labels and descriptions. \
                 Rewrite the given text to be clear and concise. \
                 Reply with the rewritten text only.",
            ),
            ChatMessage::user(text),
        ];

        self.chat(messages).await
    }

    pub async fn generate(&self, description: String) -> Result<String, String> {
        let messages = vec![
            ChatMessage::system(
                "You design web forms. Given a description, reply with a JSON \
                 array of form components. Each component has \"id\", \"type\" \
                 (text, email, number, select, textarea, checkbox), \"label\" \
                 and optional \"options\". Reply with JSON only, no prose.",
            ),
            ChatMessage::user(description),
        ];

        self.chat(messages).await
    }
}
