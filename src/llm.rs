use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Client for an OpenAI-compatible chat completion endpoint (Groq in
/// production). One user-role message in, the first choice's content out.
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient {
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.groq_api_key, &config.llm_base_url, &config.llm_model)
    }

    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        CompletionClient {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Sends `prompt` as a single user message and returns the completion
    /// text. Missing or empty content comes back as an empty string; the
    /// caller decides whether that is an error.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, "requesting chat completion");

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(anyhow!(
                "completion API error: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}
