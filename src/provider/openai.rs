use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::errors::CompletionError;

const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// OpenAI-compatible chat completions adapter. Returns the first choice's
/// message content verbatim.
pub struct OpenAi {
    model: String,
    api_key: String,
    api_base: String,
    timeout: Duration,
    client: Client,
}

impl OpenAi {
    pub fn new(model: String, api_key: String, timeout_secs: u64, api_base: Option<String>) -> Self {
        Self {
            model,
            api_key,
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl super::Provider for OpenAi {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": 0.7
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| super::transport_error("openai", self.timeout, e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| super::transport_error("openai", self.timeout, e))?;

        if !status.is_success() {
            return Err(CompletionError::Provider(format!(
                "OpenAI API error ({status}): {text}"
            )));
        }

        // Minimal structs to parse the chat response
        #[derive(Deserialize)]
        struct ChatMessage {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }
        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::Provider(format!("OpenAI response parse error: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(CompletionError::Provider("OpenAI returned an empty completion".into()));
        }
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
