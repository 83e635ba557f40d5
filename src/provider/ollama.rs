use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::CompletionError;

const DEFAULT_URL: &str = "http://localhost:11434";

/// Local chat adapter for development runs. No auth, no metered cost, but it
/// goes through the same completion contract as the hosted providers.
pub struct Ollama {
    pub model: String,
    pub url: String,
    pub timeout: Duration,
}

impl Ollama {
    pub fn new(model: String, timeout_secs: u64, url: Option<String>) -> Self {
        Self {
            model,
            url: url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: String,
}

#[async_trait]
impl Provider for Ollama {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let url = format!("{}/api/chat", self.url.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| CompletionError::Provider(format!("ollama client build failed: {e}")))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Msg { role: "system", content: system },
                Msg { role: "user", content: user },
            ],
            stream: false,
            options: OllamaOptions { temperature: 0.7 },
        };

        let resp = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| super::transport_error("ollama", self.timeout, e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| super::transport_error("ollama", self.timeout, e))?;

        if !status.is_success() {
            return Err(CompletionError::Provider(format!(
                "ollama API error ({status}): {text}"
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::Provider(format!("ollama response parse error: {e}")))?;

        if parsed.message.content.is_empty() {
            return Err(CompletionError::Provider("ollama returned an empty completion".into()));
        }
        Ok(parsed.message.content)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
