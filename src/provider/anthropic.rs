use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::CompletionError;

const DEFAULT_API_BASE: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Messages API adapter. Returns the first text block verbatim.
pub struct Anthropic {
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    pub api_base: String,
}

impl Anthropic {
    pub fn new(model: String, api_key: String, timeout_secs: u64, api_base: Option<String>) -> Self {
        Self {
            model,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }
}

#[derive(Serialize)]
struct MsgRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Msg<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MsgResponse {
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

#[async_trait]
impl Provider for Anthropic {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| CompletionError::Provider(format!("anthropic client build failed: {e}")))?;

        let body = MsgRequest {
            model: &self.model,
            max_tokens: 8192,
            messages: vec![Msg { role: "user", content: user }],
            system: Some(system),
        };

        let resp = client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| super::transport_error("anthropic", self.timeout, e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| super::transport_error("anthropic", self.timeout, e))?;

        if !status.is_success() {
            return Err(CompletionError::Provider(format!(
                "anthropic API error ({status}): {text}"
            )));
        }

        let parsed: MsgResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::Provider(format!("anthropic response parse error: {e}")))?;

        parsed
            .content
            .into_iter()
            .find(|b| b.r#type == "text" || !b.text.is_empty())
            .map(|b| b.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CompletionError::Provider("anthropic: empty content".into()))
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}
