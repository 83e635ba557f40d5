use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::cli::ProviderKind;
use crate::errors::CompletionError;

pub mod anthropic;
pub mod ollama;
pub mod openai;

/// A chat-completion backend. Adapters hand the model text back untouched;
/// classifying the failure and recovering from it is the caller's business.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
    fn name(&self) -> &'static str;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(
    kind: ProviderKind,
    model: String,
    timeout_secs: u64,
    endpoint: Option<String>,
) -> Result<DynProvider> {
    match kind {
        ProviderKind::OpenAI => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| anyhow!("OPENAI_API_KEY env var is not set"))?;
            Ok(Box::new(openai::OpenAi::new(model, api_key, timeout_secs, endpoint)))
        }
        ProviderKind::Anthropic => {
            let api_key = std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| anyhow!("ANTHROPIC_API_KEY env var is not set"))?;
            Ok(Box::new(anthropic::Anthropic::new(model, api_key, timeout_secs, endpoint)))
        }
        ProviderKind::Ollama => Ok(Box::new(ollama::Ollama::new(model, timeout_secs, endpoint))),
    }
}

/// Expired deadlines become `Timeout`; everything else the transport can
/// throw becomes a provider failure with the cause preserved.
fn transport_error(provider: &str, timeout: Duration, e: reqwest::Error) -> CompletionError {
    if e.is_timeout() {
        CompletionError::Timeout(timeout)
    } else {
        CompletionError::Provider(format!("{provider} request failed: {e}"))
    }
}
