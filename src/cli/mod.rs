use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;

#[derive(ValueEnum, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "open-ai", alias = "openai")]
    OpenAI,
    #[value(alias = "anthropic")]
    Anthropic,
    #[value(alias = "ollama")]
    Ollama,
}

#[derive(Parser, Debug)]
#[command(name="siteweaver", version, about="Generate website source bundles from a natural-language prompt")]
pub struct Args {
    /// What to build, in plain language.
    #[arg(long)]
    pub prompt: String,

    /// Skip keyword detection and force a site archetype.
    #[arg(long, value_enum)]
    pub archetype: Option<Archetype>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    /// Override the provider endpoint (mainly for Ollama hosts).
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Spend ceiling for this run, in USD.
    #[arg(long)]
    pub ceiling_usd: Option<f64>,

    /// Write the bundle into this directory instead of printing JSON.
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long)]
    pub config: Option<String>,
}
