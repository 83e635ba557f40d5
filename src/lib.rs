//! Siteweaver turns a one-line website request into a ready-to-serve
//! source bundle: detect the site archetype, ask an LLM provider for a
//! complete document under a spend ceiling, extract and validate the
//! artifacts, and fall back to a curated template when anything fails.

pub mod archetype;
pub mod cli;
pub mod client;
pub mod config;
pub mod emit;
pub mod errors;
pub mod extract;
pub mod fallback;
pub mod ledger;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod ux;
pub mod validate;
pub mod wire;
