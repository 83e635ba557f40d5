use std::time::Duration;
use thiserror::Error;

/// Ceiling breach. Carries the post-charge total so callers can see how far
/// past the ceiling the ledger landed.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("spend ceiling exceeded: {spent:.4} USD of {ceiling:.4} USD")]
pub struct BudgetExceeded {
    pub spent: f64,
    pub ceiling: f64,
}

/// The single failure reason attached to a completion that produced no text.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error(transparent)] Budget(#[from] BudgetExceeded),
    #[error("provider error: {0}")] Provider(String),
    #[error("provider timed out after {0:?}")] Timeout(Duration),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("prompt must not be empty")] EmptyPrompt,
}
