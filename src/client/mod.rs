use std::sync::Arc;

use tracing::{info, warn};

use crate::archetype::Archetype;
use crate::errors::{BudgetExceeded, CompletionError};
use crate::ledger::SpendLedger;
use crate::prompt;
use crate::provider::DynProvider;
use crate::wire::GenerationRequest;

/// Raw model text, or the single reason no text exists.
pub type CompletionResult = Result<String, CompletionError>;

/// Budget-gated front door to the model. Every dispatch is charged to the
/// shared ledger first; a cancelled or failed call keeps its charge.
pub struct CompletionClient {
    provider: DynProvider,
    ledger: Arc<SpendLedger>,
    call_cost_usd: f64,
}

impl CompletionClient {
    pub fn new(provider: DynProvider, ledger: Arc<SpendLedger>, call_cost_usd: f64) -> Self {
        Self {
            provider,
            ledger,
            call_cost_usd,
        }
    }

    pub fn ledger(&self) -> &SpendLedger {
        &self.ledger
    }

    pub async fn complete(&self, request: &GenerationRequest, archetype: Archetype) -> CompletionResult {
        // A ledger already at its ceiling never reaches the transport, and
        // nothing new lands on the books: no call, no cost.
        let remaining = self.ledger.remaining();
        if remaining <= 0.0 {
            warn!(request = %request.id, remaining, "budget exhausted before dispatch");
            return Err(CompletionError::Budget(BudgetExceeded {
                spent: self.ledger.spent(),
                ceiling: self.ledger.ceiling(),
            }));
        }

        // The charge that crosses the ceiling stays recorded even though the
        // dispatch it was meant to pay for is abandoned.
        self.ledger.charge(self.call_cost_usd)?;

        let system = prompt::system_prompt();
        let user = prompt::user_prompt(&request.prompt, archetype);

        info!(
            request = %request.id,
            provider = self.provider.name(),
            %archetype,
            "dispatching completion"
        );
        let text = self.provider.complete(system, &user).await?;
        info!(request = %request.id, bytes = text.len(), "completion received");
        Ok(text)
    }
}
