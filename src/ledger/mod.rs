use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::errors::BudgetExceeded;

/// Cumulative completion spend for the process, shared by every client
/// through an `Arc`. Charges are never rolled back: by the time a call is
/// dispatched (or cancelled mid-flight) the money is considered spent.
#[derive(Debug)]
pub struct SpendLedger {
    ceiling_usd: f64,
    spent_usd: Mutex<f64>,
}

impl SpendLedger {
    pub fn new(ceiling_usd: f64) -> Self {
        Self {
            ceiling_usd,
            spent_usd: Mutex::new(0.0),
        }
    }

    /// Records `cost_usd` and reports whether the ceiling is now breached.
    /// Check and record happen under one lock, so two concurrent requests
    /// cannot both read a pre-ceiling total and sail past it together. A
    /// breaching charge stays on the books.
    pub fn charge(&self, cost_usd: f64) -> Result<(), BudgetExceeded> {
        let mut spent = self.spent_usd.lock();
        let before = *spent;
        *spent += cost_usd;
        let after = *spent;
        if after > self.ceiling_usd {
            warn!(
                before,
                after,
                ceiling = self.ceiling_usd,
                "spend ceiling breached; charge kept on the books"
            );
            return Err(BudgetExceeded {
                spent: after,
                ceiling: self.ceiling_usd,
            });
        }
        debug!(before, after, ceiling = self.ceiling_usd, "charged completion cost");
        Ok(())
    }

    /// Headroom left under the ceiling. Negative once breached.
    pub fn remaining(&self) -> f64 {
        self.ceiling_usd - *self.spent_usd.lock()
    }

    pub fn spent(&self) -> f64 {
        *self.spent_usd.lock()
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling_usd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_charges_accumulate() {
        let ledger = SpendLedger::new(1.0);
        ledger.charge(0.25).unwrap();
        ledger.charge(0.25).unwrap();
        assert!((ledger.spent() - 0.5).abs() < 1e-9);
        assert!((ledger.remaining() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_charge_to_exactly_the_ceiling_is_fine() {
        let ledger = SpendLedger::new(1.0);
        ledger.charge(1.0).unwrap();
        assert!(ledger.remaining().abs() < 1e-9);
    }

    #[test]
    fn test_breaching_charge_is_recorded_and_reported() {
        let ledger = SpendLedger::new(1.0);
        ledger.charge(0.9).unwrap();
        let err = ledger.charge(0.2).unwrap_err();
        assert!((err.spent - 1.1).abs() < 1e-9);
        assert!((err.ceiling - 1.0).abs() < 1e-9);
        // The breach stays on the books and remaining goes negative.
        assert!((ledger.spent() - 1.1).abs() < 1e-9);
        assert!(ledger.remaining() < 0.0);
    }

    #[test]
    fn test_concurrent_charges_do_not_lose_updates() {
        let ledger = Arc::new(SpendLedger::new(1_000.0));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let ledger = ledger.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    ledger.charge(0.01).unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert!((ledger.spent() - 8.0).abs() < 1e-6);
    }
}
