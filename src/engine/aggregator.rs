//! Consumer side of the pipeline
//!
//! A single aggregator blocks until no candidate remains, then folds the
//! store into the final total. Exhaustion arrives as a channel disconnect:
//! the orchestrator holds the only sender and drops it after the last
//! producer has been joined, so the aggregator can never observe a store
//! with an append still in flight.

use anyhow::{Result, anyhow};
use crossbeam::channel::Receiver;

use super::store::ResultStore;

/// The only even prime. Producers search odd candidates exclusively, so
/// the accumulator starts here instead of at zero.
const INITIAL_SUM: u64 = 2;

/// Single consumer: waits for exhaustion, sums the store once.
pub struct Aggregator<'a> {
    store: &'a ResultStore,
    exhausted: Receiver<()>,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a ResultStore, exhausted: Receiver<()>) -> Self {
        Self { store, exhausted }
    }

    /// Blocks until the exhaustion channel closes, then sums every
    /// recorded prime exactly once. Addition is overflow-checked; a sum
    /// past `u64::MAX` aborts the run rather than wrapping.
    pub fn run(self) -> Result<u64> {
        // Nothing is ever sent on this channel; the disconnect is the signal.
        let _ = self.exhausted.recv();

        let primes = self.store.snapshot()?;
        let mut sum = INITIAL_SUM;
        for prime in primes {
            sum = sum
                .checked_add(prime)
                .ok_or_else(|| anyhow!("prime sum overflows u64"))?;
        }
        Ok(sum)
    }
}
