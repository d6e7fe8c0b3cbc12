//! Producer workers
//!
//! Each worker runs the same loop: claim a candidate, trial-divide it,
//! append a hit, repeat. The allocator load-balances by construction, so
//! the workers are symmetric and need no work-stealing or priority.

use anyhow::Result;
use tracing::debug;

use super::allocator::CandidateAllocator;
use super::primality::is_prime;
use super::store::ResultStore;
use super::types::WorkerStats;

/// One producer loop. Terminates exactly when the allocator reports
/// exhaustion; any lock failure propagates out as a fatal error.
pub fn producer_worker(
    worker_id: usize,
    allocator: &CandidateAllocator,
    store: &ResultStore,
) -> Result<WorkerStats> {
    let mut stats = WorkerStats::default();

    while let Some(candidate) = allocator.claim_next()? {
        stats.claimed += 1;
        // Primality runs outside both critical sections
        if is_prime(candidate) {
            store.append(candidate)?;
            stats.discovered += 1;
        }
    }

    debug!(
        worker_id,
        claimed = stats.claimed,
        discovered = stats.discovered,
        "producer exhausted"
    );
    Ok(stats)
}
