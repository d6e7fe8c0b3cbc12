//! Orchestrator
//!
//! Owns the shared resources, spawns the producer pool and the aggregator
//! inside one thread scope, and guarantees every spawned thread is joined
//! before this module returns — on the error path included. Producers are
//! joined before the exhaustion signal reaches the aggregator, so the
//! reported sum can never miss a prime whose append was still in flight
//! when the counter passed the limit.

use anyhow::{Result, anyhow};
use crossbeam::channel::bounded;
use std::time::Instant;
use tracing::debug;

use super::aggregator::Aggregator;
use super::allocator::CandidateAllocator;
use super::pool::producer_worker;
use super::store::ResultStore;
use super::types::{EngineConfig, SumReport, WorkerStats};

/// Runs parallel prime summations.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Number of producer threads for a given candidate count.
    ///
    /// An explicit worker count is honored as-is; 0 auto-detects from the
    /// CPU count, capped by the configured core percentage. Either way
    /// there is no point spawning more producers than candidates.
    fn effective_workers(&self, candidates: usize) -> usize {
        let requested = if self.config.workers > 0 {
            self.config.workers
        } else {
            let cpu_cores = num_cpus::get();
            std::cmp::max(1, (cpu_cores * self.config.thread_percentage as usize) / 100)
        };
        std::cmp::min(requested, candidates.max(1))
    }

    /// Sum of all primes `<= limit`.
    ///
    /// Limits at or below 1 have a defined answer of 0 and spawn nothing.
    /// Everything else runs the full pipeline; any lock, spawn, or join
    /// failure is fatal and no partial sum is ever returned.
    pub fn sum_primes(&self, limit: i64) -> Result<SumReport> {
        let start_time = Instant::now();

        if limit <= 1 {
            return Ok(SumReport {
                sum: 0,
                primes_found: 0,
                candidates_claimed: 0,
                workers: 0,
                duration_ms: start_time.elapsed().as_millis() as u64,
            });
        }
        let limit = limit as u64;

        let candidates = if limit < 3 {
            0
        } else {
            ((limit - 1) / 2) as usize
        };
        let workers = self.effective_workers(candidates);
        debug!(limit, candidates, workers, "starting summation run");

        let allocator = CandidateAllocator::new(limit);
        let store = ResultStore::with_limit(limit);

        // Closed (by dropping the sender) once the last producer has been
        // joined; this is the aggregator's exhaustion wait.
        let (exhausted_tx, exhausted_rx) = bounded::<()>(0);

        let (sum, totals) = crossbeam::thread::scope(|s| -> Result<(u64, WorkerStats)> {
            let mut producers = Vec::with_capacity(workers);
            for worker_id in 0..workers {
                let allocator = &allocator;
                let store = &store;
                producers.push(s.spawn(move |_| producer_worker(worker_id, allocator, store)));
            }

            let aggregator = Aggregator::new(&store, exhausted_rx);
            let consumer = s.spawn(move |_| aggregator.run());

            let mut totals = WorkerStats::default();
            for handle in producers {
                let stats = handle
                    .join()
                    .map_err(|_| anyhow!("producer thread panicked"))??;
                totals.claimed += stats.claimed;
                totals.discovered += stats.discovered;
            }
            // Every append has landed; let the aggregator sum.
            drop(exhausted_tx);

            let sum = consumer
                .join()
                .map_err(|_| anyhow!("aggregator thread panicked"))??;
            Ok((sum, totals))
        })
        .map_err(|_| anyhow!("thread panic during parallel summation"))??;

        debug!(
            sum,
            primes = totals.discovered,
            claimed = totals.claimed,
            "summation run complete"
        );

        Ok(SumReport {
            sum,
            primes_found: totals.discovered,
            candidates_claimed: totals.claimed,
            workers,
            duration_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
