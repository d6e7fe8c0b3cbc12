use serde::Serialize;

/// An odd integer >= 3 under primality evaluation
pub type Candidate = u64;

/// Default number of producer threads when none is requested
pub const DEFAULT_WORKERS: usize = 5;

/// Configuration for the summation engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of producer threads (0 = auto-detect from CPU cores)
    pub workers: usize,
    /// Percentage of CPU cores to use when auto-detecting (1-100)
    pub thread_percentage: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            thread_percentage: 75,
        }
    }
}

/// Per-worker accounting returned by each producer when it exits
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkerStats {
    pub claimed: usize,
    pub discovered: usize,
}

/// Result of one summation run
#[derive(Debug, Serialize)]
pub struct SumReport {
    pub sum: u64,
    pub primes_found: usize,
    pub candidates_claimed: usize,
    pub workers: usize,
    pub duration_ms: u64,
}
