//! Parallel prime summation engine
//!
//! Producer/consumer pipeline over native threads: a fixed pool of
//! producers pulls odd candidates from a shared allocator, trial-divides
//! each one, and appends hits to a shared store; a single aggregator sums
//! the store once no candidate remains.
//!
//! Two independent locks guard the two shared resources (candidate
//! counter, prime store). They are never held together, so deadlock is
//! precluded by construction. Exhaustion reaches the aggregator as a
//! channel close that fires only after every producer has been joined;
//! discovery order inside the store is a race and varies between runs,
//! but the final sum does not.

pub mod aggregator;
pub mod allocator;
pub mod core;
pub mod pool;
pub mod primality;
pub mod store;
pub mod types;

// Re-export main types for easier access
pub use self::core::Engine;
pub use aggregator::Aggregator;
pub use allocator::CandidateAllocator;
pub use pool::producer_worker;
pub use primality::is_prime;
pub use store::ResultStore;
pub use types::{Candidate, DEFAULT_WORKERS, EngineConfig, SumReport, WorkerStats};
