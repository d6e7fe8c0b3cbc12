//! # Primesum - Parallel Prime Summation
//!
//! Computes the sum of all primes up to a limit with a producer/consumer
//! thread pipeline: a pool of producers races over a shared candidate
//! counter, testing each odd candidate by trial division, while a single
//! aggregator waits for the range to be exhausted and emits the total.
//!
//! ## Quick Start
//!
//! ```bash
//! # Sum of all primes <= 20
//! primesum 20
//! # -> 77
//!
//! # Same answer regardless of worker count
//! primesum --workers 50 20
//! ```
//!
//! The engine is also usable as a library:
//!
//! ```rust
//! use primesum::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let report = engine.sum_primes(20).unwrap();
//! assert_eq!(report.sum, 77);
//! ```

pub mod cli;
pub mod engine;

pub use cli::{Cli, Output};
pub use engine::{Engine, EngineConfig, SumReport};

/// Result type alias for primesum operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
