//! Shared candidate counter
//!
//! One lock, one integer. Every odd value in `[3, limit]` is handed out to
//! exactly one caller exactly once; after the counter passes the limit it
//! never moves again and every further claim reports exhaustion.

use anyhow::{Result, anyhow};
use std::sync::Mutex;

use super::types::Candidate;

/// Hands out odd candidates to the producer pool.
#[derive(Debug)]
pub struct CandidateAllocator {
    limit: u64,
    next: Mutex<u64>,
}

impl CandidateAllocator {
    /// The counter starts at 3, the first odd candidate.
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            next: Mutex::new(3),
        }
    }

    /// Claim the next unclaimed candidate, or `None` once the counter has
    /// passed the limit.
    ///
    /// The critical section is read, compare, advance by 2 — nothing else.
    /// A poisoned lock means another worker panicked mid-claim; that is
    /// fatal for the whole run, never retried.
    pub fn claim_next(&self) -> Result<Option<Candidate>> {
        let mut next = self
            .next
            .lock()
            .map_err(|_| anyhow!("candidate counter lock poisoned"))?;
        if *next > self.limit {
            return Ok(None);
        }
        let claimed = *next;
        *next += 2;
        Ok(Some(claimed))
    }

    /// True once every candidate up to the limit has been claimed.
    pub fn is_exhausted(&self) -> Result<bool> {
        let next = self
            .next
            .lock()
            .map_err(|_| anyhow!("candidate counter lock poisoned"))?;
        Ok(*next > self.limit)
    }
}
