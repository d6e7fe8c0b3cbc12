//! Shared prime store
//!
//! Append-only list of discovered primes plus an atomic mirror of its
//! length. The list lock is independent from the allocator's counter lock
//! and the two are never held together, so the engine cannot deadlock.

use anyhow::{Result, anyhow};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Collects primes as producers discover them, in discovery order.
#[derive(Debug)]
pub struct ResultStore {
    primes: Mutex<Vec<u64>>,
    discovered: AtomicUsize,
}

impl ResultStore {
    /// Pre-sizes the list for the worst case: every odd candidate in
    /// `[3, limit]` turns out to be prime. Appends therefore never
    /// reallocate while the producers are running.
    pub fn with_limit(limit: u64) -> Self {
        let capacity = if limit < 3 {
            0
        } else {
            ((limit - 1) / 2) as usize
        };
        Self {
            primes: Mutex::new(Vec::with_capacity(capacity)),
            discovered: AtomicUsize::new(0),
        }
    }

    /// Record one discovered prime.
    ///
    /// Append order is a race among producers and is not reproducible
    /// across runs; the multiset of recorded values is.
    pub fn append(&self, value: u64) -> Result<()> {
        let mut primes = self
            .primes
            .lock()
            .map_err(|_| anyhow!("prime store lock poisoned"))?;
        primes.push(value);
        self.discovered.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Number of primes recorded so far. Reads the atomic mirror, not the
    /// list lock; suitable for progress peeks only.
    pub fn discovered(&self) -> usize {
        self.discovered.load(Ordering::Relaxed)
    }

    /// Copy of the recorded primes. The aggregator calls this after every
    /// producer has been joined, so the copy is complete.
    pub fn snapshot(&self) -> Result<Vec<u64>> {
        let primes = self
            .primes
            .lock()
            .map_err(|_| anyhow!("prime store lock poisoned"))?;
        Ok(primes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_records_in_order_and_counts() {
        let store = ResultStore::with_limit(20);
        store.append(3).unwrap();
        store.append(7).unwrap();
        store.append(5).unwrap();
        assert_eq!(store.discovered(), 3);
        assert_eq!(store.snapshot().unwrap(), vec![3, 7, 5]);
    }

    #[test]
    fn capacity_covers_all_odd_candidates() {
        let store = ResultStore::with_limit(11);
        // 3, 5, 7, 9, 11 all fit without reallocation
        for v in [3u64, 5, 7, 9, 11] {
            store.append(v).unwrap();
        }
        assert_eq!(store.discovered(), 5);
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let store = ResultStore::with_limit(10_000);
        crossbeam::thread::scope(|s| {
            for worker in 0..4u64 {
                let store = &store;
                s.spawn(move |_| {
                    for i in 0..500u64 {
                        store.append(worker * 1_000 + i).unwrap();
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(store.discovered(), 2_000);
        assert_eq!(store.snapshot().unwrap().len(), 2_000);
    }
}
