//! Trial-division primality predicate
//!
//! Pure and deterministic; the only component of the engine with no shared
//! state. Producers call this outside both critical sections, which is what
//! makes the pipeline worth parallelizing in the first place.

/// Returns true iff `n` is prime.
///
/// Trial-divides by every odd integer `i` with `i * i <= n`. The bound is
/// checked in its division form `i <= n / i`, so no multiplication can
/// overflow and no floating-point square root is needed; the comparison is
/// exact at the boundary (perfect squares of primes are correctly rejected).
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i: u64 = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
