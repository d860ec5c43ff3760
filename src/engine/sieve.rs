//! Sieve of Eratosthenes over `[0, max]`.

use tracing::debug;

use super::range::SearchRange;
use super::{PrimeFinder, PrimeList};

/// Sieve of Eratosthenes with a per-call marking buffer.
///
/// Implemented for [`PrimeFinder`], the sieve marks `[2, range.last()]` and
/// then drops anything below `range.min()`. A half-open range therefore
/// stops before its `max`, the same as trial division.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sieve;

impl PrimeFinder for Sieve {
    fn name(&self) -> &'static str {
        "sieve"
    }

    fn find(&self, range: &SearchRange) -> PrimeList {
        let mut primes = sieve(range.last());
        let below = primes.partition_point(|&p| p < range.min());
        primes.drain(..below);
        primes
    }
}

/// Every prime in `[2, max]`, ascending.
///
/// Allocates `max + 1` bytes of marking state for the duration of the call.
/// Multiples are struck starting at `2p` rather than `p * p`.
pub fn sieve(max: u64) -> PrimeList {
    if max < 2 {
        return PrimeList::new();
    }
    // the buffer must be addressable; an unhostable max fails at allocation
    let limit = usize::try_from(max).unwrap_or(usize::MAX);
    let mut composite = vec![false; limit.saturating_add(1)];
    debug!(bytes = composite.len(), "allocated marking buffer");

    let mut p: usize = 2;
    while p * p <= limit {
        if !composite[p] {
            for multiple in (p * 2..=limit).step_by(p) {
                composite[multiple] = true;
            }
        }
        p += 1;
    }

    composite
        .iter()
        .enumerate()
        .skip(2)
        .filter(|(_, marked)| !**marked)
        .map(|(n, _)| n as u64)
        .collect()
}
