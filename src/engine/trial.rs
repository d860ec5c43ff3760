//! Trial division over a half-open window.

use super::range::SearchRange;
use super::{PrimeFinder, PrimeList};

/// Naive trial division.
///
/// Every candidate in `[min, max)` is tested against the divisors
/// `2..candidate / 2`. The divisor bound is exclusive and uses integer
/// division, so for `4` the divisor range is empty and `4` is reported as
/// prime. That quirk is kept deliberately; callers comparing against the
/// sieve must exclude `4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimeFinder for TrialDivision {
    fn name(&self) -> &'static str {
        "trial"
    }

    fn find(&self, range: &SearchRange) -> PrimeList {
        find_primes(range.min(), range.last() + 1)
    }
}

/// Collect the candidates in `[min, max)` that survive trial division.
///
/// Returns an empty list when the window is empty. Callers are expected to
/// have run the window through [`validate`](super::range::validate) first.
pub fn find_primes(min: u64, max: u64) -> PrimeList {
    (min..max).filter(|&candidate| survives(candidate)).collect()
}

fn survives(candidate: u64) -> bool {
    !(2..candidate / 2).any(|divisor| candidate % divisor == 0)
}
