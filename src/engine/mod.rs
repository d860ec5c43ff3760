//! Prime search engine.
//!
//! # Architecture
//!
//! - **range**: validation of a proposed window. Produces a `SearchRange` or a
//!   `RangeError`; nothing else in the engine can fail.
//! - **trial** / **sieve**: the two finders. Both implement `PrimeFinder` and
//!   search exactly the window a `SearchRange` describes, half-open or
//!   inclusive. Apart from trial division keeping `4`, they agree.
//! - **timing**: measures a finder call without touching its result.
//!
//! All state is call-scoped. Each finder call allocates its own buffers and
//! hands the caller a fresh `PrimeList`.

pub mod range;
pub mod sieve;
pub mod timing;
pub mod trial;

use serde::{Deserialize, Serialize};

pub use range::{Bound, RangeError, SearchRange, Window, validate, validate_max};
pub use sieve::Sieve;
pub use timing::{Samples, Timed, measure, measure_repeated};
pub use trial::TrialDivision;

/// Strictly increasing list of primes produced by a single finder call.
pub type PrimeList = Vec<u64>;

/// Something that lists the primes of a validated range.
pub trait PrimeFinder {
    /// Short identifier used in reports and logs.
    fn name(&self) -> &'static str;

    /// Find primes in `range`. Never fails once the range is validated.
    fn find(&self, range: &SearchRange) -> PrimeList;
}

/// Selects a finder by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Trial,
    Sieve,
}

impl Strategy {
    pub fn finder(self) -> &'static dyn PrimeFinder {
        match self {
            Strategy::Trial => &TrialDivision,
            Strategy::Sieve => &Sieve,
        }
    }

    /// Validate bounds the way this strategy expects them.
    ///
    /// Trial division uses both bounds, defaulting `min` to 2. The sieve only
    /// takes a maximum; a supplied `min` is ignored here and rejected when a
    /// suite file is parsed.
    pub fn validate(self, min: Option<i64>, max: i64) -> Result<SearchRange, RangeError> {
        match self {
            Strategy::Trial => validate(min.unwrap_or(range::MIN_PRIME as i64), max),
            Strategy::Sieve => validate_max(max),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.finder().name())
    }
}
