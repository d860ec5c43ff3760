//! Range validation performed before any finder runs.

use thiserror::Error;

/// Smallest value for which primality is meaningful.
pub const MIN_PRIME: u64 = 2;

/// Reasons a proposed search range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The lower bound (or the sieve maximum) is below two.
    #[error("{bound} must be greater than or equal to two (got {value})")]
    BelowMinimum { bound: Bound, value: i64 },
    /// The lower bound is not strictly less than the upper bound.
    #[error("minimum in range must be smaller than range maximum (got {min} -> {max})")]
    InvalidRange { min: i64, max: i64 },
}

/// Which bound a `BelowMinimum` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Minimum,
    Maximum,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Minimum => f.write_str("minimum"),
            Bound::Maximum => f.write_str("maximum"),
        }
    }
}

/// Whether the upper bound of a window is part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// `[min, max)`, produced by [`validate`]
    HalfOpen,
    /// `[min, max]`, produced by [`validate_max`]
    Inclusive,
}

/// A validated search window.
///
/// The window kind travels with the bounds, so every finder searches the
/// same integers for the same value. Instances only come out of
/// [`validate`] and [`validate_max`], so `min >= 2` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    min: u64,
    max: u64,
    window: Window,
}

impl SearchRange {
    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Largest integer inside the window.
    pub fn last(&self) -> u64 {
        match self.window {
            Window::HalfOpen => self.max - 1,
            Window::Inclusive => self.max,
        }
    }

    /// Number of integers between the bounds, as reported in timing output.
    pub fn span(&self) -> u64 {
        self.max - self.min
    }
}

/// Validate the two-bound form used by trial division.
///
/// The window check runs first, so `validate(1, 1)` is an `InvalidRange`.
pub fn validate(min: i64, max: i64) -> Result<SearchRange, RangeError> {
    if min >= max {
        return Err(RangeError::InvalidRange { min, max });
    }
    let lower = to_bound(min, Bound::Minimum)?;
    // min >= 2 and max > min, so max is positive too
    Ok(SearchRange { min: lower, max: max as u64, window: Window::HalfOpen })
}

/// Validate the single-bound form used by the sieve; the minimum is implicitly 2.
pub fn validate_max(max: i64) -> Result<SearchRange, RangeError> {
    let upper = to_bound(max, Bound::Maximum)?;
    Ok(SearchRange { min: MIN_PRIME, max: upper, window: Window::Inclusive })
}

fn to_bound(value: i64, bound: Bound) -> Result<u64, RangeError> {
    match u64::try_from(value) {
        Ok(v) if v >= MIN_PRIME => Ok(v),
        _ => Err(RangeError::BelowMinimum { bound, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_smallest_window() {
        let range = validate(2, 10).unwrap();
        assert_eq!(range.min(), 2);
        assert_eq!(range.max(), 10);
        assert_eq!(range.span(), 8);
        assert_eq!(range.window(), Window::HalfOpen);
        assert_eq!(range.last(), 9);
    }

    #[test]
    fn test_validate_rejects_empty_and_reversed_windows() {
        assert_eq!(validate(2, 2), Err(RangeError::InvalidRange { min: 2, max: 2 }));
        assert_eq!(validate(3, 2), Err(RangeError::InvalidRange { min: 3, max: 2 }));
    }

    #[test]
    fn test_validate_rejects_low_minimum() {
        for min in [-5, 0, 1] {
            assert_eq!(
                validate(min, 10),
                Err(RangeError::BelowMinimum { bound: Bound::Minimum, value: min })
            );
        }
    }

    #[test]
    fn test_window_check_precedes_minimum_check() {
        assert!(matches!(validate(1, 1), Err(RangeError::InvalidRange { .. })));
        assert!(matches!(validate(0, -3), Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_validate_max() {
        let range = validate_max(2).unwrap();
        assert_eq!((range.min(), range.max()), (2, 2));
        assert_eq!(range.window(), Window::Inclusive);
        assert_eq!(range.last(), 2);

        for max in [i64::MIN, -1, 0, 1] {
            assert_eq!(
                validate_max(max),
                Err(RangeError::BelowMinimum { bound: Bound::Maximum, value: max })
            );
        }
    }

    #[test]
    fn test_error_messages() {
        let err = validate(1, 10).unwrap_err();
        assert_eq!(err.to_string(), "minimum must be greater than or equal to two (got 1)");
        let err = validate_max(0).unwrap_err();
        assert!(err.to_string().starts_with("maximum must be"));
        let err = validate(5, 5).unwrap_err();
        assert!(err.to_string().contains("smaller than range maximum"));
    }
}
