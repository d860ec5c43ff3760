//! Cross-checks of the two finders against each other and a reference primality test.

use prime_bench::engine::range::{Bound, RangeError, validate, validate_max};
use prime_bench::engine::sieve::sieve;
use prime_bench::engine::trial::find_primes;
use prime_bench::engine::{PrimeFinder, Sieve, TrialDivision};

/// Reference test: no integer in [2, n - 1] divides n.
fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

fn strictly_increasing(primes: &[u64]) -> bool {
    primes.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn test_outputs_are_strictly_increasing() {
    for max in 2..200 {
        assert!(strictly_increasing(&sieve(max)), "sieve({max})");
    }
    for min in 2..40 {
        for max in (min + 1)..120 {
            assert!(strictly_increasing(&find_primes(min, max)), "trial({min}, {max})");
        }
    }
}

#[test]
fn test_sieve_is_exact() {
    for max in 2..300 {
        let want: Vec<u64> = (2..=max).filter(|&n| is_prime(n)).collect();
        assert_eq!(sieve(max), want, "sieve({max})");
    }
}

#[test]
fn test_trial_is_exact_apart_from_four() {
    for min in 2..50 {
        for max in (min + 1)..150 {
            let got: Vec<u64> = find_primes(min, max).into_iter().filter(|&n| n != 4).collect();
            let want: Vec<u64> = (min..max).filter(|&n| is_prime(n)).collect();
            assert_eq!(got, want, "trial({min}, {max})");
        }
    }
}

#[test]
fn test_trial_keeps_four_when_in_window() {
    assert_eq!(find_primes(2, 5), vec![2, 3, 4]);
    assert!(find_primes(2, 100).contains(&4));
    assert!(!find_primes(5, 100).contains(&4));
}

#[test]
fn test_finders_agree() {
    for max in 5..500 {
        let trial: Vec<u64> = find_primes(2, max + 1).into_iter().filter(|&n| n != 4).collect();
        assert_eq!(trial, sieve(max), "max = {max}");
    }
}

#[test]
fn test_finders_agree_above_four() {
    // windows that exclude 4 need no adjustment at all
    for (min, max) in [(5, 20), (20, 40), (40, 60), (100, 1000)] {
        let range = validate(min, max).unwrap();
        let sieved: Vec<u64> = Sieve.find(&validate_max(max - 1).unwrap()).into_iter().filter(|&p| p >= min as u64).collect();
        assert_eq!(TrialDivision.find(&range), sieved, "[{min}, {max})");
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let range = validate(2, 1000).unwrap();
    let finders: [&dyn PrimeFinder; 2] = [&TrialDivision, &Sieve];
    for finder in finders {
        let first = finder.find(&range);
        let second = finder.find(&range);
        assert_eq!(first, second);
        assert_ne!(first.as_ptr(), second.as_ptr(), "{} reused its buffer", finder.name());
    }
}

#[test]
fn test_validation_boundary() {
    assert!(matches!(validate(2, 2), Err(RangeError::InvalidRange { .. })));
    assert!(matches!(validate(3, 2), Err(RangeError::InvalidRange { .. })));
    assert_eq!(validate(1, 10), Err(RangeError::BelowMinimum { bound: Bound::Minimum, value: 1 }));
    assert!(validate(2, 10).is_ok());
    assert!(validate_max(2).is_ok());
    assert!(validate_max(1).is_err());
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(sieve(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
    assert_eq!(sieve(2), vec![2]);
    assert_eq!(find_primes(5, 20), vec![5, 7, 11, 13, 17, 19]);

    let below_twenty = sieve(20);
    let between: Vec<u64> = sieve(40).into_iter().filter(|p| !below_twenty.contains(p)).collect();
    assert_eq!(between, vec![23, 29, 31, 37]);
}
