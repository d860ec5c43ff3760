use std::io::Write;

use tracing::{debug, info};

use crate::config::RunOptions;
use crate::core::{EnvironmentInfo, RunReport};
use crate::engine::{PrimeList, Samples, SearchRange, Strategy, measure_repeated};
use crate::report::{Summary, render_summary, write_json};
use crate::{BenchError, BenchResult};

/// Primes from one search plus timing, when it was requested.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub primes: PrimeList,
    pub samples: Option<Samples>,
}

/// Run a finder over an already validated range.
///
/// Without `opts.timing` the finder is called exactly once and no clock is
/// read; warmup and iteration counts only apply to timed runs.
pub fn search(strategy: Strategy, range: &SearchRange, opts: &RunOptions) -> SearchOutcome {
    let finder = strategy.finder();
    if !opts.timing {
        if opts.iterations > 1 || opts.warmup > 0 {
            debug!("iterations and warmup are ignored without --timing");
        }
        return SearchOutcome { primes: finder.find(range), samples: None };
    }

    let (primes, samples) = measure_repeated(opts.warmup, opts.iterations, || finder.find(range));
    SearchOutcome { primes, samples: Some(samples) }
}

/// Validate, search, print the summary to `out` and optionally write a JSON report.
///
/// An invalid range returns `BenchError::Range` before any finder runs.
pub fn run<W: Write>(
    out: &mut W,
    strategy: Strategy,
    min: Option<i64>,
    max: i64,
    opts: &RunOptions,
) -> BenchResult<RunReport> {
    let range = strategy.validate(min, max)?;
    info!(%strategy, min = range.min(), max = range.max(), "searching for primes");

    let outcome = search(strategy, &range, opts);
    info!(count = outcome.primes.len(), "search finished");

    let stat = outcome.samples.as_ref().map(Samples::stat);
    render_summary(
        out,
        &Summary {
            range: &range,
            primes: &outcome.primes,
            elapsed: outcome.samples.as_ref().map(Samples::last),
            stat: stat.as_ref(),
            dump_primes: opts.dump_primes,
        },
    )
    .map_err(|e| BenchError::Message(format!("failed to write output: {e}")))?;

    let mut report = RunReport::new(strategy, &range, &outcome.primes, EnvironmentInfo::detect());
    report.warmup_iterations = outcome.samples.as_ref().map_or(0, |s| s.warmup);
    report.timing = stat;
    if opts.dump_primes {
        report.primes = Some(outcome.primes);
    }

    if let Some(path) = opts.json.as_deref() {
        write_json(path, &report)?;
        info!(path = %path.display(), "wrote json report");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RangeError, validate};

    #[test]
    fn test_untimed_search_has_no_measurement() {
        let range = validate(2, 20).unwrap();
        let outcome = search(Strategy::Trial, &range, &RunOptions { iterations: 5, ..RunOptions::default() });
        assert!(outcome.samples.is_none());
        assert_eq!(outcome.primes, vec![2, 3, 4, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn test_timed_search_collects_samples() {
        let range = validate(2, 100).unwrap();
        let opts = RunOptions { timing: true, iterations: 4, warmup: 1, ..RunOptions::default() };
        let outcome = search(Strategy::Sieve, &range, &opts);
        let samples = outcome.samples.unwrap();
        assert_eq!(samples.durations.len(), 4);
        assert_eq!(samples.warmup, 1);
        assert_eq!(outcome.primes.len(), 25);
    }

    #[test]
    fn test_invalid_range_prints_nothing() {
        let mut out = Vec::new();
        let err = run(&mut out, Strategy::Trial, Some(1), 10, &RunOptions::default()).unwrap_err();
        assert!(matches!(err, BenchError::Range(RangeError::BelowMinimum { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_prints_summary() {
        let mut out = Vec::new();
        let report = run(&mut out, Strategy::Sieve, None, 20, &RunOptions::default()).unwrap();
        assert_eq!(report.count, 8);
        assert!(report.timing.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "Found 8 prime numbers between 2 and 20\n");
    }
}
