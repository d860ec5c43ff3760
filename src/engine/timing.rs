//! Wall-clock measurement around a finder call.

use std::time::{Duration, Instant};

use crate::core::TimingStat;

/// A value paired with the time it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub elapsed: Duration,
    pub value: T,
}

/// Run `f` once, reading the monotonic clock immediately before and after.
pub fn measure<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed { elapsed: start.elapsed(), value }
}

/// Durations of the measured calls of a repeated measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    /// One entry per measured call, warmup excluded
    pub durations: Vec<Duration>,
    pub warmup: usize,
}

impl Samples {
    /// Duration of the last measured call.
    pub fn last(&self) -> Duration {
        self.durations.last().copied().unwrap_or_default()
    }

    pub fn stat(&self) -> TimingStat {
        let samples_ms: Vec<f64> = self.durations.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        TimingStat::from_samples(&samples_ms)
    }
}

/// Call `f` `warmup` times untimed, then `iterations` times timed, returning
/// the value of the last measured call.
///
/// At least one measured call is always made so there is a value to return.
pub fn measure_repeated<T, F>(warmup: usize, iterations: usize, mut f: F) -> (T, Samples)
where
    F: FnMut() -> T,
{
    for _ in 0..warmup {
        let _ = f();
    }

    let iterations = iterations.max(1);
    let mut durations = Vec::with_capacity(iterations);
    let mut last = measure(&mut f);
    durations.push(last.elapsed);
    for _ in 1..iterations {
        last = measure(&mut f);
        durations.push(last.elapsed);
    }

    (last.value, Samples { durations, warmup })
}
