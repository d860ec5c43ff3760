//! RunReport schema v1 - machine-readable output of a single search.

use serde::{Deserialize, Serialize};

use super::env::EnvironmentInfo;
use crate::engine::{PrimeList, SearchRange, Strategy};

/// Schema version for forward compatibility
pub const SCHEMA_VERSION: u32 = 1;

/// Summary statistics over measured calls, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingStat {
    pub iterations: u32,
    pub mean_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev_ms: Option<f64>,
    pub min_ms: f64,
    pub max_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p95_ms: Option<f64>,
}

impl TimingStat {
    /// Build from sample times in milliseconds. An empty slice yields zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let (Some(&fastest), Some(&slowest)) = (sorted.first(), sorted.last()) else {
            return TimingStat {
                iterations: 0,
                mean_ms: 0.0,
                median_ms: None,
                stddev_ms: None,
                min_ms: 0.0,
                max_ms: 0.0,
                p95_ms: None,
            };
        };

        let n = sorted.len() as f64;
        let mean_ms = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|x| (x - mean_ms) * (x - mean_ms)).sum::<f64>() / n;

        TimingStat {
            iterations: sorted.len() as u32,
            mean_ms,
            median_ms: Some(median(&sorted)),
            stddev_ms: Some(variance.sqrt()),
            min_ms: fastest,
            max_ms: slowest,
            p95_ms: Some(nearest_rank(&sorted, 0.95)),
        }
    }
}

/// Middle value of a sorted, non-empty slice; the mean of the two middle
/// values for even lengths.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Nearest-rank percentile of a sorted, non-empty slice.
fn nearest_rank(sorted: &[f64], quantile: f64) -> f64 {
    let rank = (quantile * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Record of one search, written as pretty JSON by `--json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// RFC 3339 timestamp
    pub timestamp: String,

    /// Label from a suite entry; absent for single runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub strategy: Strategy,
    pub min: u64,
    pub max: u64,

    /// Number of primes found
    pub count: usize,

    /// The primes themselves, only kept when dumping was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primes: Option<PrimeList>,

    #[serde(default)]
    pub warmup_iterations: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingStat>,

    pub env: EnvironmentInfo,
}

impl RunReport {
    pub fn new(strategy: Strategy, range: &SearchRange, primes: &[u64], env: EnvironmentInfo) -> Self {
        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();

        RunReport {
            schema_version: SCHEMA_VERSION,
            timestamp,
            name: None,
            strategy,
            min: range.min(),
            max: range.max(),
            count: primes.len(),
            primes: None,
            warmup_iterations: 0,
            timing: None,
            env,
        }
    }
}
