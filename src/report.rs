//! Human-readable and JSON output for a finished search.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::core::TimingStat;
use crate::engine::SearchRange;
use crate::{BenchError, BenchResult};

/// What a renderer needs to know about one search.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    pub range: &'a SearchRange,
    pub primes: &'a [u64],
    /// Present only when timing was requested
    pub elapsed: Option<Duration>,
    /// Statistics over all measured calls, when timing was requested
    pub stat: Option<&'a TimingStat>,
    pub dump_primes: bool,
}

/// Write the console summary: optional timing lines, the count line, then
/// the optional 0-indexed listing.
///
/// The mean line only appears for more than one measured call.
pub fn render_summary<W: Write>(out: &mut W, summary: &Summary<'_>) -> std::io::Result<()> {
    let range = summary.range;
    if let Some(elapsed) = summary.elapsed {
        writeln!(
            out,
            "Took us {:?} to find all primes in a range of {} numbers",
            elapsed,
            range.span()
        )?;
    }
    if let Some(stat) = summary.stat.filter(|s| s.iterations > 1) {
        writeln!(
            out,
            "Mean {:.3}ms (min {:.3}ms, max {:.3}ms) over {} iterations",
            stat.mean_ms, stat.min_ms, stat.max_ms, stat.iterations
        )?;
    }
    writeln!(
        out,
        "Found {} prime numbers between {} and {}",
        summary.primes.len(),
        range.min(),
        range.max()
    )?;
    if summary.dump_primes {
        writeln!(
            out,
            "Located the following prime numbers in the range {} -> {}",
            range.min(),
            range.max()
        )?;
        for (i, p) in summary.primes.iter().enumerate() {
            writeln!(out, "\t[{i}]: {p}")?;
        }
    }
    Ok(())
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> BenchResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| BenchError::Message(format!("failed to create directory: {e}")))?;
    }
    let json = serde_json::to_vec_pretty(value).map_err(|e| BenchError::Message(format!("failed to serialize report: {e}")))?;
    std::fs::write(path, json).map_err(|e| BenchError::Message(format!("failed to write {}: {e}", path.display())))
}
