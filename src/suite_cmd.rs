use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{RunOptions, load_suite_config};
use crate::core::RunReport;
use crate::report::write_json;
use crate::{BenchError, BenchResult, find_cmd};

/// An entry that could not run, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedSearch {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteSummary {
    pub results: Vec<RunReport>,
    pub skipped: Vec<SkippedSearch>,
}

/// Run every search listed in a suite file, always timed.
///
/// Entries with an invalid range are reported and skipped; the rest still
/// run. Any other failure aborts the suite.
pub fn run<W: Write>(out: &mut W, config_path: &Path, summary_out: Option<PathBuf>) -> BenchResult<SuiteSummary> {
    let specs = load_suite_config(config_path)?;
    info!(searches = specs.len(), config = %config_path.display(), "running suite");

    let io_err = |e: std::io::Error| BenchError::Message(format!("failed to write output: {e}"));
    let mut summary = SuiteSummary::default();

    for spec in specs {
        writeln!(out, "== {} ({})", spec.name, spec.strategy).map_err(io_err)?;
        let opts = RunOptions {
            timing: true,
            iterations: spec.iterations.unwrap_or(1),
            warmup: spec.warmup.unwrap_or(0),
            ..RunOptions::default()
        };
        match find_cmd::run(&mut *out, spec.strategy, spec.min, spec.max, &opts) {
            Ok(mut report) => {
                report.name = Some(spec.name);
                summary.results.push(report);
            }
            Err(BenchError::Range(e)) => {
                warn!(name = %spec.name, error = %e, "skipping search");
                writeln!(out, "skipped: {e}").map_err(io_err)?;
                summary.skipped.push(SkippedSearch { name: spec.name, reason: e.to_string() });
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = summary_out {
        write_json(&path, &summary)?;
        info!(path = %path.display(), "wrote suite summary");
    }

    Ok(summary)
}
