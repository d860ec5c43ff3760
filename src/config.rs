//! Run options and suite configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::engine::Strategy;
use crate::{BenchError, BenchResult};

/// Output and measurement options for a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Print every prime found, one per line, 0-indexed
    pub dump_primes: bool,
    /// Report elapsed wall-clock time
    pub timing: bool,
    /// Number of measured calls
    pub iterations: usize,
    /// Number of untimed calls before measuring
    pub warmup: usize,
    /// Write a machine-readable report to this file
    pub json: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            dump_primes: false,
            timing: false,
            iterations: 1,
            warmup: 0,
            json: None,
        }
    }
}

/// One `[[search]]` table of a suite file.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSpec {
    pub name: String,
    pub strategy: Strategy,
    #[serde(default)]
    pub min: Option<i64>,
    pub max: i64,
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default)]
    pub warmup: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct SuiteConfig {
    #[serde(rename = "search", default)]
    searches: Vec<SearchSpec>,
}

pub fn load_suite_config(path: &Path) -> BenchResult<Vec<SearchSpec>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_suite_config(&s)
}

pub fn parse_suite_config(s: &str) -> BenchResult<Vec<SearchSpec>> {
    let cfg: SuiteConfig = toml::from_str(s).map_err(|e| BenchError::Message(e.to_string()))?;
    // the sieve always starts at 2
    if let Some(spec) = cfg.searches.iter().find(|s| s.strategy == Strategy::Sieve && s.min.is_some()) {
        return Err(BenchError::Message(format!(
            "search `{}`: min is not supported by the sieve strategy",
            spec.name
        )));
    }
    Ok(cfg.searches)
}
