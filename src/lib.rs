pub mod config;
pub mod core;
pub mod engine;
pub mod find_cmd;
pub mod report;
pub mod suite_cmd;

use thiserror::Error;

pub use engine::{PrimeFinder, PrimeList, RangeError, SearchRange, Strategy};

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
