#![forbid(unsafe_code)]

use std::io::Write;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use prime_bench::config::RunOptions;
use prime_bench::{BenchError, Strategy, find_cmd, suite_cmd};

#[derive(Parser, Debug)]
#[command(name = "prime-bench")]
#[command(about = "Locate prime numbers by trial division or the Sieve of Eratosthenes", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set PRIME_BENCH_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by both search modes
#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Dump the list of prime numbers located
    #[arg(long = "dump-prime")]
    dump_prime: bool,
    /// Report how long the search took
    #[arg(long)]
    timing: bool,
    /// Number of measured iterations when timing
    #[arg(long, default_value_t = 1)]
    iterations: usize,
    /// Number of warmup iterations to run before measuring
    #[arg(long, default_value_t = 0)]
    warmup: usize,
    /// Write machine-readable JSON report to this file
    #[arg(long)]
    json: Option<std::path::PathBuf>,
}

impl From<OutputArgs> for RunOptions {
    fn from(args: OutputArgs) -> Self {
        RunOptions {
            dump_primes: args.dump_prime,
            timing: args.timing,
            iterations: args.iterations,
            warmup: args.warmup,
            json: args.json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search [min, max) by trial division
    Trial {
        /// Minimum number in range to search for primes
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        min: i64,
        /// Maximum number in range to search for primes (exclusive)
        #[arg(long, default_value_t = 4000, allow_negative_numbers = true)]
        max: i64,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search [2, max] with the Sieve of Eratosthenes
    Sieve {
        /// Maximum number in range to search for primes (inclusive)
        #[arg(long, default_value_t = 4000, allow_negative_numbers = true)]
        max: i64,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run a batch of timed searches described by a TOML file
    Suite {
        /// Path to suite file with [[search]] tables
        #[arg(long)]
        config: std::path::PathBuf,
        /// Write a JSON summary of every run to this file
        #[arg(long)]
        summary: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("PRIME_BENCH_LOG").unwrap_or_else(|_| {
        if verbose { "prime_bench=debug".to_string() } else { "prime_bench=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

/// Run the parsed command, writing results to `out` and diagnostics to `err`.
///
/// Returns the process exit code: 0 on success, 2 for an invalid range
/// (after the subcommand's option help), 1 for anything else.
fn execute<O: Write, E: Write>(command: Commands, out: &mut O, err: &mut E) -> i32 {
    let (subcommand, result) = match command {
        Commands::Trial { min, max, output } => {
            ("trial", find_cmd::run(out, Strategy::Trial, Some(min), max, &output.into()).map(|_| ()))
        }
        Commands::Sieve { max, output } => {
            ("sieve", find_cmd::run(out, Strategy::Sieve, None, max, &output.into()).map(|_| ()))
        }
        Commands::Suite { config, summary } => ("suite", suite_cmd::run(out, &config, summary).map(|_| ())),
    };

    match result {
        Ok(()) => 0,
        Err(BenchError::Range(e)) => {
            let _ = writeln!(err, "{e}");
            let mut cmd = Cli::command();
            cmd.build();
            if let Some(sub) = cmd.find_subcommand_mut(subcommand) {
                let _ = write!(err, "{}", sub.render_help());
            }
            2
        }
        Err(e) => {
            let _ = writeln!(err, "{:#}", e);
            1
        }
    }
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = execute(cli.command, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    std::process::exit(code);
}
