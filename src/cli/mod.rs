//! Command-line interface for primesum
//!
//! Thin caller around the engine: parses and validates the limit, wires
//! exit codes, and formats the final number. The engine never sees argv.
//! In the default text mode stdout carries exactly one line, the decimal
//! sum; diagnostics and logging go to stderr.

use anyhow::Result;
use clap::Parser;

mod output;

pub use output::Output;

use crate::engine::{DEFAULT_WORKERS, Engine, EngineConfig};

/// Sum of all primes up to a limit, computed by a parallel producer/consumer pipeline
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Upper bound (inclusive) of the prime search
    #[arg(allow_negative_numbers = true)]
    pub limit: i64,

    /// Number of producer threads (0 = auto-detect from CPU cores)
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Output format
    #[arg(long, value_parser = ["text", "json"], default_value = "text")]
    pub format: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose, self.quiet);

        let config = EngineConfig {
            workers: self.workers,
            ..EngineConfig::default()
        };
        let report = Engine::new(config).sum_primes(self.limit)?;

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string(&report)?),
            _ => {
                println!("{}", report.sum);
                if output.is_verbose() {
                    output.blank_line();
                    output.header("Run summary");
                    output.summary_stats("workers", report.workers);
                    output.summary_stats("candidates claimed", report.candidates_claimed);
                    output.summary_stats("primes found", report.primes_found);
                    output.summary_stats("duration (ms)", report.duration_ms as usize);
                }
            }
        }
        Ok(())
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
