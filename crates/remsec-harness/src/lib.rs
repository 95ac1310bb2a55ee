//! Remove-second harness — validates every strategy against fixed cases,
//! then times them on large generated inputs.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod performance;
pub mod validation;

use std::panic;

use anyhow::anyhow;

pub use config::HarnessConfig;
pub use error::{HarnessError, Result};
pub use fixtures::{registered, Entry, Value};
pub use performance::{run_performance, SizeReport, Timing};
pub use validation::run_validation;

/// Run both phases over `entries`. Performance only runs if validation passes.
pub fn run_with(entries: &[Entry], config: &HarnessConfig) -> Result<Vec<SizeReport>> {
    tracing::debug!(config = %serde_json::to_string(config)?, "starting run");

    println!("Running validation tests...");
    run_validation(entries)?;
    println!("All validation tests passed.");

    println!("Running performance tests...");
    let reports = run_performance(entries, &config.perf_sizes)?;
    println!("\nAll performance tests passed.");
    Ok(reports)
}

/// Run both phases over every built-in strategy.
pub fn run(config: &HarnessConfig) -> Result<Vec<SizeReport>> {
    run_with(&registered(), config)
}

/// How a guarded run ends: the process exit code and what to print on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub code: u8,
    pub diagnostic: Option<String>,
}

/// Run both phases, turning every failure into exit code 1.
///
/// A panic anywhere in the run is reported as an unclassified failure.
pub fn run_guarded(entries: &[Entry], config: &HarnessConfig) -> Outcome {
    let result = panic::catch_unwind(|| run_with(entries, config))
        .unwrap_or_else(|_| Err(HarnessError::Other(anyhow!("Unknown error occurred"))));
    match result {
        Ok(_) => Outcome { code: 0, diagnostic: None },
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            Outcome { code: 1, diagnostic: Some(err.to_string()) }
        }
    }
}
