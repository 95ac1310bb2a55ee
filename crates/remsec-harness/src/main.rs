use std::process::ExitCode;

use remsec_harness::{registered, HarnessConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let outcome = remsec_harness::run_guarded(&registered(), &HarnessConfig::default());
    if let Some(diagnostic) = &outcome.diagnostic {
        eprintln!("{diagnostic}");
    }
    ExitCode::from(outcome.code)
}
