//! Performance phase — times each entry and cross-checks their results.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{HarnessError, Result};
use crate::fixtures::{generate_sequence, Entry, Value};

/// Elapsed time of one entry on one input.
#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub strategy: &'static str,
    pub millis: f64,
}

/// All timings for one input size.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub size: usize,
    pub timings: Vec<Timing>,
}

impl SizeReport {
    pub fn fastest(&self) -> Option<&Timing> {
        self.timings.iter().min_by(|a, b| a.millis.total_cmp(&b.millis))
    }
}

/// Time every entry on `1..=size` for each size.
///
/// Each entry's result is compared to the first entry's as soon as it
/// finishes. The first result is kept (shrunk to its compacted length) and
/// the last entry consumes the generated input, so at most the input, one
/// working copy and a half-length reference are live. Every entry runs and
/// reports its timing before a disagreement fails the phase. Timings are
/// informational only.
pub fn run_performance(entries: &[Entry], sizes: &[usize]) -> Result<Vec<SizeReport>> {
    let mut reports = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let mut input = generate_sequence(size);
        println!("\nTesting with sequence size: {size}");

        let mut reference: Option<Vec<Value>> = None;
        let mut diverged = false;
        let mut timings = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let mut output = if idx + 1 == entries.len() {
                std::mem::take(&mut input)
            } else {
                input.clone()
            };
            let start = Instant::now();
            (entry.compact)(&mut output);
            let millis = start.elapsed().as_secs_f64() * 1000.0;

            println!("'{}' took {millis} ms", entry.name);
            debug!(strategy = entry.name, size, millis, "timed");
            timings.push(Timing { strategy: entry.name, millis });

            match &reference {
                Some(expected) => diverged |= *expected != output,
                None => {
                    output.shrink_to_fit();
                    reference = Some(output);
                }
            }
        }
        if diverged {
            return Err(HarnessError::Divergence { size });
        }
        info!(size, "strategies agree");

        let report = SizeReport { size, timings };
        if let Some(best) = report.fastest() {
            println!("Fastest: '{}'", best.strategy);
        }
        reports.push(report);
    }
    Ok(reports)
}
