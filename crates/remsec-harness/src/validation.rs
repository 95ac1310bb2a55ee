//! Correctness phase.

use tracing::{debug, info};

use crate::error::{HarnessError, Result};
use crate::fixtures::{Entry, VALIDATION_CASES};

/// Run every entry over every fixed case. Stops at the first mismatch.
pub fn run_validation(entries: &[Entry]) -> Result<()> {
    for (input, expected) in VALIDATION_CASES {
        for entry in entries {
            let mut actual = input.to_vec();
            (entry.compact)(&mut actual);
            debug!(strategy = entry.name, size = input.len(), "validated");
            if actual != expected {
                return Err(HarnessError::Mismatch {
                    strategy: entry.name,
                    size: input.len(),
                    expected: expected.to_vec(),
                    actual,
                });
            }
        }
    }
    info!(cases = VALIDATION_CASES.len(), strategies = entries.len(), "validation passed");
    Ok(())
}
