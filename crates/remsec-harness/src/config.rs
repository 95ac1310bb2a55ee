use serde::Serialize;

/// Input sizes timed by the performance phase, ascending.
pub const PERFORMANCE_SIZES: [usize; 6] = [
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    50_000_000,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    pub perf_sizes: Vec<usize>,
}

impl HarnessConfig {
    pub fn with_sizes(perf_sizes: impl Into<Vec<usize>>) -> Self {
        Self { perf_sizes: perf_sizes.into() }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::with_sizes(PERFORMANCE_SIZES)
    }
}
