//! Fixed validation cases and generated performance inputs.

use remsec_compactor::Strategy;

/// Element type every registered strategy is exercised with.
pub type Value = u64;

/// Signature of a registered compaction.
pub type CompactFn = fn(&mut Vec<Value>);

/// A compaction paired with the name it is reported under.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub compact: CompactFn,
}

impl Entry {
    pub const fn new(name: &'static str, compact: CompactFn) -> Self {
        Self { name, compact }
    }
}

impl From<Strategy> for Entry {
    fn from(strategy: Strategy) -> Self {
        Self::new(strategy.name(), strategy.compact_fn())
    }
}

/// Every built-in strategy as a harness entry.
pub fn registered() -> Vec<Entry> {
    Strategy::ALL.into_iter().map(Entry::from).collect()
}

/// Hand-computed `(input, expected)` pairs. The empty case appears twice.
pub const VALIDATION_CASES: [(&[Value], &[Value]); 7] = [
    (&[], &[]),
    (&[], &[]),
    (&[1, 2], &[1]),
    (&[1, 2, 3], &[1, 3]),
    (&[1, 2, 3, 4], &[1, 3]),
    (&[1, 2, 3, 4, 5], &[1, 3, 5]),
    (&[1, 2, 3, 4, 5, 6], &[1, 3, 5]),
];

/// `1..=size` as a sequence.
pub fn generate_sequence(size: usize) -> Vec<Value> {
    (1..=size as Value).collect()
}
