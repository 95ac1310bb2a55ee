//! Remove-second compactor — drops every element at an odd index, in place.
//!
//! Strategies:
//! 1. Index shift — move slot `2*i` into slot `i`, then truncate
//! 2. Retain by parity — stable `retain` pass keyed on a position counter
//! 3. Strided copy — move a `step_by(2)` view to the front, then truncate
//!
//! All three keep exactly `[a0, a2, a4, ...]` and agree on every input.
//! Compaction is not idempotent: a second pass keeps only the elements whose
//! original index is a multiple of 4.

pub mod index_shift;
pub mod retain_parity;
pub mod strategy;
pub mod strided_copy;

pub use index_shift::index_shift;
pub use retain_parity::retain_parity;
pub use strategy::Strategy;
pub use strided_copy::strided_copy;

/// Length left after compacting a sequence of `len` elements.
///
/// `(len + 1) / 2` overflows at `usize::MAX`; halving first does not.
#[inline]
pub fn compacted_len(len: usize) -> usize {
    (len >> 1) + (len & 1)
}

#[cfg(test)]
mod tests;
