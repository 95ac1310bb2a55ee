//! Strategy 1: direct index shift.

use crate::compacted_len;

/// Move the element at `2*i` into slot `i` for every kept slot, then truncate.
///
/// Slot 0 already holds the first kept element, so the walk starts at 1.
/// Swapping instead of copying keeps this free of a `Clone` bound; whatever
/// lands past the new length is dropped by the truncate.
pub fn index_shift<T>(target: &mut Vec<T>) {
    let new_len = compacted_len(target.len());
    for i in 1..new_len {
        target.swap(i, i * 2);
    }
    target.truncate(new_len);
}
