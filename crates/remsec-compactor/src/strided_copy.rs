//! Strategy 3: strided view copy.

use crate::compacted_len;

/// Move the elements at positions `0, 2, 4, ...` to the front, then truncate.
///
/// The lazy `step_by(2)` view is over positions, not elements: a view
/// borrowing the elements cannot coexist with writes into the same `Vec`.
/// The loop therefore amounts to `index_shift` starting at slot 0.
pub fn strided_copy<T>(target: &mut Vec<T>) {
    let len = target.len();
    for (dst, src) in (0..len).step_by(2).enumerate() {
        target.swap(dst, src);
    }
    target.truncate(compacted_len(len));
}
