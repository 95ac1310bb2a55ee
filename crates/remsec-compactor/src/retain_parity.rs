//! Strategy 2: filter-and-compact via `Vec::retain`.

/// Keep an element iff its position in the pass is even.
///
/// `retain` visits every element exactly once, in order, so a counter local
/// to the pass tracks the original index. Element values are never inspected.
pub fn retain_parity<T>(target: &mut Vec<T>) {
    let mut index = 0usize;
    target.retain(|_| {
        let keep = index & 1 == 0;
        index += 1;
        keep
    });
}
