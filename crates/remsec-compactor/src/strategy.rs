//! Strategy registry — the flat list the harness and benches iterate.

use std::fmt;

use crate::{index_shift, retain_parity, strided_copy};

/// One of the interchangeable compaction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    IndexShift,
    RetainParity,
    StridedCopy,
}

impl Strategy {
    /// Every strategy, in registration order.
    pub const ALL: [Strategy; 3] = [Self::IndexShift, Self::RetainParity, Self::StridedCopy];

    pub fn name(&self) -> &'static str {
        match self {
            Self::IndexShift => "index_shift",
            Self::RetainParity => "retain_parity",
            Self::StridedCopy => "strided_copy",
        }
    }

    /// The strategy as a plain function pointer for element type `T`.
    pub fn compact_fn<T>(&self) -> fn(&mut Vec<T>) {
        match self {
            Self::IndexShift => index_shift::<T>,
            Self::RetainParity => retain_parity::<T>,
            Self::StridedCopy => strided_copy::<T>,
        }
    }

    /// Compact `target` in place.
    pub fn apply<T>(&self, target: &mut Vec<T>) {
        (self.compact_fn())(target)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
