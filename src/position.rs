use std::fmt::{Debug, Display};

use num_traits::PrimInt;

/// Coordinate type of an interval: any primitive integer, signed or not.
///
/// Callers pick a width large enough that `block_length * i` stays in range
/// for every boundary index they ask for. Iterators over more than
/// `usize::MAX` items (possible with 128-bit coordinates) report no exact
/// length.
pub trait Position: PrimInt + Debug + Display {
    fn below_zero(self) -> bool {
        self < Self::zero()
    }

    /// Number of steps in `[self, end)`, or `None` if it does not fit in `usize`.
    fn steps_to(self, end: Self) -> Option<usize> {
        if end <= self {
            return Some(0);
        }
        (end - self).to_usize()
    }
}

impl<T: PrimInt + Debug + Display> Position for T {}
