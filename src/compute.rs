use crate::errors::SplitError;
use crate::position::Position;
use crate::splitter::partition;

/// Fill `splitters` with the `count + 1` boundaries of `size` objects split
/// into `count` chunks.
///
/// The vector is resized to exactly `count + 1` entries, starting at `0` and
/// ending at `size`. The first `size % count` chunks are one object longer
/// than the rest; with more chunks than objects the trailing ones stay empty:
///
/// ```
/// let mut splitters = Vec::new();
/// eqsplit::compute_splitters(&mut splitters, 3u32, 5);
/// assert_eq!(splitters, [0, 1, 2, 3, 3, 3]);
/// ```
///
/// `count == 0` is only accepted for `size == 0`, which yields `[0]`. Any
/// other zero count, and negative inputs, panic.
pub fn compute_splitters<P: Position>(splitters: &mut Vec<P>, size: P, count: P) {
    if size.below_zero() {
        panic!("{}", SplitError::negative("size", size));
    }
    if count.below_zero() {
        panic!("{}", SplitError::negative("count", count));
    }

    splitters.clear();
    if count.is_zero() {
        if !size.is_zero() {
            panic!("{}", SplitError::ZeroCount);
        }
        splitters.push(P::zero());
        return;
    }
    if let Some(chunks) = count.to_usize() {
        splitters.reserve_exact(chunks.saturating_add(1));
    }

    let (floor, rest) = partition(size, count);
    trace!("computing splitters for {size} objects in {count} chunks: {floor} (+1 for the first {rest})");

    let mut pos = P::zero();
    let mut i = P::zero();

    // the first (size % count) blocks have length (size / count) + 1;
    // floor + 1 is never stored since it overflows for size == P::MAX, count == 1
    while i < rest {
        splitters.push(pos);
        pos = pos + floor + P::one();
        i = i + P::one();
    }

    // the remaining blocks have length (size / count)
    while i < count {
        splitters.push(pos);
        pos = pos + floor;
        i = i + P::one();
    }
    splitters.push(pos);

    debug_assert_eq!(pos, size);
}

/// Owned variant of [`compute_splitters`].
pub fn splitters<P: Position>(size: P, count: P) -> Vec<P> {
    let mut out = Vec::new();
    compute_splitters(&mut out, size, count);
    out
}
