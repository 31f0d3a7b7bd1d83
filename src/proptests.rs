//! Property-based tests tying the lazy and eager splitters together.
//!
//! - Both entry points produce identical boundaries
//! - Chunk sizes always add back up to the split size
//! - Reusing an output vector never leaks stale boundaries

use proptest::prelude::*;

use crate::{compute_splitters, splitters, Splitter};

proptest! {
    /// Eager boundaries match the lazy splitter over `[0, size)` index by index.
    #[test]
    fn eager_and_lazy_agree(size in 0u64..1_000_000, count in 1u64..1_000) {
        let eager = splitters(size, count);
        let lazy = Splitter::new(0, size, count);
        for i in 0..=count {
            prop_assert_eq!(eager[i as usize], lazy.at(i));
        }
    }

    /// Same agreement for signed coordinates.
    #[test]
    fn eager_and_lazy_agree_signed(size in 0i32..50_000, count in 1i32..200) {
        let eager = splitters(size, count);
        let lazy: Vec<i32> = Splitter::new(0, size, count).iter().collect();
        prop_assert_eq!(eager, lazy);
    }

    /// Chunk sizes add up to the whole size.
    #[test]
    fn sum_law(size in 0usize..100_000, count in 1usize..1_000) {
        let out = splitters(size, count);
        let total: usize = out.windows(2).map(|w| w[1] - w[0]).sum();
        prop_assert_eq!(total, size);
    }

    /// A reused output vector ends up exactly as a fresh one.
    #[test]
    fn reused_output_is_overwritten(
        stale in proptest::collection::vec(any::<u32>(), 0..64),
        size in 0u32..10_000,
        count in 1u32..64,
    ) {
        let mut out = stale;
        compute_splitters(&mut out, size, count);
        prop_assert_eq!(out, splitters(size, count));
    }
}
