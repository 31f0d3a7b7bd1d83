use std::cmp;
use std::iter::FusedIterator;

use crate::errors::SplitError;
use crate::position::Position;
use crate::shared_types::ChunkRange;

/// How boundaries are sampled over an interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// Sizes differ by at most one; the first `rest` chunks are the longer ones.
    #[default]
    Equidistant,
}

impl SplitStrategy {
    /// Position of boundary `i`, given the interval start and its partition.
    pub fn boundary_at<P: Position>(self, begin_pos: P, block_length: P, rest: P, i: P) -> P {
        match self {
            SplitStrategy::Equidistant => begin_pos + block_length * i + cmp::min(i, rest),
        }
    }

    /// Index of the chunk holding the element `offset` steps into the interval.
    ///
    /// `offset` must be smaller than the interval size.
    pub fn chunk_containing<P: Position>(self, block_length: P, rest: P, offset: P) -> P {
        match self {
            SplitStrategy::Equidistant => {
                if rest.is_zero() {
                    return offset / block_length;
                }
                // rest > 0 means count >= 2, so the long block fits in P
                let long_block = block_length + P::one();
                let long_prefix = long_block * rest;
                if offset < long_prefix {
                    offset / long_block
                } else {
                    // offset < size implies a non-empty short block here
                    rest + (offset - long_prefix) / block_length
                }
            }
        }
    }
}

/// Floor block length and remainder of `size` split `count` ways.
pub(crate) fn partition<P: Position>(size: P, count: P) -> (P, P) {
    (size / count, size % count)
}

/// Lazily evaluated boundaries of `count` chunks over `[begin_pos, end_pos)`.
///
/// Holds four numbers regardless of `count`; every boundary is computed on
/// access.
///
/// ```
/// use eqsplit::Splitter;
///
/// let splitter = Splitter::new(0u32, 10, 3);
/// let boundaries: Vec<u32> = splitter.iter().collect();
/// assert_eq!(boundaries, [0, 4, 7, 10]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Splitter<P> {
    begin_pos: P,
    count: P,
    block_length: P,
    rest: P,
    strategy: SplitStrategy,
}

impl<P: Position> Splitter<P> {
    /// Panics if `count` is not positive or `end_pos < begin_pos`.
    pub fn new(begin_pos: P, end_pos: P, count: P) -> Self {
        Self::with_strategy(begin_pos, end_pos, count, SplitStrategy::default())
    }

    pub fn with_strategy(begin_pos: P, end_pos: P, count: P, strategy: SplitStrategy) -> Self {
        match Self::try_with_strategy(begin_pos, end_pos, count, strategy) {
            Ok(splitter) => splitter,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(begin_pos: P, end_pos: P, count: P) -> Result<Self, SplitError> {
        Self::try_with_strategy(begin_pos, end_pos, count, SplitStrategy::default())
    }

    pub fn try_with_strategy(
        begin_pos: P,
        end_pos: P,
        count: P,
        strategy: SplitStrategy,
    ) -> Result<Self, SplitError> {
        if count.below_zero() {
            return Err(SplitError::negative("count", count));
        }
        if count.is_zero() {
            return Err(SplitError::ZeroCount);
        }
        if end_pos < begin_pos {
            return Err(SplitError::inverted(begin_pos, end_pos));
        }

        let (block_length, rest) = partition(end_pos - begin_pos, count);
        debug!(
            "splitting [{begin_pos}, {end_pos}) into {count} chunks of {block_length} (+1 for the first {rest})"
        );
        Ok(Self {
            begin_pos,
            count,
            block_length,
            rest,
            strategy,
        })
    }

    /// Number of boundaries, one more than the number of chunks.
    ///
    /// Overflows when `count` is the largest value of `P`; indexing and
    /// iteration never go through this value.
    pub fn length(&self) -> P {
        self.count + P::one()
    }

    pub fn count(&self) -> P {
        self.count
    }

    pub fn begin_pos(&self) -> P {
        self.begin_pos
    }

    pub fn end_pos(&self) -> P {
        self.begin_pos + self.size()
    }

    pub fn size(&self) -> P {
        self.block_length * self.count() + self.rest
    }

    pub fn block_length(&self) -> P {
        self.block_length
    }

    pub fn rest(&self) -> P {
        self.rest
    }

    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// Boundary `i`, for `0 <= i <= count`.
    ///
    /// Panics on any other index; see [`Splitter::get`] for the checked form.
    pub fn at(&self, i: P) -> P {
        match self.get(i) {
            Some(pos) => pos,
            None => panic!("{}", SplitError::out_of_range(i, self.count)),
        }
    }

    pub fn get(&self, i: P) -> Option<P> {
        if i.below_zero() || i > self.count {
            return None;
        }
        Some(self.boundary(i))
    }

    fn boundary(&self, i: P) -> P {
        self.strategy
            .boundary_at(self.begin_pos, self.block_length, self.rest, i)
    }

    /// Chunk `i` as `[at(i), at(i + 1))`, for `0 <= i < count`.
    pub fn chunk(&self, i: P) -> ChunkRange<P> {
        if i.below_zero() || i >= self.count {
            panic!("{}", SplitError::out_of_range(i, self.count - P::one()));
        }
        ChunkRange::new(self.boundary(i), self.boundary(i + P::one()))
    }

    /// Index of the non-empty chunk holding `pos`, if `pos` lies in the interval.
    pub fn chunk_index(&self, pos: P) -> Option<P> {
        if pos < self.begin_pos || pos >= self.end_pos() {
            return None;
        }
        let offset = pos - self.begin_pos;
        Some(
            self.strategy
                .chunk_containing(self.block_length, self.rest, offset),
        )
    }

    pub fn iter(&self) -> Boundaries<P> {
        Boundaries {
            splitter: *self,
            front: P::zero(),
            back: self.count,
            exhausted: false,
        }
    }

    pub fn chunks(&self) -> Chunks<P> {
        Chunks {
            splitter: *self,
            front: P::zero(),
            back: self.count,
        }
    }
}

impl<P: Position> IntoIterator for Splitter<P> {
    type Item = P;
    type IntoIter = Boundaries<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Position> IntoIterator for &Splitter<P> {
    type Item = P;
    type IntoIter = Boundaries<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the boundaries of a [`Splitter`].
///
/// `front..=back` are the indices still to be yielded; the range is inclusive
/// so that `count == P::MAX` never needs `count + 1`.
#[derive(Clone, Debug)]
pub struct Boundaries<P> {
    splitter: Splitter<P>,
    front: P,
    back: P,
    exhausted: bool,
}

impl<P: Position> Iterator for Boundaries<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.exhausted {
            return None;
        }
        let pos = self.splitter.boundary(self.front);
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + P::one();
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        exact_hint(
            self.front
                .steps_to(self.back)
                .and_then(|n| n.checked_add(1)),
        )
    }
}

impl<P: Position> DoubleEndedIterator for Boundaries<P> {
    fn next_back(&mut self) -> Option<P> {
        if self.exhausted {
            return None;
        }
        let pos = self.splitter.boundary(self.back);
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - P::one();
        }
        Some(pos)
    }
}

impl<P: Position> ExactSizeIterator for Boundaries<P> {}

impl<P: Position> FusedIterator for Boundaries<P> {}

/// Iterator over the chunks of a [`Splitter`], empty ones included.
#[derive(Clone, Debug)]
pub struct Chunks<P> {
    splitter: Splitter<P>,
    front: P,
    back: P,
}

impl<P: Position> Iterator for Chunks<P> {
    type Item = ChunkRange<P>;

    fn next(&mut self) -> Option<ChunkRange<P>> {
        if self.front >= self.back {
            return None;
        }
        let chunk = self.splitter.chunk(self.front);
        self.front = self.front + P::one();
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.front.steps_to(self.back))
    }
}

impl<P: Position> DoubleEndedIterator for Chunks<P> {
    fn next_back(&mut self) -> Option<ChunkRange<P>> {
        if self.front >= self.back {
            return None;
        }
        self.back = self.back - P::one();
        Some(self.splitter.chunk(self.back))
    }
}

impl<P: Position> ExactSizeIterator for Chunks<P> {}

/// An exact hint when the remaining count fits in `usize`, otherwise an
/// unbounded one, which makes `ExactSizeIterator::len` panic instead of
/// reporting a truncated length.
fn exact_hint(remaining: Option<usize>) -> (usize, Option<usize>) {
    match remaining {
        Some(n) => (n, Some(n)),
        None => (usize::MAX, None),
    }
}

impl<P: Position> FusedIterator for Chunks<P> {}
