use serde::Serialize;

use crate::position::Position;

/// Half-open span `[start, end)` handed to a single worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChunkRange<P> {
    pub start: P,
    pub end: P,
}

impl<P: Position> ChunkRange<P> {
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> P {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: P) -> bool {
        self.start <= pos && pos < self.end
    }
}

