//! Equidistant splitting of integer intervals.
//!
//! An interval `[begin, end)` is cut into `count` contiguous chunks whose
//! sizes differ by at most one, the longer ones first. [`Splitter`] computes
//! each boundary on demand; [`compute_splitters`] writes all of them into a
//! vector. Both give the same cuts, so work can be handed to a fixed number
//! of workers as `[boundary[i], boundary[i + 1])`.

#[macro_use]
extern crate log;

mod compute;
mod errors;
mod position;
mod report;
mod shared_types;
mod splitter;

#[cfg(test)]
mod proptests;

pub use compute::{compute_splitters, splitters};
pub use errors::SplitError;
pub use position::Position;
pub use report::{render_plan, PlanFormat, ReportError};
pub use shared_types::ChunkRange;
pub use splitter::{Boundaries, Chunks, SplitStrategy, Splitter};
