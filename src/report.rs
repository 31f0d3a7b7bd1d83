use std::fmt::Write;

use serde::Serialize;
use thiserror::Error;

use crate::position::Position;
use crate::shared_types::ChunkRange;
use crate::splitter::Splitter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PlanFormat {
    /// One line per chunk
    #[default]
    Plain,
    /// A single JSON document
    Json,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to encode plan as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to format plan: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Serialize)]
struct PlanDocument<P> {
    begin: P,
    end: P,
    count: P,
    boundaries: Vec<P>,
    chunks: Vec<ChunkRange<P>>,
}

/// Render every chunk of `splitter` in the requested format.
pub fn render_plan<P: Position + Serialize>(
    splitter: &Splitter<P>,
    format: PlanFormat,
) -> Result<String, ReportError> {
    match format {
        PlanFormat::Plain => {
            let mut out = String::new();
            for (i, chunk) in splitter.chunks().enumerate() {
                writeln!(
                    out,
                    "chunk {i}: [{}, {}) len={}",
                    chunk.start,
                    chunk.end,
                    chunk.len()
                )?;
            }
            Ok(out)
        }
        PlanFormat::Json => {
            let doc = PlanDocument {
                begin: splitter.begin_pos(),
                end: splitter.end_pos(),
                count: splitter.count(),
                boundaries: splitter.iter().collect(),
                chunks: splitter.chunks().collect(),
            };
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}
