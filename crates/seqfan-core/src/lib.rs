//! # seqfan-core
//!
//! Core library for the seqfan concurrency harness: the four numeric
//! sequence generators, run configuration, the line-report protocol, and
//! the synchronized output sink shared by concurrent workers.

pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod kind;
pub mod report;
pub mod sink;

// Re-exports
pub use config::RunConfig;
pub use constants::{exit_codes, DEFAULT_ITERATIONS, DEFAULT_STEP_DELAY_US, WORKER_COUNT};
pub use error::HarnessError;
pub use generator::SequenceIter;
pub use kind::SequenceKind;
pub use sink::{LineSink, MemorySink, SyncLineSink};

/// Collect the first `count` terms of a sequence, without pacing.
///
/// Convenience for tests and tooling; the harness itself drives
/// [`SequenceIter`] term by term so it can pace the output.
///
/// # Example
/// ```
/// use seqfan_core::SequenceKind;
/// let terms = seqfan_core::terms(SequenceKind::Fibonacci, 6);
/// assert_eq!(terms, [(0, 0), (1, 1), (2, 1), (3, 2), (4, 3), (5, 5)]);
/// ```
#[must_use]
pub fn terms(kind: SequenceKind, count: u64) -> Vec<(u64, u64)> {
    SequenceIter::new(kind, count).collect()
}
