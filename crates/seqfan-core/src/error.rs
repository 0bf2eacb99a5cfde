//! Error type for the harness.

/// Errors that propagate beyond a single worker task.
///
/// Wait failures and abnormal child terminations are deliberately
/// absent: both are recovered inside the worker and surfaced as outcome
/// data rather than errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Iteration count was zero or negative.
    #[error("iteration count must be positive, got {0}")]
    InvalidIterations(i64),

    /// A worker thread could not be created; the run cannot proceed
    /// short-handed.
    #[error("failed to create worker thread for task {task_id}")]
    FanOut {
        /// Task whose worker thread failed to start.
        task_id: u32,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A child process could not be spawned; fatal to the owning task
    /// only.
    #[error("failed to spawn child process for task {task_id}")]
    Spawn {
        /// Task whose child failed to spawn.
        task_id: u32,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The harness could not locate its own executable for
    /// re-execution.
    #[error("could not locate the harness executable")]
    ExeDiscovery(#[source] std::io::Error),
}
