//! Harness constants and process exit codes.

/// Number of worker tasks per run, one per sequence kind.
pub const WORKER_COUNT: usize = 4;

/// Default number of terms each child computes.
pub const DEFAULT_ITERATIONS: i64 = 15;

/// Default pause between terms, in microseconds.
pub const DEFAULT_STEP_DELAY_US: u64 = 200_000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (fan-out failure, executable discovery, ...).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
