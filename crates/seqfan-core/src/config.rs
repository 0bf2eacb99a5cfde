//! Run configuration shared by every worker task.

use std::time::Duration;

use crate::error::HarnessError;

/// Immutable per-run configuration, shared by copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of terms each child computes.
    pub iterations: u64,
    /// Pause between consecutive terms.
    pub step_delay: Duration,
}

impl RunConfig {
    /// Build a validated configuration from raw CLI values.
    ///
    /// The iteration count arrives signed so that a negative argument is
    /// rejected here with a usage error rather than at argument parsing.
    pub fn new(iterations: i64, delay_us: u64) -> Result<Self, HarnessError> {
        if iterations <= 0 {
            return Err(HarnessError::InvalidIterations(iterations));
        }
        #[allow(clippy::cast_sign_loss)]
        let iterations = iterations as u64;
        Ok(Self {
            iterations,
            step_delay: Duration::from_micros(delay_us),
        })
    }
}
