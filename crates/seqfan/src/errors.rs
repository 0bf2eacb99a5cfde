//! Error handling and exit codes.

use seqfan_core::{exit_codes, HarnessError};

/// Map a run error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<HarnessError>() {
        Some(HarnessError::InvalidIterations(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Whether the error should be followed by the usage line.
#[must_use]
pub fn is_usage_error(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<HarnessError>(),
        Some(HarnessError::InvalidIterations(_))
    )
}
