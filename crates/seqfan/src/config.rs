//! Application configuration from CLI arguments.

use clap::Parser;

use seqfan_core::{SequenceKind, DEFAULT_ITERATIONS, DEFAULT_STEP_DELAY_US};

/// seqfan — process-per-task concurrency demonstration harness.
#[derive(Parser, Debug)]
#[command(name = "seqfan", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Number of terms each child computes.
    ///
    /// Parsed signed so a negative value reaches configuration
    /// validation instead of dying in argument parsing.
    #[arg(value_name = "ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: i64,

    /// Pause between consecutive terms, in microseconds.
    #[arg(value_name = "DELAY_US", default_value_t = DEFAULT_STEP_DELAY_US)]
    pub delay_us: u64,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Run as the child for one task: compute this sequence and exit.
    /// Internal, used by the harness to re-execute itself.
    #[arg(long, hide = true, value_name = "KIND")]
    pub child: Option<SequenceKind>,

    /// Task id the child reports in its output lines. Internal.
    #[arg(long, hide = true, default_value_t = 0, value_name = "ID")]
    pub task_id: u32,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
