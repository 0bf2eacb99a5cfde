//! # seqfan-orchestration
//!
//! Fan-out/join orchestration for the seqfan harness: plans one task per
//! sequence kind, runs each task on its own worker thread, and lets
//! every worker supervise exactly one child process.

pub mod interfaces;
pub mod orchestrator;
pub mod planning;
pub mod worker;

pub use interfaces::{ChildLauncher, ChildOutcome, ChildStatus, TaskDescriptor};
pub use orchestrator::run_all;
pub use planning::plan;
