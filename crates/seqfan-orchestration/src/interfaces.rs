//! Orchestration interfaces and task-level types.

use std::fmt;
use std::io;
use std::process::Child;

use seqfan_core::{RunConfig, SequenceKind};

/// Everything a worker task needs to run: identity, sequence, config.
///
/// Built by planning, owned exclusively by one worker, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct TaskDescriptor {
    /// Task id, 1-based.
    pub task_id: u32,
    /// Sequence the child computes.
    pub kind: SequenceKind,
    /// Shared run configuration.
    pub config: RunConfig,
}

/// Terminal state of a worker's child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    /// Child exited normally with this code.
    Exited(i32),
    /// Child ended without an exit code (killed by a signal).
    Terminated,
    /// The wait operation itself failed; the child's fate is unknown.
    Unknown,
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "{code}"),
            Self::Terminated => f.write_str("terminated abnormally"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Outcome a worker records once its child reaches a terminal state.
#[derive(Debug, Clone, Copy)]
pub struct ChildOutcome {
    /// Owning task.
    pub task_id: u32,
    /// OS process id of the child.
    pub child_id: u32,
    /// How the child ended.
    pub status: ChildStatus,
}

/// Spawns the isolated child process for one task.
///
/// The binary provides the real implementation (re-executing itself in
/// child mode); tests substitute launchers that run arbitrary commands
/// or fail on demand.
pub trait ChildLauncher: Send + Sync {
    /// Spawn the child for `descriptor`, stdout inherited.
    fn launch(&self, descriptor: &TaskDescriptor) -> io::Result<Child>;
}
