//! Worker task: one thread supervising exactly one child process.

use seqfan_core::{report, HarnessError, LineSink};

use crate::interfaces::{ChildLauncher, ChildOutcome, ChildStatus, TaskDescriptor};

/// Run one worker task to completion.
///
/// Emits the worker header, launches the task's child process, blocks
/// until that specific child reaches a terminal state, and emits the
/// join summary. A spawn failure is fatal to this task only: it is
/// logged and returned as an error, and no join line is emitted. A
/// failure of the wait operation itself is recovered in place as an
/// [`ChildStatus::Unknown`] outcome.
pub fn run(
    descriptor: &TaskDescriptor,
    launcher: &dyn ChildLauncher,
    sink: &dyn LineSink,
) -> Result<ChildOutcome, HarnessError> {
    let task_id = descriptor.task_id;
    sink.write_line(&report::header_line(report::WORKER_TAG, task_id));

    let mut child = launcher.launch(descriptor).map_err(|source| {
        tracing::error!(task_id, error = %source, "failed to spawn child process");
        HarnessError::Spawn { task_id, source }
    })?;
    let child_id = child.id();

    // Wait on the one child this task owns; unrelated processes are
    // never reaped here.
    let status = match child.wait() {
        Ok(exit) => match exit.code() {
            Some(code) => ChildStatus::Exited(code),
            None => ChildStatus::Terminated,
        },
        Err(err) => {
            tracing::warn!(task_id, child_id, error = %err, "could not observe child termination");
            ChildStatus::Unknown
        }
    };

    sink.write_line(&report::join_line(task_id, child_id, status));
    Ok(ChildOutcome {
        task_id,
        child_id,
        status,
    })
}
