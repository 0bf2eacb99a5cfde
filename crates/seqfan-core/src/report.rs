//! Line-report protocol: a bracketed tag plus `key=value` fields.
//!
//! Every line the harness prints goes through these helpers so the four
//! message classes (headers, generator terms, joins, the final marker)
//! stay uniform across threads and processes.

use std::fmt;

use crate::kind::SequenceKind;

/// Header tag for the parent side of a worker task.
pub const WORKER_TAG: &str = "worker";
/// Header tag re-emitted inside the child process.
pub const CHILD_TAG: &str = "child";
/// Tag for a worker's join summary.
pub const JOIN_TAG: &str = "join";
/// Tag for the orchestrator's final line.
pub const MAIN_TAG: &str = "main";

/// Current process id.
#[must_use]
pub fn pid() -> u32 {
    std::process::id()
}

/// Parent process id, or 0 where the platform does not expose it.
#[must_use]
pub fn ppid() -> u32 {
    #[cfg(unix)]
    {
        std::os::unix::process::parent_id()
    }
    #[cfg(not(unix))]
    {
        0
    }
}

/// Label for the current thread: its name, or the `ThreadId` debug form
/// for unnamed threads.
#[must_use]
pub fn thread_label() -> String {
    let current = std::thread::current();
    match current.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}

/// Header line identifying a task's execution context.
#[must_use]
pub fn header_line(tag: &str, task_id: u32) -> String {
    format!(
        "[{tag}] task={task_id} pid={} ppid={} thread={}",
        pid(),
        ppid(),
        thread_label()
    )
}

/// Generator term line, tagged by sequence kind.
#[must_use]
pub fn term_line(kind: SequenceKind, task_id: u32, index: u64, value: u64) -> String {
    format!(
        "[{}] task={task_id} pid={} i={index} value={value}",
        kind.tag(),
        pid()
    )
}

/// Join summary line for one worker task.
#[must_use]
pub fn join_line(task_id: u32, child_id: u32, outcome: impl fmt::Display) -> String {
    format!("[{JOIN_TAG}] task={task_id} child={child_id} outcome={outcome}")
}

/// Final line the orchestrator prints after every join has completed.
#[must_use]
pub fn final_line() -> String {
    format!("[{MAIN_TAG}] pid={} terminated", pid())
}
