//! Core orchestration: fan-out, join, and the final marker.

use std::sync::Arc;
use std::thread;

use seqfan_core::{report, HarnessError, LineSink};

use crate::interfaces::{ChildLauncher, ChildOutcome, TaskDescriptor};
use crate::worker;

/// Run every task on its own worker thread and join them all.
///
/// Fan-out is all-or-nothing: if any worker thread cannot be created
/// the run cannot proceed short-handed, already-started workers are
/// joined, and the error is returned. Workers whose child failed to
/// spawn (or that panicked) contribute no outcome; the run itself
/// still completes.
///
/// Joins happen in spawn order. Workers finish in whatever order the
/// scheduler produces; joining in a fixed order only establishes that
/// every task has reported before the final line is written.
pub fn run_all(
    descriptors: &[TaskDescriptor],
    launcher: Arc<dyn ChildLauncher>,
    sink: Arc<dyn LineSink>,
) -> Result<Vec<ChildOutcome>, HarnessError> {
    let mut handles = Vec::with_capacity(descriptors.len());
    let mut fan_out_error = None;

    for descriptor in descriptors {
        let descriptor = *descriptor;
        let launcher = Arc::clone(&launcher);
        let sink = Arc::clone(&sink);
        let spawned = thread::Builder::new()
            .name(format!("worker-{}", descriptor.task_id))
            .spawn(move || worker::run(&descriptor, launcher.as_ref(), sink.as_ref()));
        match spawned {
            Ok(handle) => handles.push((descriptor.task_id, handle)),
            Err(source) => {
                fan_out_error = Some(HarnessError::FanOut {
                    task_id: descriptor.task_id,
                    source,
                });
                break;
            }
        }
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for (task_id, handle) in handles {
        match handle.join() {
            Ok(Ok(outcome)) => outcomes.push(outcome),
            // The worker already reported its spawn failure.
            Ok(Err(_)) => {}
            Err(_) => tracing::error!(task_id, "worker thread panicked"),
        }
    }

    if let Some(err) = fan_out_error {
        return Err(err);
    }

    sink.write_line(&report::final_line());
    Ok(outcomes)
}
