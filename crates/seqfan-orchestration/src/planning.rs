//! Task planning: one descriptor per sequence kind.

use seqfan_core::{RunConfig, SequenceKind};

use crate::interfaces::TaskDescriptor;

/// Build the fixed set of task descriptors for one run.
///
/// Task ids are 1-based and follow [`SequenceKind::ALL`] order, so task
/// 1 always computes the running sum and task 4 the Fibonacci sequence.
/// Every descriptor carries the same configuration by copy.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn plan(config: RunConfig) -> Vec<TaskDescriptor> {
    SequenceKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| TaskDescriptor {
            task_id: i as u32 + 1,
            kind,
            config,
        })
        .collect()
}
