//! Child-mode entry: run one sequence generator to completion.

use std::thread;

use seqfan_core::{report, LineSink, RunConfig, SequenceIter, SequenceKind};

/// Run the generator for one task inside its child process.
///
/// Re-emits the header with the child's own process identity, then
/// emits one line per term, pausing for the configured delay between
/// terms but not after the last. The caller exits the process once
/// this returns; none of the parent's run path executes here.
pub fn run(kind: SequenceKind, task_id: u32, config: RunConfig, sink: &dyn LineSink) {
    sink.write_line(&report::header_line(report::CHILD_TAG, task_id));

    let mut terms = SequenceIter::new(kind, config.iterations).peekable();
    while let Some((index, value)) = terms.next() {
        sink.write_line(&report::term_line(kind, task_id, index, value));
        if terms.peek().is_some() && !config.step_delay.is_zero() {
            thread::sleep(config.step_delay);
        }
    }
}
