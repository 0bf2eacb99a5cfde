//! Shared output sink with per-line atomicity.
//!
//! Concurrent workers (and each child process, for its own stdout)
//! funnel every line through a [`LineSink`]. The sink serializes
//! individual line writes; it imposes no ordering across tasks.

use std::io::{self, Write};

use parking_lot::Mutex;

/// A sink accepting whole lines from concurrent writers.
pub trait LineSink: Send + Sync {
    /// Write one line, atomically with respect to other callers.
    fn write_line(&self, line: &str);
}

/// Mutex-guarded sink over any writer; each line is written and flushed
/// under the lock.
pub struct SyncLineSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> SyncLineSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> LineSink for SyncLineSink<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        // A broken pipe is not worth crashing a worker over.
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }
}

/// Sink over standard output.
#[must_use]
pub fn stdout() -> SyncLineSink<io::Stdout> {
    SyncLineSink::new(io::stdout())
}

/// Sink that collects lines in memory, for consumers that want to
/// inspect a run's output and for tests.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected lines, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
