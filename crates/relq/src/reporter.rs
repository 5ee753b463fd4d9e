//! Result reporters
//!
//! A [`Reporter`] is the sink a sample writes its results to, one record at
//! a time and in iteration order.

use std::fmt::Display;
use std::io::{self, Write};
use tracing::info;

/// Sink for result records.
pub trait Reporter {
    /// Receive one record.
    fn report(&mut self, record: &dyn Display);

    /// Mark the start of a titled section (a sample, a sub-result).
    fn section(&mut self, title: &str) {
        self.report(&format_args!("== {} ==", title));
    }
}

/// Writes each record as a line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a console reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, record: &dyn Display) {
        let mut out = io::stdout().lock();
        // A closed stdout (e.g. a broken pipe) just drops the record.
        let _ = writeln!(out, "{}", record);
    }
}

/// Emits each record as an `info!` event.
#[derive(Debug, Default)]
pub struct TracingReporter {
    reported: usize,
}

impl TracingReporter {
    /// Create a tracing reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records emitted so far.
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, record: &dyn Display) {
        self.reported += 1;
        info!(seq = self.reported, "{}", record);
    }

    fn section(&mut self, title: &str) {
        info!(section = title, "section");
    }
}

/// Collects records as strings.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    lines: Vec<String>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record received, in order. Section headers are included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the collected lines, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, record: &dyn Display) {
        self.lines.push(record.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_keeps_order() {
        let mut reporter = MemoryReporter::new();
        reporter.section("numbers");
        for n in [4, 1, 3] {
            reporter.report(&n);
        }
        assert_eq!(reporter.lines(), ["== numbers ==", "4", "1", "3"]);
        assert_eq!(reporter.take().len(), 4);
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn test_tracing_reporter_counts_records() {
        let mut reporter = TracingReporter::new();
        reporter.section("ignored by the count");
        reporter.report(&"a");
        reporter.report(&"b");
        assert_eq!(reporter.reported(), 2);
    }
}
