//! Where the icon trace lines go.

use bevy::prelude::*;

/// Something that can take one line of trace output.
pub trait TraceSink {
    fn record(&mut self, line: &str);
}

/// Writes every line straight to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTrace;

impl TraceSink for StdoutTrace {
    fn record(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every line in memory, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordedTrace {
    pub lines: Vec<String>,
}

impl TraceSink for RecordedTrace {
    fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// The trace sink shared by the icon plugins.
#[derive(Resource, Debug, Clone)]
pub enum IconTrace {
    Stdout(StdoutTrace),
    Recorded(RecordedTrace),
}

impl Default for IconTrace {
    fn default() -> Self {
        IconTrace::Stdout(StdoutTrace)
    }
}

impl IconTrace {
    pub fn recorded() -> Self {
        IconTrace::Recorded(RecordedTrace::default())
    }

    /// Lines captured so far, `None` when writing to stdout.
    pub fn recorded_lines(&self) -> Option<&[String]> {
        match self {
            IconTrace::Stdout(_) => None,
            IconTrace::Recorded(recorded) => Some(&recorded.lines),
        }
    }
}

impl TraceSink for IconTrace {
    fn record(&mut self, line: &str) {
        match self {
            IconTrace::Stdout(stdout) => stdout.record(line),
            IconTrace::Recorded(recorded) => recorded.record(line),
        }
    }
}
