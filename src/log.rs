use std::panic::Location;

use crate::error::LogError;

/// Anything that can receive one formatted log line at a time.
pub trait LineSink {
    /// Consumes a single line, without trailing newline.
    fn emit_line(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Forwards every line to the `tracing` subscriber at `INFO` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn emit_line(&mut self, line: &str) {
        tracing::info!(target: "drivegeom::log", "{line}");
    }
}

/// Formats entries with source location and optional simulation time.
///
/// Owned by the application and handed its [`LineSink`] at construction;
/// there is no process-wide instance.
#[derive(Debug)]
pub struct Logger<S: LineSink> {
    sink: S,
    sim_time: Option<f64>,
}

impl<S: LineSink> Logger<S> {
    /// Creates a logger writing to `sink`, without simulation time.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            sim_time: None,
        }
    }

    /// Prefixes subsequent entries with the given simulation time.
    #[must_use]
    pub fn with_sim_time(mut self, time: f64) -> Self {
        self.sim_time = Some(time);
        self
    }

    /// Updates or clears the simulation time prefix.
    pub fn set_sim_time(&mut self, time: Option<f64>) {
        self.sim_time = time;
    }

    /// Returns the underlying sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the logger and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Emits the build header line.
    pub fn announce(&mut self) {
        let header = format!("drivegeom BUILD VERSION: {}", env!("CARGO_PKG_VERSION"));
        self.sink.emit_line(&header);
    }

    /// Formats and emits one entry tagged with the caller's location.
    #[track_caller]
    pub fn log(&mut self, message: &str) {
        let entry = self.format_entry(Location::caller(), message);
        self.sink.emit_line(&entry);
    }

    /// Logs `message` like [`log`](Self::log) and returns it as a
    /// [`LogError::Fatal`] for the caller to propagate.
    #[track_caller]
    #[must_use]
    pub fn fatal(&mut self, message: &str) -> LogError {
        let entry = self.format_entry(Location::caller(), message);
        self.sink.emit_line(&entry);
        LogError::Fatal(entry)
    }

    fn format_entry(&self, location: &Location<'_>, message: &str) -> String {
        match self.sim_time {
            Some(t) => format!("{t:.3} {} / {}: {message}", location.file(), location.line()),
            None => format!("{} / {}: {message}", location.file(), location.line()),
        }
    }
}
