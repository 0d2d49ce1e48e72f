//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    format::{normalize_prefix, standard_format, terminate, Formatter, Record},
    severity::Severity,
};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;

/// Everything a write depends on, guarded by one lock.
struct LoggerState {
    sink: Box<dyn Write + Send>,
    threshold: Severity,
    /// Stored normalized: empty, or the caller's prefix with a leading space.
    prefix: String,
    show_caller: bool,
    formatter: Formatter,
}

/// Leveled logger writing formatted lines to a single sink.
///
/// All configuration and the write itself sit behind one mutex, so lines from
/// concurrent callers never interleave and a `set_level`/`set_prefix` is seen
/// either fully or not at all by any given call.
///
/// # Example
///
/// ```
/// use leveled_log::{Logger, Severity};
///
/// let logger = Logger::new(std::io::sink(), Severity::Info, "myapp");
/// logger.info("something happened").unwrap();
/// logger.error(format_args!("request {} failed", 42)).unwrap();
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Create a logger writing to `sink`, emitting `threshold` and above.
    pub fn new(sink: impl Write + Send + 'static, threshold: Severity, prefix: &str) -> Self {
        Self::from_parts(Box::new(sink), threshold, prefix, false, Box::new(standard_format))
    }

    fn from_parts(
        sink: Box<dyn Write + Send>,
        threshold: Severity,
        prefix: &str,
        show_caller: bool,
        formatter: Formatter,
    ) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                sink,
                threshold,
                prefix: normalize_prefix(prefix),
                show_caller,
                formatter,
            }),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use leveled_log::{Logger, Severity};
    ///
    /// let logger = Logger::builder()
    ///     .level(Severity::Debug)
    ///     .prefix("worker")
    ///     .sink(std::io::sink())
    ///     .build();
    /// assert_eq!(logger.level(), Severity::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the prefix. An empty string removes it.
    pub fn set_prefix(&self, prefix: &str) {
        let mut state = self.state.lock();
        state.prefix = normalize_prefix(prefix);
    }

    /// Current prefix as it was given to [`Logger::set_prefix`].
    pub fn prefix(&self) -> String {
        let state = self.state.lock();
        state.prefix.strip_prefix(' ').unwrap_or(&state.prefix).to_string()
    }

    pub fn set_level(&self, threshold: Severity) {
        let mut state = self.state.lock();
        state.threshold = threshold;
    }

    /// Set the threshold from a canonical level name such as `"warning"`.
    ///
    /// Unknown names leave the threshold untouched.
    pub fn set_level_by_name(&self, name: &str) -> Result<()> {
        let threshold =
            Severity::from_name(name).ok_or_else(|| LoggerError::invalid_level_name(name))?;
        self.set_level(threshold);
        Ok(())
    }

    pub fn level(&self) -> Severity {
        self.state.lock().threshold
    }

    /// Include the calling `file:line` in every line.
    pub fn set_show_caller(&self, show_caller: bool) {
        let mut state = self.state.lock();
        state.show_caller = show_caller;
    }

    pub fn shows_caller(&self) -> bool {
        self.state.lock().show_caller
    }

    /// Replace the line formatter. [`standard_format`] is the default.
    pub fn set_formatter(&self, formatter: Formatter) {
        let mut state = self.state.lock();
        state.formatter = formatter;
    }

    /// Restore [`standard_format`].
    pub fn reset_formatter(&self) {
        self.set_formatter(Box::new(standard_format));
    }

    /// Format and write one line at `severity`.
    ///
    /// Returns `Ok(())` without touching the sink when `severity` is below the
    /// threshold. Sink errors are returned as-is.
    ///
    /// `message` is rendered, and the formatter runs, while the logger's lock
    /// is held. The lock is not re-entrant: a `Display` impl or formatter that
    /// logs through this same logger (including the default instance, when
    /// called through it) deadlocks.
    #[track_caller]
    pub fn write(&self, severity: Severity, message: impl fmt::Display) -> io::Result<()> {
        let caller = Location::caller();
        let mut state = self.state.lock();

        if severity < state.threshold {
            return Ok(());
        }

        let record = Record {
            datetime: Local::now(),
            severity,
            prefix: &state.prefix,
            caller: state.show_caller.then_some(caller),
            message: &message,
        };
        let mut line = (state.formatter)(&record);
        terminate(&mut line);
        state.sink.write_all(line.as_bytes())
    }

    /// Flush the sink.
    pub fn flush(&self) -> io::Result<()> {
        self.state.lock().sink.flush()
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Debug, message)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Info, message)
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Notice, message)
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Warning, message)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Error, message)
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Critical, message)
    }

    #[inline]
    #[track_caller]
    pub fn alert(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Alert, message)
    }

    #[inline]
    #[track_caller]
    pub fn emergency(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Emergency, message)
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> io::Result<()> {
        self.write(Severity::Fatal, message)
    }

    /// Log `result`'s error at ERROR, if any.
    ///
    /// Returns `true` when an error was present. A failure to write the record
    /// is ignored.
    #[track_caller]
    pub fn error_if_failed<T, E: fmt::Display>(&self, result: &std::result::Result<T, E>) -> bool {
        match result {
            Ok(_) => false,
            Err(err) => {
                let _ = self.error(err);
                true
            }
        }
    }

    /// Unwrap `result`, logging its error at ERROR and panicking on failure.
    #[track_caller]
    pub fn panic_if_failed<T, E: fmt::Display>(&self, result: std::result::Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                let _ = self.error(&err);
                panic!("{}", err);
            }
        }
    }

    /// Unwrap `result`, logging its error at FATAL and exiting with status 1
    /// on failure.
    #[track_caller]
    pub fn fatal_if_failed<T, E: fmt::Display>(&self, result: std::result::Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                let _ = self.fatal(&err);
                let _ = self.flush();
                std::process::exit(1);
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Defaults to threshold INFO, no prefix, no caller location and standard
/// error as the sink.
pub struct LoggerBuilder {
    level: Severity,
    prefix: String,
    show_caller: bool,
    sink: Option<Box<dyn Write + Send>>,
    formatter: Option<Formatter>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Severity::Info,
            prefix: String::new(),
            show_caller: false,
            sink: None,
            formatter: None,
        }
    }

    /// Set the initial threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Set the initial prefix
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Include the calling `file:line` in every line
    #[must_use = "builder methods return a new value"]
    pub fn show_caller(mut self, show_caller: bool) -> Self {
        self.show_caller = show_caller;
        self
    }

    /// Set the destination for formatted lines
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Use a custom line formatter instead of [`standard_format`]
    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stderr()));
        let formatter = self.formatter.unwrap_or_else(|| Box::new(standard_format));
        Logger::from_parts(sink, self.level, &self.prefix, self.show_caller, formatter)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
