//! Line formatting
//!
//! Every record is rendered by the logger's [`Formatter`]. The default,
//! [`standard_format`], produces
//!
//! ```text
//! 2025-01-08 10:30:45 INFO myapp - message
//! ```
//!
//! i.e. `"{timestamp} {SEVERITY}{prefix} - {message}\n"`. The prefix is stored
//! already normalized (leading space included) so the layout itself needs no
//! separator logic. With caller location enabled, `" {file}:{line}"` is
//! inserted before the `" - "` separator.

use super::severity::Severity;
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::Path;

/// strftime pattern for the timestamp field (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a formatter may put into a line.
pub struct Record<'a> {
    pub datetime: DateTime<Local>,
    pub severity: Severity,
    /// Normalized prefix: empty, or the configured prefix with a leading space.
    pub prefix: &'a str,
    /// Set only when caller location is enabled on the logger.
    pub caller: Option<&'a Location<'a>>,
    pub message: &'a dyn fmt::Display,
}

/// Turns a [`Record`] into one line.
///
/// Called with the logger's lock held. A line that does not end in `\n` gets
/// one appended before it reaches the sink.
///
/// # Example
///
/// ```
/// use leveled_log::{Logger, Record, Severity};
///
/// let logger = Logger::builder()
///     .sink(std::io::sink())
///     .formatter(Box::new(|record: &Record<'_>| {
///         format!("[{}]{} {}", record.severity, record.prefix, record.message)
///     }))
///     .build();
/// logger.info("custom layout").unwrap();
/// ```
pub type Formatter = Box<dyn Fn(&Record<'_>) -> String + Send>;

/// Render a timestamp with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Turn a caller-supplied prefix into its stored form.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!(" {}", prefix)
    }
}

/// Append `\n` unless the line already ends with one.
pub(crate) fn terminate(line: &mut String) {
    if !line.ends_with('\n') {
        line.push('\n');
    }
}

/// Base name of the source file, e.g. `main.rs` for `src/bin/main.rs`.
fn file_base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// The default layout, terminated by exactly one `\n`.
pub fn standard_format(record: &Record<'_>) -> String {
    let mut line = format_timestamp(&record.datetime);
    line.push(' ');
    line.push_str(record.severity.to_str());
    line.push_str(record.prefix);

    // Writing into a String only fails if a Display impl reports an error;
    // whatever was rendered up to that point is kept.
    if let Some(location) = record.caller {
        let _ = write!(line, " {}:{}", file_base_name(location.file()), location.line());
    }

    line.push_str(" - ");
    let _ = write!(line, "{}", record.message);

    terminate(&mut line);
    line
}
