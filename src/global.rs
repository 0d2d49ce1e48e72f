//! Process-wide default logger
//!
//! Lets call sites log without passing a [`Logger`] around:
//!
//! ```
//! leveled_log::info(format_args!("something {}", "here")).ok();
//! ```
//!
//! The instance writes to standard error with threshold INFO and no prefix.
//! It is created on first use and lives for the rest of the process; it can
//! be reconfigured through the setters below but never replaced.

use crate::core::{Formatter, Logger, Result, Severity};
use std::fmt;
use std::io;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared logger behind every free function in this module.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(io::stderr(), Severity::Info, ""))
}

pub fn set_prefix(prefix: &str) {
    default_logger().set_prefix(prefix);
}

pub fn prefix() -> String {
    default_logger().prefix()
}

pub fn set_level(threshold: Severity) {
    default_logger().set_level(threshold);
}

pub fn set_level_by_name(name: &str) -> Result<()> {
    default_logger().set_level_by_name(name)
}

pub fn level() -> Severity {
    default_logger().level()
}

pub fn set_show_caller(show_caller: bool) {
    default_logger().set_show_caller(show_caller);
}

pub fn set_formatter(formatter: Formatter) {
    default_logger().set_formatter(formatter);
}

pub fn reset_formatter() {
    default_logger().reset_formatter();
}

#[track_caller]
pub fn write(severity: Severity, message: impl fmt::Display) -> io::Result<()> {
    default_logger().write(severity, message)
}

pub fn flush() -> io::Result<()> {
    default_logger().flush()
}

#[track_caller]
pub fn debug(message: impl fmt::Display) -> io::Result<()> {
    default_logger().debug(message)
}

#[track_caller]
pub fn info(message: impl fmt::Display) -> io::Result<()> {
    default_logger().info(message)
}

#[track_caller]
pub fn notice(message: impl fmt::Display) -> io::Result<()> {
    default_logger().notice(message)
}

#[track_caller]
pub fn warning(message: impl fmt::Display) -> io::Result<()> {
    default_logger().warning(message)
}

#[track_caller]
pub fn error(message: impl fmt::Display) -> io::Result<()> {
    default_logger().error(message)
}

#[track_caller]
pub fn critical(message: impl fmt::Display) -> io::Result<()> {
    default_logger().critical(message)
}

#[track_caller]
pub fn alert(message: impl fmt::Display) -> io::Result<()> {
    default_logger().alert(message)
}

#[track_caller]
pub fn emergency(message: impl fmt::Display) -> io::Result<()> {
    default_logger().emergency(message)
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> io::Result<()> {
    default_logger().fatal(message)
}

#[track_caller]
pub fn error_if_failed<T, E: fmt::Display>(result: &std::result::Result<T, E>) -> bool {
    default_logger().error_if_failed(result)
}

#[track_caller]
pub fn panic_if_failed<T, E: fmt::Display>(result: std::result::Result<T, E>) -> T {
    default_logger().panic_if_failed(result)
}

/// Useful while bootstrapping, before anything can handle the error.
#[track_caller]
pub fn fatal_if_failed<T, E: fmt::Display>(result: std::result::Result<T, E>) -> T {
    default_logger().fatal_if_failed(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logger_is_single_instance() {
        let first = default_logger() as *const Logger;
        let second = std::thread::spawn(|| default_logger() as *const Logger as usize)
            .join()
            .expect("thread panicked");
        assert_eq!(first as usize, second);
    }

    // The default instance is shared by every test in this binary, so all
    // mutations happen in this one test and are undone at the end.
    #[test]
    fn test_forwarding_setters() {
        assert_eq!(level(), Severity::Info);
        assert_eq!(prefix(), "");

        set_level(Severity::Warning);
        assert_eq!(level(), Severity::Warning);

        set_level_by_name("debug").unwrap();
        assert_eq!(level(), Severity::Debug);
        assert!(set_level_by_name("Debug").is_err());
        assert_eq!(level(), Severity::Debug);

        set_prefix("myapp");
        assert_eq!(prefix(), "myapp");

        set_prefix("");
        set_level(Severity::Info);
        assert_eq!(level(), Severity::Info);
    }

    #[test]
    fn test_error_if_failed_ok() {
        assert!(!error_if_failed(&Ok::<(), String>(())));
        assert_eq!(panic_if_failed(Ok::<_, String>(3)), 3);
    }
}
