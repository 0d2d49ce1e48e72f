//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes either an explicit logger followed by `format!`-style
//! arguments, or just the arguments, in which case the process-wide default
//! logger is used. Arguments are passed through `format_args!`, so no
//! intermediate `String` is built for filtered messages. Every macro
//! evaluates to the `std::io::Result<()>` of the underlying write.
//!
//! # Examples
//!
//! ```
//! use leveled_log::{info, error, Logger, Severity};
//!
//! let logger = Logger::new(std::io::sink(), Severity::Info, "server");
//!
//! // With an explicit logger
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // With the default logger (standard error)
//! let user_id = 42;
//! error!("User {} failed to authenticate", user_id).ok();
//! ```

/// Log a message at a given severity.
///
/// # Examples
///
/// ```
/// # use leveled_log::{Logger, Severity};
/// # let logger = Logger::new(std::io::sink(), Severity::Info, "");
/// use leveled_log::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// log!(Severity::Notice, "to the default logger").ok();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::global::write($level, format_args!($fmt $(, $arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Debug, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::{Logger, Severity};
/// # let logger = Logger::new(std::io::sink(), Severity::Info, "");
/// use leveled_log::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Info, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Notice, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use leveled_log::{Logger, Severity};
/// # let logger = Logger::new(std::io::sink(), Severity::Info, "");
/// use leveled_log::warning;
/// warning!(logger, "Low disk space").unwrap();
/// warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Warning, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Error, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Critical, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Alert, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Emergency, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}

/// Log a fatal-level message. This does not exit the process.
///
/// # Examples
///
/// ```
/// # use leveled_log::{Logger, Severity};
/// # let logger = Logger::new(std::io::sink(), Severity::Info, "");
/// use leveled_log::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Severity::Fatal, $fmt $(, $arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
