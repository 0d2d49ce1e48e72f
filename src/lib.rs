//! # Leveled Log
//!
//! A small leveled logger: timestamped, prefixed lines filtered by a
//! severity threshold and written to any `std::io::Write` sink.
//!
//! ## Features
//!
//! - **Nine severities**: DEBUG through FATAL, totally ordered
//! - **Thread Safe**: one lock per logger; lines never interleave
//! - **Default Instance**: free functions and macros log to standard error
//!   without carrying a logger around
//!
//! Lines look like `2025-01-08 10:30:45 ERROR myapp - boom`.
//!
//! ```
//! use leveled_log::{Logger, Severity};
//!
//! let logger = Logger::new(std::io::sink(), Severity::Info, "myapp");
//! logger.debug("dropped").unwrap();
//! logger.error("something exploded").unwrap();
//!
//! leveled_log::set_prefix("myapp");
//! leveled_log::info!("hello {}", "Tobi").ok();
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Formatter, Logger, LoggerBuilder, LoggerConfig, LoggerError, Record, Result, Severity,
    };
}

pub use crate::core::{
    format_timestamp, standard_format, Formatter, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Record, Result, Severity, TIMESTAMP_FORMAT,
};
pub use crate::global::{
    alert, critical, debug, default_logger, emergency, error, error_if_failed, fatal,
    fatal_if_failed, flush, info, level, notice, panic_if_failed, prefix, reset_formatter,
    set_formatter, set_level, set_level_by_name, set_prefix, set_show_caller, warning, write,
};
