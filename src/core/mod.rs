//! Core logger types

pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod severity;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use format::{format_timestamp, standard_format, Formatter, Record, TIMESTAMP_FORMAT};
pub use logger::{Logger, LoggerBuilder};
pub use severity::Severity;
