//! Logger configuration loaded from files or the environment
//!
//! ```
//! use leveled_log::{LoggerConfig, Severity};
//!
//! let config = LoggerConfig {
//!     level: Severity::Warning,
//!     prefix: "api".to_string(),
//!     show_caller: false,
//! };
//! let logger = config.builder().sink(std::io::sink()).build();
//! assert_eq!(logger.level(), Severity::Warning);
//! ```

use super::{
    error::{LoggerError, Result},
    logger::{Logger, LoggerBuilder},
    severity::Severity,
};
use serde::{Deserialize, Serialize};

/// Environment variable holding a canonical level name.
pub const ENV_LEVEL: &str = "LOG_LEVEL";
/// Environment variable holding the prefix.
pub const ENV_PREFIX: &str = "LOG_PREFIX";
/// Environment variable enabling caller location (`true`/`false`/`1`/`0`).
pub const ENV_SHOW_CALLER: &str = "LOG_SHOW_CALLER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Severity,
    pub prefix: String,
    pub show_caller: bool,
}

impl LoggerConfig {
    /// Read the configuration from `LOG_LEVEL`, `LOG_PREFIX` and
    /// `LOG_SHOW_CALLER`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_LEVEL) {
            config.level = name.parse()?;
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            config.prefix = prefix;
        }
        if let Some(value) = lookup(ENV_SHOW_CALLER) {
            config.show_caller = parse_bool(&value).ok_or_else(|| {
                LoggerError::config(ENV_SHOW_CALLER, format!("expected a boolean, got '{}'", value))
            })?;
        }

        Ok(config)
    }

    /// A builder preloaded with this configuration.
    pub fn builder(&self) -> LoggerBuilder {
        Logger::builder()
            .level(self.level)
            .prefix(self.prefix.clone())
            .show_caller(self.show_caller)
    }

    /// Push this configuration into an existing logger, e.g. the default
    /// instance.
    pub fn apply(&self, logger: &Logger) {
        logger.set_level(self.level);
        logger.set_prefix(&self.prefix);
        logger.set_show_caller(self.show_caller);
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
