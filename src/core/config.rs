//! Facade configuration
//!
//! `LoggerConfig` can be built in code, through [`LoggerBuilder`], or
//! loaded from JSON. Missing JSON fields take their defaults:
//!
//! ```
//! use rust_liblog_system::{LoggerConfig, LogPriority};
//!
//! let config = LoggerConfig::from_json_str(r#"{ "tag": "netd", "max_message_len": 4068 }"#).unwrap();
//! assert_eq!(config.tag.as_deref(), Some("netd"));
//! assert_eq!(config.default_priority, LogPriority::Verbose);
//! ```
//!
//! [`LoggerBuilder`]: crate::LoggerBuilder

use super::error::{LoggerError, Result};
use super::log_priority::LogPriority;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Portable floor for the maximum message length, in bytes
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1023;

/// True when built with the `log-ndebug` feature.
///
/// Verbose macros and the debug-only fatal checks are compiled out, and
/// `Logger::test_log` defaults to `Debug` instead of `Verbose`.
pub const LOG_NDEBUG: bool = cfg!(feature = "log-ndebug");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Ambient tag used by the shortcut macros
    pub tag: Option<String>,
    /// Threshold used by `write` when no property applies
    pub default_priority: LogPriority,
    /// Process-wide minimum, `Default` when unset
    pub min_priority: LogPriority,
    /// Messages longer than this many bytes are truncated
    pub max_message_len: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tag: None,
            default_priority: LogPriority::Verbose,
            min_priority: LogPriority::Default,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// Returns `true` if anything changed.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;
        if self.max_message_len == 0 {
            self.max_message_len = DEFAULT_MAX_MESSAGE_LEN;
            changed = true;
        }
        if !self.default_priority.is_message_priority() {
            self.default_priority = LogPriority::Verbose;
            changed = true;
        }
        if self.min_priority == LogPriority::Unknown {
            self.min_priority = LogPriority::Default;
            changed = true;
        }
        changed
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_message_len == 0 {
            return Err(LoggerError::config(
                "LoggerConfig",
                "max_message_len must be greater than zero",
            ));
        }
        if !self.default_priority.is_message_priority() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "default_priority must be VERBOSE..FATAL, got {}",
                    self.default_priority
                ),
            ));
        }
        if self.min_priority == LogPriority::Unknown {
            return Err(LoggerError::config(
                "LoggerConfig",
                "min_priority cannot be UNKNOWN",
            ));
        }
        Ok(())
    }
}
