//! Core facade types and traits

pub mod backend;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_format;
pub mod log_priority;
pub mod logger;
pub mod metrics;
pub mod properties;

pub use backend::LogBackend;
pub use config::{LoggerConfig, DEFAULT_MAX_MESSAGE_LEN, LOG_NDEBUG};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_format::LogFormat;
pub use log_priority::LogPriority;
pub use logger::{FatalHook, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use properties::{NoProperties, PropertySource, PropertyStore};
