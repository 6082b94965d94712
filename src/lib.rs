//! # Rust liblog System
//!
//! A priority-tagged log facade in the style of Android's liblog, plus a
//! nullable handle adapter over a UMA metrics library.
//!
//! ## Features
//!
//! - **Priorities**: `VERBOSE` through `FATAL`, with `DEFAULT`, `UNKNOWN` and
//!   `SILENT` sentinels and stable integer values
//! - **Filtering**: per-tag and global thresholds from `log.tag.*` properties
//!   and a process-wide minimum priority
//! - **Macros**: `alogd!`, `aloge_if!`, `if_alogi!`, `alog_assert!` and friends,
//!   with verbose logging compiled out under the `log-ndebug` feature
//! - **Backends**: console, append-only file and in-memory ring
//! - **Metrics**: `MetricsHandle` forwards samples to a `MetricsLibrary` and
//!   reports `false` when there is none
//!
//! ## Quick start
//!
//! ```
//! use rust_liblog_system::prelude::*;
//! use rust_liblog_system::{aloge, alogi};
//!
//! let logger = Logger::builder()
//!     .tag("storaged")
//!     .backend(MemoryBackend::new(128))
//!     .build();
//!
//! alogi!(logger, "mounted {} volumes", 3);
//! aloge!(logger, "fsck failed on {}", "/data");
//! logger
//!     .write(LogPriority::Warn, Some("vold"), "low space")
//!     .unwrap();
//! ```

pub mod backends;
pub mod core;
pub mod macros;
pub mod uma;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::backends::ConsoleBackend;
    pub use crate::backends::{FileBackend, MemoryBackend};
    pub use crate::core::{
        FatalHook, LogBackend, LogEntry, LogFormat, LogPriority, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, PropertySource, PropertyStore, Result,
    };
    pub use crate::uma::{MetricsHandle, MetricsLibrary, MetricsRecorder};
}

#[cfg(feature = "console")]
pub use backends::ConsoleBackend;
pub use backends::{FileBackend, MemoryBackend};
pub use core::{
    FatalHook, LogBackend, LogEntry, LogFormat, LogPriority, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, NoProperties, PropertySource, PropertyStore, Result,
    DEFAULT_MAX_MESSAGE_LEN, LOG_NDEBUG,
};
pub use uma::{MetricSample, MetricsHandle, MetricsLibrary, MetricsRecorder, UmaCounters};
