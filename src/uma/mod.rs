//! Metrics handle adapter
//!
//! A [`MetricsHandle`] wraps an optional [`MetricsLibrary`] and turns "no
//! library" into a quiet `false` on every send. Two libraries are provided:
//! [`MetricsRecorder`] keeps samples in memory, and `UmaEventsFile` (with the
//! `file` feature) appends them to an events file for an uploader.
//!
//! Handles carry no locking of their own. Share one across threads by
//! wrapping it in a mutex.

#[cfg(feature = "file")]
pub mod events_file;
pub mod handle;
pub mod library;
pub mod recorder;

#[cfg(feature = "file")]
pub use events_file::{UmaEventsFile, DEFAULT_UMA_EVENTS_PATH};
pub use handle::MetricsHandle;
pub use library::MetricsLibrary;
pub use recorder::{MetricSample, MetricsRecorder, UmaCounters};
