//! Nullable handle over a metrics library
//!
//! `MetricsHandle` is what callers hold. An absent library is a normal state
//! rather than an error: every operation on [`MetricsHandle::None`] is a no-op
//! and every send reports `false` without touching any library.

use super::library::MetricsLibrary;
use std::fmt;

pub enum MetricsHandle {
    /// No library behind the handle
    None,
    Live(Box<dyn MetricsLibrary>),
}

impl MetricsHandle {
    /// The absent handle
    pub const fn none() -> Self {
        MetricsHandle::None
    }

    /// Create a handle owning a freshly constructed `L`.
    ///
    /// The library is not initialized; call [`initialize`](Self::initialize)
    /// before sending.
    ///
    /// ```
    /// use rust_liblog_system::uma::{MetricsHandle, MetricsRecorder};
    ///
    /// let mut handle = MetricsHandle::create::<MetricsRecorder>();
    /// handle.initialize();
    /// assert!(handle.send_enum("Platform.BootMode", 1, 3));
    /// handle.destroy();
    /// ```
    pub fn create<L: MetricsLibrary + Default + 'static>() -> Self {
        Self::with_library(L::default())
    }

    pub fn with_library<L: MetricsLibrary + 'static>(library: L) -> Self {
        MetricsHandle::Live(Box::new(library))
    }

    /// Release the library. Destroying the absent handle does nothing.
    pub fn destroy(self) {
        drop(self);
    }

    pub fn initialize(&mut self) {
        if let MetricsHandle::Live(library) = self {
            library.init();
        }
    }

    /// Send a histogram sample, returning whether the library accepted it
    pub fn send_linear(
        &mut self,
        name: &str,
        sample: i32,
        min: i32,
        max: i32,
        nbuckets: i32,
    ) -> bool {
        match self {
            MetricsHandle::Live(library) => library.send_to_uma(name, sample, min, max, nbuckets),
            MetricsHandle::None => false,
        }
    }

    /// Send an enumeration sample in `[0, exclusive_max)`.
    ///
    /// Out of range samples are passed through; the library decides.
    pub fn send_enum(&mut self, name: &str, sample: i32, exclusive_max: i32) -> bool {
        match self {
            MetricsHandle::Live(library) => library.send_enum_to_uma(name, sample, exclusive_max),
            MetricsHandle::None => false,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, MetricsHandle::None)
    }
}

impl Default for MetricsHandle {
    fn default() -> Self {
        MetricsHandle::None
    }
}

impl<L: MetricsLibrary + 'static> From<Option<L>> for MetricsHandle {
    fn from(library: Option<L>) -> Self {
        match library {
            Some(library) => Self::with_library(library),
            None => MetricsHandle::None,
        }
    }
}

impl fmt::Debug for MetricsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsHandle::None => f.write_str("MetricsHandle::None"),
            MetricsHandle::Live(_) => f.write_str("MetricsHandle::Live(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uma::{MetricSample, MetricsRecorder};

    struct Rejecting;

    impl MetricsLibrary for Rejecting {
        fn init(&mut self) {}

        fn send_to_uma(&mut self, _: &str, _: i32, _: i32, _: i32, _: i32) -> bool {
            false
        }

        fn send_enum_to_uma(&mut self, _: &str, _: i32, _: i32) -> bool {
            false
        }
    }

    #[test]
    fn test_absent_handle_is_inert() {
        let mut handle = MetricsHandle::none();
        assert!(handle.is_none());
        handle.initialize();
        assert!(!handle.send_linear("Disk.Usage", 5, 0, 100, 50));
        assert!(!handle.send_enum("Boot.Mode", 1, 3));
        handle.destroy();

        assert!(MetricsHandle::default().is_none());
        assert!(MetricsHandle::from(None::<MetricsRecorder>).is_none());
    }

    #[test]
    fn test_arguments_forwarded_unchanged() {
        let recorder = MetricsRecorder::new();
        let counters = recorder.counters();
        let samples = recorder.samples_handle();
        let mut handle = MetricsHandle::with_library(recorder);

        handle.initialize();
        assert!(handle.send_linear("Disk.Usage", 5, 0, 100, 50));
        assert!(handle.send_enum("Boot.Mode", 1, 3));

        assert_eq!(counters.init_calls(), 1);
        assert_eq!(counters.linear_calls(), 1);
        assert_eq!(counters.enum_calls(), 1);
        assert_eq!(
            samples.lock().clone(),
            vec![
                MetricSample::Linear {
                    name: "Disk.Usage".to_string(),
                    sample: 5,
                    min: 0,
                    max: 100,
                    nbuckets: 50,
                },
                MetricSample::Enum {
                    name: "Boot.Mode".to_string(),
                    sample: 1,
                    max: 3,
                },
            ]
        );
    }

    #[test]
    fn test_out_of_range_enum_passes_through() {
        let recorder = MetricsRecorder::new();
        let samples = recorder.samples_handle();
        let mut handle = MetricsHandle::from(Some(recorder));

        assert!(handle.send_enum("Boot.Mode", 7, 3));
        assert_eq!(
            samples.lock()[0],
            MetricSample::Enum {
                name: "Boot.Mode".to_string(),
                sample: 7,
                max: 3,
            }
        );
    }

    #[test]
    fn test_library_result_is_returned() {
        let mut handle = MetricsHandle::with_library(Rejecting);
        assert!(!handle.is_none());
        assert!(!handle.send_linear("x", 1, 0, 10, 5));
        assert!(!handle.send_enum("x", 1, 2));
    }

    #[test]
    fn test_destroy_releases_library() {
        let recorder = MetricsRecorder::new();
        let counters = recorder.counters();
        let mut handle = MetricsHandle::with_library(recorder);
        handle.send_enum("a", 0, 1);
        handle.destroy();

        // Counters outlive the handle
        assert_eq!(counters.enum_calls(), 1);
        assert_eq!(std::sync::Arc::strong_count(&counters), 1);
    }

    #[test]
    fn test_create_destroy_without_initialize() {
        let handle = MetricsHandle::create::<MetricsRecorder>();
        assert!(!handle.is_none());
        handle.destroy();
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", MetricsHandle::none()), "MetricsHandle::None");
        let handle = MetricsHandle::create::<MetricsRecorder>();
        assert_eq!(format!("{:?}", handle), "MetricsHandle::Live(..)");
    }
}
