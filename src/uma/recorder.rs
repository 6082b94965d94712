//! In-process metrics library
//!
//! Records every sample it is sent. Useful for tests and for dumping the
//! samples a run produced as JSON.

use super::library::MetricsLibrary;
use crate::core::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One sample as received from the handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetricSample {
    Linear {
        name: String,
        sample: i32,
        min: i32,
        max: i32,
        nbuckets: i32,
    },
    Enum {
        name: String,
        sample: i32,
        max: i32,
    },
}

impl MetricSample {
    pub fn name(&self) -> &str {
        match self {
            MetricSample::Linear { name, .. } | MetricSample::Enum { name, .. } => name,
        }
    }
}

/// Call counters for a [`MetricsRecorder`]
#[derive(Debug, Default)]
pub struct UmaCounters {
    init_calls: AtomicU64,
    linear_calls: AtomicU64,
    enum_calls: AtomicU64,
}

impl UmaCounters {
    #[inline]
    pub fn init_calls(&self) -> u64 {
        self.init_calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn linear_calls(&self) -> u64 {
        self.linear_calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn enum_calls(&self) -> u64 {
        self.enum_calls.load(Ordering::Relaxed)
    }

    pub fn total_sends(&self) -> u64 {
        self.linear_calls() + self.enum_calls()
    }
}

#[derive(Debug, Default)]
pub struct MetricsRecorder {
    samples: Arc<Mutex<Vec<MetricSample>>>,
    counters: Arc<UmaCounters>,
    max_samples: Option<usize>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject sends once `max` samples are stored
    #[must_use]
    pub fn with_max_samples(mut self, max: usize) -> Self {
        self.max_samples = Some(max);
        self
    }

    /// Shared counters, still readable after the recorder is dropped
    pub fn counters(&self) -> Arc<UmaCounters> {
        Arc::clone(&self.counters)
    }

    /// Shared sample list, still readable after the recorder is dropped
    pub fn samples_handle(&self) -> Arc<Mutex<Vec<MetricSample>>> {
        Arc::clone(&self.samples)
    }

    pub fn samples(&self) -> Vec<MetricSample> {
        self.samples.lock().clone()
    }

    /// Serialize the recorded samples as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&*self.samples.lock())?)
    }

    fn record(&self, sample: MetricSample) -> bool {
        let mut samples = self.samples.lock();
        if self.max_samples.is_some_and(|max| samples.len() >= max) {
            return false;
        }
        samples.push(sample);
        true
    }
}

impl MetricsLibrary for MetricsRecorder {
    fn init(&mut self) {
        self.counters.init_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn send_to_uma(&mut self, name: &str, sample: i32, min: i32, max: i32, nbuckets: i32) -> bool {
        self.counters.linear_calls.fetch_add(1, Ordering::Relaxed);
        self.record(MetricSample::Linear {
            name: name.to_string(),
            sample,
            min,
            max,
            nbuckets,
        })
    }

    fn send_enum_to_uma(&mut self, name: &str, sample: i32, max: i32) -> bool {
        self.counters.enum_calls.fetch_add(1, Ordering::Relaxed);
        self.record(MetricSample::Enum {
            name: name.to_string(),
            sample,
            max,
        })
    }
}
