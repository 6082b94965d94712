//! In-memory backend
//!
//! Keeps the most recent entries in a bounded queue. Useful as a test
//! double and for embedding a small crash buffer in an application.

use crate::core::{LogBackend, LogEntry, LogFormat, LogPriority, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;

pub struct MemoryBackend {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
    format: LogFormat,
}

impl MemoryBackend {
    /// Keep at most `capacity` entries, evicting the oldest first
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity: capacity.max(1),
            format: LogFormat::ThreadTime,
        }
    }

    /// Format used by [`dump`](Self::dump)
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Snapshot of the stored entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Stored messages for `tag`, oldest first
    pub fn messages_for(&self, tag: &str) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.tag == tag)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn count_at(&self, priority: LogPriority) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.priority == priority)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Render every stored entry
    pub fn dump(&self) -> Result<String> {
        let entries = self.entries.lock();
        let mut out = String::new();
        for entry in entries.iter() {
            out.push_str(&self.format.render(entry)?);
        }
        Ok(out)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(256)
    }
}

impl LogBackend for MemoryBackend {
    fn write(&self, entry: &LogEntry) -> Result<usize> {
        let mut entries = self.entries.lock();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry.clone());
        Ok(entry.message.len())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
