//! Metrics library that appends samples to a shared events file
//!
//! Each sample is one record: a little-endian `i32` holding the record
//! length (prefix included), followed by the message:
//!
//! ```text
//! histogram\0<name> <sample> <min> <max> <nbuckets>\0
//! linearhistogram\0<name> <sample> <max>\0
//! ```
//!
//! An uploader process consumes the file. Writers hold an exclusive lock
//! for the duration of each append.

use super::library::MetricsLibrary;
use crate::core::{LoggerError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_UMA_EVENTS_PATH: &str = "/var/run/metrics/uma-events";

/// Largest record accepted, length prefix included
pub const MAX_RECORD_LEN: usize = 1024;

#[derive(Debug, Clone)]
pub struct UmaEventsFile {
    path: PathBuf,
    initialized: bool,
}

impl UmaEventsFile {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_UMA_EVENTS_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            initialized: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn append(&self, record: &[u8]) -> Result<()> {
        let path = self.path.display().to_string();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::io_operation("opening events file", path.clone(), e))?;

        fs2::FileExt::lock_exclusive(&file).map_err(|_| LoggerError::file_lock(path.clone()))?;
        let result = file.write_all(record);
        if let Err(e) = fs2::FileExt::unlock(&file) {
            eprintln!("[METRICS ERROR] Failed to unlock '{}': {}", path, e);
        }
        result.map_err(|e| LoggerError::io_operation("appending metrics record", path, e))
    }

    fn send(&self, kind: &str, body: String) -> bool {
        if !self.initialized {
            return false;
        }
        let Some(record) = encode_record(kind, &body) else {
            eprintln!("[METRICS ERROR] Record for '{}' too long, dropped", kind);
            return false;
        };
        match self.append(&record) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[METRICS ERROR] {}", e);
                false
            }
        }
    }
}

impl Default for UmaEventsFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one length-prefixed record, or `None` if it exceeds [`MAX_RECORD_LEN`]
pub fn encode_record(kind: &str, body: &str) -> Option<Vec<u8>> {
    let len = 4 + kind.len() + 1 + body.len() + 1;
    if len > MAX_RECORD_LEN {
        return None;
    }
    let mut record = Vec::with_capacity(len);
    record.extend_from_slice(&(len as i32).to_le_bytes());
    record.extend_from_slice(kind.as_bytes());
    record.push(0);
    record.extend_from_slice(body.as_bytes());
    record.push(0);
    Some(record)
}

impl MetricsLibrary for UmaEventsFile {
    fn init(&mut self) {
        self.initialized = true;
    }

    fn send_to_uma(&mut self, name: &str, sample: i32, min: i32, max: i32, nbuckets: i32) -> bool {
        self.send(
            "histogram",
            format!("{} {} {} {} {}", name, sample, min, max, nbuckets),
        )
    }

    fn send_enum_to_uma(&mut self, name: &str, sample: i32, max: i32) -> bool {
        self.send("linearhistogram", format!("{} {} {}", name, sample, max))
    }
}
