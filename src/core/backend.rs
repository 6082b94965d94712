//! Backend trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// Destination for log entries written through the facade.
///
/// The facade does no locking of its own; implementations must serialize
/// concurrent `write` calls themselves. Writes are not reentrant, so a
/// backend must never be invoked from a signal handler.
pub trait LogBackend: Send + Sync {
    /// Write one entry, returning the number of bytes accepted
    fn write(&self, entry: &LogEntry) -> Result<usize>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
