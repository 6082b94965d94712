//! Log entry structure

use super::log_priority::LogPriority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<u64>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Numeric part of the current `ThreadId`, cached on first access
fn get_thread_id() -> u64 {
    THREAD_ID_CACHE.with(|cache| {
        *cache.borrow_mut().get_or_insert_with(|| {
            format!("{:?}", std::thread::current().id())
                .chars()
                .filter(char::is_ascii_digit)
                .collect::<String>()
                .parse()
                .unwrap_or(0)
        })
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Cut `message` to at most `max_len` bytes without splitting a character.
///
/// Returns `true` if anything was removed.
pub(crate) fn truncate_message(message: &mut String, max_len: usize) -> bool {
    if message.len() <= max_len {
        return false;
    }
    let mut end = max_len;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message.truncate(end);
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub priority: LogPriority,
    /// Empty for the global tag
    pub tag: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub pid: u32,
    pub tid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
}

impl LogEntry {
    pub fn new(priority: LogPriority, tag: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            priority,
            tag: tag.unwrap_or_default().to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            pid: std::process::id(),
            tid: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// True when the entry was logged without a tag
    pub fn is_global(&self) -> bool {
        self.tag.is_empty()
    }

    /// Message lines as they appear in logcat output.
    ///
    /// A trailing newline does not produce an empty last line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let body = self.message.strip_suffix('\n').unwrap_or(&self.message);
        body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_tag() {
        assert!(LogEntry::new(LogPriority::Info, None, "x").is_global());
        assert!(LogEntry::new(LogPriority::Info, Some(""), "x").is_global());
        assert!(!LogEntry::new(LogPriority::Info, Some("vold"), "x").is_global());
    }

    #[test]
    fn test_thread_info_is_cached() {
        let first = LogEntry::new(LogPriority::Debug, Some("t"), "a");
        let second = LogEntry::new(LogPriority::Debug, Some("t"), "b");
        assert_eq!(first.tid, second.tid);
        assert_eq!(first.pid, std::process::id());
    }

    #[test]
    fn test_lines_ignore_trailing_newline() {
        let entry = LogEntry::new(LogPriority::Info, Some("t"), "one\ntwo\n");
        assert_eq!(entry.lines().collect::<Vec<_>>(), vec!["one", "two"]);

        let entry = LogEntry::new(LogPriority::Info, Some("t"), "");
        assert_eq!(entry.lines().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        let mut text = String::from("héllo");
        assert!(truncate_message(&mut text, 2));
        assert_eq!(text, "h");

        let mut text = String::from("short");
        assert!(!truncate_message(&mut text, 1023));
        assert_eq!(text, "short");
    }
}
