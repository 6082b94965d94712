//! Log facade implementation
//!
//! `Logger` is the single entry point for priority-tagged logging. It owns
//! no buffer and no worker thread: every call formats (when the message
//! passes the loggable filter) and hands one [`LogEntry`] to the backend in
//! the caller's thread.

use super::{
    backend::LogBackend,
    config::{LoggerConfig, LOG_NDEBUG},
    error::{LoggerError, Result},
    log_entry::{truncate_message, LogEntry},
    log_priority::LogPriority,
    metrics::LoggerMetrics,
    properties::{
        NoProperties, PropertySource, LOG_TAG_GLOBAL, LOG_TAG_PREFIX, PERSIST_LOG_TAG_GLOBAL,
        PERSIST_LOG_TAG_PREFIX,
    },
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Hook invoked by [`Logger::assert_fail`] before the process aborts.
///
/// The hook receives the assertion message. If it returns, the process is
/// aborted anyway; a hook that panics unwinds out of `assert_fail` instead.
pub type FatalHook = Arc<dyn Fn(&str) + Send + Sync>;

pub struct Logger {
    config: LoggerConfig,
    min_priority: RwLock<LogPriority>,
    backend: Option<Arc<dyn LogBackend>>,
    properties: Arc<dyn PropertySource>,
    on_fatal: Option<FatalHook>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a facade with no backend.
    ///
    /// Writes report [`LoggerError::BackendUnavailable`] until a backend is set.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    /// Out-of-range config values are replaced by their defaults.
    #[must_use]
    pub fn from_config(mut config: LoggerConfig) -> Self {
        if let Err(e) = config.validate() {
            eprintln!("[LOGGER WARNING] {}, using defaults for invalid fields", e);
            config.sanitize();
        }
        Self {
            min_priority: RwLock::new(config.min_priority),
            config,
            backend: None,
            properties: Arc::new(NoProperties),
            on_fatal: None,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn with_backend<B: LogBackend + 'static>(backend: B) -> Self {
        let mut logger = Self::new();
        logger.set_backend(Arc::new(backend));
        logger
    }

    pub fn set_backend(&mut self, backend: Arc<dyn LogBackend>) {
        self.backend = Some(backend);
    }

    pub fn backend(&self) -> Option<&Arc<dyn LogBackend>> {
        self.backend.as_ref()
    }

    pub fn set_properties(&mut self, properties: Arc<dyn PropertySource>) {
        self.properties = properties;
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Ambient tag used by the shortcut macros
    pub fn tag(&self) -> Option<&str> {
        self.config.tag.as_deref()
    }

    /// Set the process-wide minimum priority.
    ///
    /// `Default` removes the minimum; `Silent` suppresses everything that is
    /// not overridden by a property.
    pub fn set_min_priority(&self, priority: LogPriority) -> LogPriority {
        let priority = match priority {
            LogPriority::Unknown => LogPriority::Default,
            other => other,
        };
        std::mem::replace(&mut *self.min_priority.write(), priority)
    }

    pub fn min_priority(&self) -> LogPriority {
        *self.min_priority.read()
    }

    /// Send a pre-formatted message.
    ///
    /// Returns the number of bytes accepted by the backend, `Ok(0)` if the
    /// message was filtered out, or an error if it could not be written.
    pub fn write(&self, priority: LogPriority, tag: Option<&str>, text: &str) -> Result<usize> {
        let priority = self.message_priority(priority)?;
        if !self.is_loggable(priority, tag, self.config.default_priority) {
            self.metrics.record_filtered();
            return Ok(0);
        }
        self.emit(priority, tag, text.to_string())
    }

    /// Send a formatted message, built with `format_args!`.
    ///
    /// Nothing is formatted when the message is filtered out.
    pub fn print(
        &self,
        priority: LogPriority,
        tag: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> Result<usize> {
        let priority = self.message_priority(priority)?;
        if !self.is_loggable(priority, tag, self.config.default_priority) {
            self.metrics.record_filtered();
            return Ok(0);
        }
        self.emit(priority, tag, fmt::format(args))
    }

    /// Send an already captured message value.
    ///
    /// The value is consumed: it is rendered at most once and cannot be
    /// reused by the caller.
    pub fn vprint<D: fmt::Display>(
        &self,
        priority: LogPriority,
        tag: Option<&str>,
        args: D,
    ) -> Result<usize> {
        let priority = self.message_priority(priority)?;
        if !self.is_loggable(priority, tag, self.config.default_priority) {
            self.metrics.record_filtered();
            return Ok(0);
        }
        self.emit(priority, tag, args.to_string())
    }

    /// Log an assertion failure at `Fatal` and abort the process.
    ///
    /// The message is the formatted `args` when given, otherwise
    /// `"Assertion failed: <cond>"`, otherwise `"Unspecified assertion failed"`.
    /// It is echoed to stderr, written regardless of filters, and the backend
    /// is flushed before the fatal hook runs.
    pub fn assert_fail(
        &self,
        cond: Option<&str>,
        tag: Option<&str>,
        args: Option<fmt::Arguments<'_>>,
    ) -> ! {
        let message = match (args, cond) {
            (Some(args), _) => fmt::format(args),
            (None, Some(cond)) => format!("Assertion failed: {}", cond),
            (None, None) => "Unspecified assertion failed".to_string(),
        };

        self.metrics.record_fatal();
        eprintln!("{}", message);
        // Nothing useful can be done with a write failure on the way down
        let _ = self.emit(LogPriority::Fatal, tag, message.clone());
        let _ = self.flush();

        if let Some(ref hook) = self.on_fatal {
            hook(&message);
        }
        std::process::abort()
    }

    /// Whether a message at `priority` for `tag` would be emitted.
    ///
    /// The threshold comes from `log.tag.<tag>` (or `persist.log.tag.<tag>`),
    /// then `log.tag` (or `persist.log.tag`), then the minimum priority, then
    /// `default_priority`. A property value of `S` suppresses the tag
    /// entirely; otherwise `priority` passes when it is at least the threshold.
    pub fn is_loggable(
        &self,
        priority: LogPriority,
        tag: Option<&str>,
        default_priority: LogPriority,
    ) -> bool {
        let tag = tag.unwrap_or_default();
        self.is_loggable_len(priority, Some(tag), tag.len(), default_priority)
    }

    /// [`is_loggable`](Self::is_loggable) using the first `len` bytes of `tag`
    pub fn is_loggable_len(
        &self,
        priority: LogPriority,
        tag: Option<&str>,
        len: usize,
        default_priority: LogPriority,
    ) -> bool {
        let tag = tag
            .map(|t| t.get(..len.min(t.len())).unwrap_or(t))
            .unwrap_or_default();
        self.threshold(tag, default_priority)
            .is_some_and(|level| priority >= level)
    }

    /// Filter used by the `if_alog!` family of guards
    pub fn test_log(&self, priority: LogPriority, tag: Option<&str>) -> bool {
        let default_priority = if LOG_NDEBUG {
            LogPriority::Debug
        } else {
            LogPriority::Verbose
        };
        let tag = tag.unwrap_or_default();
        self.is_loggable_len(priority, Some(tag), tag.len(), default_priority)
    }

    pub fn flush(&self) -> Result<()> {
        match self.backend {
            Some(ref backend) => backend.flush(),
            None => Ok(()),
        }
    }

    /// Get the facade metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn verbose(&self, message: &str) {
        let _ = self.write(LogPriority::Verbose, self.tag(), message);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        let _ = self.write(LogPriority::Debug, self.tag(), message);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        let _ = self.write(LogPriority::Info, self.tag(), message);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        let _ = self.write(LogPriority::Warn, self.tag(), message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        let _ = self.write(LogPriority::Error, self.tag(), message);
    }

    /// Resolved threshold for `tag`, or `None` when a property suppresses it
    fn threshold(&self, tag: &str, default_priority: LogPriority) -> Option<LogPriority> {
        let lookup = |key: &str| {
            self.properties
                .get(key)
                .and_then(|value| LogPriority::from_property_value(&value))
        };

        if !tag.is_empty() {
            let level = lookup(&format!("{}{}", LOG_TAG_PREFIX, tag))
                .or_else(|| lookup(&format!("{}{}", PERSIST_LOG_TAG_PREFIX, tag)));
            if let Some(level) = level {
                return Self::unless_suppressed(level);
            }
        }

        if let Some(level) = lookup(LOG_TAG_GLOBAL).or_else(|| lookup(PERSIST_LOG_TAG_GLOBAL)) {
            return Self::unless_suppressed(level);
        }

        match *self.min_priority.read() {
            LogPriority::Default | LogPriority::Unknown => Some(default_priority),
            min => Some(min),
        }
    }

    fn unless_suppressed(level: LogPriority) -> Option<LogPriority> {
        match level {
            LogPriority::Silent => None,
            level => Some(level),
        }
    }

    fn message_priority(&self, priority: LogPriority) -> Result<LogPriority> {
        match priority {
            LogPriority::Unknown | LogPriority::Default => Ok(self.config.default_priority),
            LogPriority::Silent => Err(LoggerError::InvalidPriority(priority)),
            other => Ok(other),
        }
    }

    /// Truncate, build the entry and hand it to the backend.
    ///
    /// A panicking backend is reported like a failing one.
    fn emit(&self, priority: LogPriority, tag: Option<&str>, mut message: String) -> Result<usize> {
        let Some(ref backend) = self.backend else {
            self.metrics.record_dropped();
            return Err(LoggerError::BackendUnavailable);
        };

        if truncate_message(&mut message, self.config.max_message_len) {
            self.metrics.record_truncated();
        }

        let entry = LogEntry::new(priority, tag, message);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            backend.write(&entry)
        }));

        match result {
            Ok(Ok(written)) => {
                self.metrics.record_logged();
                Ok(written)
            }
            Ok(Err(e)) => {
                self.metrics.record_dropped();
                Err(e)
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Backend '{}' panicked: {}",
                    backend.name(),
                    panic_msg
                );
                self.metrics.record_dropped();
                Err(LoggerError::other(format!("backend panicked: {}", panic_msg)))
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("min_priority", &self.min_priority())
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_string()))
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_liblog_system::prelude::*;
/// use std::sync::Arc;
///
/// let properties = Arc::new(PropertyStore::new());
/// properties.set_tag_level("netd", "W");
///
/// let logger = Logger::builder()
///     .tag("netd")
///     .backend(MemoryBackend::new(64))
///     .properties(properties)
///     .build();
///
/// assert!(!logger.is_loggable(LogPriority::Info, Some("netd"), LogPriority::Verbose));
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    backend: Option<Arc<dyn LogBackend>>,
    properties: Option<Arc<dyn PropertySource>>,
    on_fatal: Option<FatalHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the ambient tag
    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tag = Some(tag.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_priority(mut self, priority: LogPriority) -> Self {
        self.config.default_priority = priority;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_priority(mut self, priority: LogPriority) -> Self {
        self.config.min_priority = priority;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_message_len(mut self, len: usize) -> Self {
        self.config.max_message_len = len;
        self
    }

    /// Take ownership of a backend
    #[must_use = "builder methods return a new value"]
    pub fn backend<B: LogBackend + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Use a backend that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_backend(mut self, backend: Arc<dyn LogBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn properties(mut self, properties: Arc<dyn PropertySource>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set a hook that runs before an assertion failure aborts
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, hook: FatalHook) -> Self {
        self.on_fatal = Some(hook);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::from_config(self.config);
        logger.backend = self.backend;
        if let Some(properties) = self.properties {
            logger.properties = properties;
        }
        logger.on_fatal = self.on_fatal;
        logger
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MemoryBackend;
    use crate::core::{PropertyStore, DEFAULT_MAX_MESSAGE_LEN};

    fn recording_logger() -> (Logger, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new(128));
        let logger = Logger::builder()
            .tag("test")
            .shared_backend(backend.clone())
            .build();
        (logger, backend)
    }

    struct PanickingBackend;

    impl LogBackend for PanickingBackend {
        fn write(&self, _entry: &LogEntry) -> Result<usize> {
            panic!("backend exploded");
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_write_without_backend() {
        let logger = Logger::new();
        let result = logger.write(LogPriority::Info, Some("test"), "hello");
        assert!(matches!(result, Err(LoggerError::BackendUnavailable)));
        assert_eq!(logger.metrics().dropped_count(), 1);
    }

    #[test]
    fn test_write_records_entry() {
        let (logger, backend) = recording_logger();
        let written = logger.write(LogPriority::Warn, Some("vold"), "Disk full").unwrap();
        assert!(written > 0);

        let entries = backend.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].priority, LogPriority::Warn);
        assert_eq!(entries[0].tag, "vold");
        assert_eq!(entries[0].message, "Disk full");
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_sentinel_priorities() {
        let (logger, backend) = recording_logger();
        assert!(matches!(
            logger.write(LogPriority::Silent, None, "x"),
            Err(LoggerError::InvalidPriority(LogPriority::Silent))
        ));

        logger.write(LogPriority::Default, None, "defaulted").unwrap();
        logger.write(LogPriority::Unknown, None, "unknown").unwrap();
        let entries = backend.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.priority == LogPriority::Verbose));
    }

    #[test]
    fn test_message_truncation() {
        let backend = Arc::new(MemoryBackend::new(8));
        let logger = Logger::builder()
            .max_message_len(4)
            .shared_backend(backend.clone())
            .build();

        logger.write(LogPriority::Info, None, "abcdefgh").unwrap();
        assert_eq!(backend.entries()[0].message, "abcd");
        assert_eq!(logger.metrics().truncated_count(), 1);
    }

    #[test]
    fn test_default_truncation_limit() {
        let (logger, backend) = recording_logger();
        let long = "x".repeat(5000);
        logger.write(LogPriority::Info, None, &long).unwrap();
        assert_eq!(backend.entries()[0].message.len(), 1023);
    }

    #[test]
    fn test_print_and_vprint() {
        let (logger, backend) = recording_logger();
        logger
            .print(LogPriority::Error, Some("netd"), format_args!("code {} ({})", 500, "io"))
            .unwrap();
        logger
            .vprint(LogPriority::Info, Some("netd"), format!("{}-{}", 1, 2))
            .unwrap();

        let messages: Vec<_> = backend.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["code 500 (io)", "1-2"]);
    }

    #[test]
    fn test_filtered_write_is_noop() {
        let (logger, backend) = recording_logger();
        logger.set_min_priority(LogPriority::Warn);

        assert_eq!(logger.write(LogPriority::Info, Some("a"), "dropped").unwrap(), 0);
        assert!(logger.write(LogPriority::Error, Some("a"), "kept").unwrap() > 0);
        assert_eq!(backend.len(), 1);
        assert_eq!(logger.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_is_loggable_default_threshold() {
        let logger = Logger::new();
        assert!(logger.is_loggable(LogPriority::Info, Some("x"), LogPriority::Info));
        assert!(!logger.is_loggable(LogPriority::Debug, Some("x"), LogPriority::Info));
        assert!(logger.is_loggable(LogPriority::Fatal, None, LogPriority::Verbose));
    }

    #[test]
    fn test_is_loggable_tag_property() {
        let properties = Arc::new(PropertyStore::new());
        properties.set_tag_level("vold", "E");
        properties.set("persist.log.tag.netd", "DEBUG");
        let logger = Logger::builder().properties(properties.clone()).build();

        assert!(!logger.is_loggable(LogPriority::Warn, Some("vold"), LogPriority::Verbose));
        assert!(logger.is_loggable(LogPriority::Error, Some("vold"), LogPriority::Verbose));
        assert!(!logger.is_loggable(LogPriority::Verbose, Some("netd"), LogPriority::Verbose));
        assert!(logger.is_loggable(LogPriority::Debug, Some("netd"), LogPriority::Fatal));

        // log.tag.<tag> wins over persist.log.tag.<tag>
        properties.set_tag_level("netd", "I");
        assert!(!logger.is_loggable(LogPriority::Debug, Some("netd"), LogPriority::Verbose));
    }

    #[test]
    fn test_is_loggable_global_property_and_suppress() {
        let properties = Arc::new(PropertyStore::new());
        properties.set("log.tag", "W");
        properties.set_tag_level("chatty", "S");
        let logger = Logger::builder().properties(properties).build();

        assert!(!logger.is_loggable(LogPriority::Info, Some("any"), LogPriority::Verbose));
        assert!(logger.is_loggable(LogPriority::Warn, None, LogPriority::Verbose));
        assert!(!logger.is_loggable(LogPriority::Fatal, Some("chatty"), LogPriority::Verbose));
    }

    #[test]
    fn test_unparseable_property_ignored() {
        let properties = Arc::new(PropertyStore::new());
        properties.set_tag_level("odd", "loud");
        let logger = Logger::builder().properties(properties).build();
        assert!(logger.is_loggable(LogPriority::Info, Some("odd"), LogPriority::Info));
    }

    #[test]
    fn test_is_loggable_len_uses_prefix() {
        let properties = Arc::new(PropertyStore::new());
        properties.set_tag_level("vold", "E");
        let logger = Logger::builder().properties(properties).build();

        assert!(!logger.is_loggable_len(LogPriority::Info, Some("voldmgr"), 4, LogPriority::Verbose));
        assert!(logger.is_loggable_len(LogPriority::Info, Some("voldmgr"), 7, LogPriority::Verbose));
        // Over-long lengths are clamped to the tag
        assert!(!logger.is_loggable_len(LogPriority::Info, Some("vold"), 99, LogPriority::Verbose));
    }

    #[test]
    fn test_silent_is_a_threshold() {
        let logger = Logger::new();
        for p1 in LogPriority::ALL {
            for p2 in LogPriority::ALL {
                if p1 < p2 {
                    assert!(!logger.is_loggable(p1, Some("x"), p2), "{} at {}", p1, p2);
                    assert!(logger.is_loggable(p2, Some("x"), p2), "{} at {}", p2, p2);
                }
            }
        }
    }

    #[test]
    fn test_suppress_property_blocks_every_priority() {
        let properties = Arc::new(PropertyStore::new());
        properties.set_tag_level("chatty", "S");
        let logger = Logger::builder().properties(properties.clone()).build();

        for priority in LogPriority::ALL {
            assert!(!logger.is_loggable(priority, Some("chatty"), LogPriority::Verbose));
        }

        properties.remove("log.tag.chatty");
        properties.set("log.tag", "SUPPRESS");
        assert!(!logger.is_loggable(LogPriority::Silent, Some("other"), LogPriority::Silent));
    }

    #[test]
    fn test_invalid_builder_values_fall_back() {
        let backend = Arc::new(MemoryBackend::new(8));
        let logger = Logger::builder()
            .max_message_len(0)
            .default_priority(LogPriority::Silent)
            .min_priority(LogPriority::Unknown)
            .shared_backend(backend.clone())
            .build();

        assert_eq!(logger.config().max_message_len, DEFAULT_MAX_MESSAGE_LEN);
        assert_eq!(logger.config().default_priority, LogPriority::Verbose);
        assert_eq!(logger.min_priority(), LogPriority::Default);

        let written = logger.write(LogPriority::Default, Some("x"), "kept").unwrap();
        assert_eq!(written, 4);
        assert_eq!(backend.entries()[0].message, "kept");
        assert_eq!(backend.entries()[0].priority, LogPriority::Verbose);
    }

    #[test]
    fn test_min_priority_sentinels() {
        let logger = Logger::new();
        assert_eq!(logger.min_priority(), LogPriority::Default);

        logger.set_min_priority(LogPriority::Silent);
        assert!(!logger.is_loggable(LogPriority::Fatal, Some("x"), LogPriority::Verbose));

        let previous = logger.set_min_priority(LogPriority::Default);
        assert_eq!(previous, LogPriority::Silent);
        assert!(logger.is_loggable(LogPriority::Verbose, Some("x"), LogPriority::Verbose));
    }

    #[test]
    fn test_shortcuts_use_ambient_tag() {
        let (logger, backend) = recording_logger();
        logger.debug("d");
        logger.error("e");
        let entries = backend.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.tag == "test"));
    }

    #[test]
    fn test_panicking_backend_is_isolated() {
        let logger = Logger::with_backend(PanickingBackend);
        let result = logger.write(LogPriority::Info, None, "boom");
        assert!(matches!(result, Err(LoggerError::Other(_))));
        assert_eq!(logger.metrics().dropped_count(), 1);
    }

    #[test]
    fn test_assert_fail_messages() {
        let backend = Arc::new(MemoryBackend::new(16));
        let logger = Logger::builder()
            .shared_backend(backend.clone())
            .on_fatal(Arc::new(|msg| panic!("fatal: {}", msg)))
            .build();

        let cases: Vec<(Option<&str>, Option<String>, &str)> = vec![
            (Some("x > 1"), None, "Assertion failed: x > 1"),
            (None, None, "Unspecified assertion failed"),
            (Some("x > 1"), Some("bad x".to_string()), "bad x"),
        ];

        for (cond, msg, expected) in cases {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                match msg {
                    Some(ref m) => logger.assert_fail(cond, Some("t"), Some(format_args!("{}", m))),
                    None => logger.assert_fail(cond, Some("t"), None),
                };
            }));
            assert!(result.is_err());

            let last = backend.entries().pop().unwrap();
            assert_eq!(last.priority, LogPriority::Fatal);
            assert_eq!(last.message, expected);
        }
        assert_eq!(logger.metrics().fatal_count(), 3);
    }

    #[test]
    fn test_assert_fail_ignores_filters() {
        let backend = Arc::new(MemoryBackend::new(4));
        let logger = Logger::builder()
            .min_priority(LogPriority::Silent)
            .shared_backend(backend.clone())
            .on_fatal(Arc::new(|_| panic!("fatal")))
            .build();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.assert_fail(None, None, None);
        }));
        assert!(result.is_err());
        assert_eq!(backend.len(), 1);
    }
}
