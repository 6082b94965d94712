//! Console backend implementation

use crate::core::{LogBackend, LogEntry, LogFormat, Result};
use colored::Colorize;
use std::io::Write;

/// Writes entries to stderr.
///
/// Each entry is written with a single `write_all` while holding the stderr
/// lock, so entries from different threads never interleave.
pub struct ConsoleBackend {
    use_colors: bool,
    format: LogFormat,
}

impl ConsoleBackend {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            format: LogFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the output format for this backend
    ///
    /// # Example
    ///
    /// ```
    /// use rust_liblog_system::backends::ConsoleBackend;
    /// use rust_liblog_system::LogFormat;
    ///
    /// let backend = ConsoleBackend::new().with_format(LogFormat::Brief);
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn render(&self, entry: &LogEntry) -> Result<String> {
        let output = self.format.render(entry)?;
        if !self.use_colors || self.format == LogFormat::Json {
            return Ok(output);
        }

        let color = entry.priority.color_code();
        Ok(output
            .lines()
            .map(|line| format!("{}\n", line.color(color)))
            .collect())
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBackend for ConsoleBackend {
    fn write(&self, entry: &LogEntry) -> Result<usize> {
        let output = self.render(entry)?;
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(output.as_bytes())?;
        Ok(output.len())
    }

    fn flush(&self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogPriority;

    #[test]
    fn test_plain_render_matches_format() {
        let backend = ConsoleBackend::with_colors(false).with_format(LogFormat::Brief);
        let entry = LogEntry::new(LogPriority::Info, Some("init"), "starting");
        assert_eq!(
            backend.render(&entry).unwrap(),
            LogFormat::Brief.render(&entry).unwrap()
        );
    }

    #[test]
    fn test_colored_render_keeps_line_count() {
        colored::control::set_override(true);
        let backend = ConsoleBackend::new().with_format(LogFormat::Brief);
        let entry = LogEntry::new(LogPriority::Error, Some("init"), "a\nb");
        let output = backend.render(&entry).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("E/init("));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_write_returns_length() {
        let backend = ConsoleBackend::with_colors(false);
        let entry = LogEntry::new(LogPriority::Debug, Some("init"), "console write");
        let written = backend.write(&entry).unwrap();
        assert_eq!(written, LogFormat::ThreadTime.render(&entry).unwrap().len());
        backend.flush().unwrap();
    }
}
