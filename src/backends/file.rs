//! File backend implementation
//!
//! The file is opened in append mode and every entry is written with one
//! `write_all`, so concurrent writers (threads or processes) never split an
//! entry as long as the filesystem honors `O_APPEND`. With the `file`
//! feature an exclusive advisory lock is also held around each write.

use crate::core::{LogBackend, LogEntry, LogFormat, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileBackend {
    file: Mutex<File>,
    path: PathBuf,
    format: LogFormat,
    lock_file: bool,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            file: Mutex::new(file),
            path,
            format: LogFormat::default(),
            lock_file: cfg!(feature = "file"),
        })
    }

    /// Set the output format for this backend
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_liblog_system::backends::FileBackend;
    /// use rust_liblog_system::LogFormat;
    ///
    /// let backend = FileBackend::new("/data/local/tmp/app.log")
    ///     .unwrap()
    ///     .with_format(LogFormat::Json);
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Hold an exclusive file lock around each write (default with `file`)
    #[must_use]
    pub fn with_file_lock(mut self, enabled: bool) -> Self {
        self.lock_file = enabled && cfg!(feature = "file");
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "file")]
    fn append_locked(&self, file: &mut File, bytes: &[u8]) -> Result<()> {
        fs2::FileExt::lock_exclusive(&*file)
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;
        let result = file.write_all(bytes);
        if let Err(e) = fs2::FileExt::unlock(&*file) {
            eprintln!(
                "[LOGGER ERROR] Failed to unlock '{}': {}",
                self.path.display(),
                e
            );
        }
        result.map_err(|e| {
            LoggerError::io_operation("appending log entry", self.path.display().to_string(), e)
        })
    }

    #[cfg(not(feature = "file"))]
    fn append_locked(&self, file: &mut File, bytes: &[u8]) -> Result<()> {
        self.append(file, bytes)
    }

    fn append(&self, file: &mut File, bytes: &[u8]) -> Result<()> {
        file.write_all(bytes).map_err(|e| {
            LoggerError::io_operation("appending log entry", self.path.display().to_string(), e)
        })
    }
}

impl LogBackend for FileBackend {
    fn write(&self, entry: &LogEntry) -> Result<usize> {
        let output = self.format.render(entry)?;
        let mut file = self.file.lock();
        if self.lock_file {
            self.append_locked(&mut file, output.as_bytes())?;
        } else {
            self.append(&mut file, output.as_bytes())?;
        }
        Ok(output.len())
    }

    fn flush(&self) -> Result<()> {
        self.file.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
