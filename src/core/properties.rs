//! Runtime property sources consulted by the loggable filter
//!
//! Per-tag filtering is driven by properties named `log.tag.<tag>`, the
//! same key space as Android system properties. A `PropertyStore` can be
//! populated programmatically or from a `build.prop` style file.

use super::error::{LoggerError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;

/// Property key prefix for per-tag priority overrides
pub const LOG_TAG_PREFIX: &str = "log.tag.";
/// Persistent variant of [`LOG_TAG_PREFIX`]
pub const PERSIST_LOG_TAG_PREFIX: &str = "persist.log.tag.";
/// Property holding the global priority override
pub const LOG_TAG_GLOBAL: &str = "log.tag";
/// Persistent variant of [`LOG_TAG_GLOBAL`]
pub const PERSIST_LOG_TAG_GLOBAL: &str = "persist.log.tag";

/// Read-only key/value lookup
pub trait PropertySource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Source with no properties at all
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProperties;

impl PropertySource for NoProperties {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// In-memory property table
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: RwLock<HashMap<String, String>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }

    /// Convenience for `set("log.tag.<tag>", value)`
    pub fn set_tag_level(&self, tag: &str, value: impl Into<String>) {
        self.set(format!("{}{}", LOG_TAG_PREFIX, tag), value);
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    pub fn clear(&self) {
        self.values.write().clear();
    }

    /// Merge `key=value` lines into the store.
    ///
    /// Blank lines and lines starting with `#` are skipped. Keys and values
    /// are trimmed; a line without `=` or with an empty key is rejected.
    /// Returns the number of properties read.
    pub fn load_str(&self, content: &str) -> Result<usize> {
        let mut parsed = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| LoggerError::property_parse(idx + 1, line))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(LoggerError::property_parse(idx + 1, line));
            }
            parsed.push((key.to_string(), value.trim().to_string()));
        }

        let count = parsed.len();
        self.values.write().extend(parsed);
        Ok(count)
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading property file",
                path.display().to_string(),
                e,
            )
        })?;
        self.load_str(&content)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::new();
        store.load_file(path)?;
        Ok(store)
    }
}

impl PropertySource for PropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

impl PropertySource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = PropertyStore::new();
        assert!(store.is_empty());

        store.set_tag_level("vold", "W");
        assert_eq!(store.get("log.tag.vold").as_deref(), Some("W"));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove("log.tag.vold").as_deref(), Some("W"));
        assert_eq!(store.get("log.tag.vold"), None);
    }

    #[test]
    fn test_load_str() {
        let store = PropertyStore::new();
        let count = store
            .load_str(
                "# logging overrides\n\
                 log.tag.vold = DEBUG\n\
                 \n\
                 persist.log.tag=I\n\
                 ro.empty=\n",
            )
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(store.get("log.tag.vold").as_deref(), Some("DEBUG"));
        assert_eq!(store.get("persist.log.tag").as_deref(), Some("I"));
        assert_eq!(store.get("ro.empty").as_deref(), Some(""));
    }

    #[test]
    fn test_load_str_rejects_malformed_line() {
        let store = PropertyStore::new();
        let err = store.load_str("log.tag.a=V\nnot a property\n").unwrap_err();
        assert!(matches!(err, LoggerError::PropertyParse { line: 2, .. }));
        // Nothing from a rejected file is applied
        assert!(store.is_empty());

        let err = store.load_str("=V").unwrap_err();
        assert!(matches!(err, LoggerError::PropertyParse { line: 1, .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("build.prop");
        std::fs::write(&path, "log.tag.netd=E\n").unwrap();

        let store = PropertyStore::from_file(&path).unwrap();
        assert_eq!(store.get("log.tag.netd").as_deref(), Some("E"));

        let missing = dir.path().join("missing.prop");
        assert!(matches!(
            PropertyStore::from_file(&missing),
            Err(LoggerError::IoOperation { .. })
        ));
    }

    #[test]
    fn test_no_properties() {
        assert_eq!(NoProperties.get("log.tag"), None);
    }
}
