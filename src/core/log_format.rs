//! Output formats for rendered log entries
//!
//! Text formats follow logcat:
//! - Brief: `D/tag( 1234): message`
//! - ThreadTime: `01-08 10:30:45.123  1234  1240 D tag: message`
//! - Json: one JSON object per line
//!
//! Text formats print one prefixed line per message line, so a message
//! containing newlines cannot pass itself off as a separate entry. Every
//! rendered entry ends with exactly one trailing newline.

use super::error::Result;
use super::log_entry::LogEntry;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Timestamp layout used by `ThreadTime`
const THREADTIME_TIMESTAMP: &str = "%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Brief,
    #[default]
    ThreadTime,
    Json,
}

impl LogFormat {
    /// Render an entry according to this format
    pub fn render(&self, entry: &LogEntry) -> Result<String> {
        match self {
            LogFormat::Brief => Ok(self.render_text(entry, |out, entry| {
                let _ = write!(
                    out,
                    "{}/{}({:5}): ",
                    entry.priority.as_char(),
                    entry.tag,
                    entry.pid
                );
            })),
            LogFormat::ThreadTime => {
                let timestamp = entry.timestamp.format(THREADTIME_TIMESTAMP).to_string();
                Ok(self.render_text(entry, |out, entry| {
                    let _ = write!(
                        out,
                        "{} {:5} {:5} {} {}: ",
                        timestamp,
                        entry.pid,
                        entry.tid,
                        entry.priority.as_char(),
                        entry.tag
                    );
                }))
            }
            LogFormat::Json => self.render_json(entry),
        }
    }

    fn render_text<F>(&self, entry: &LogEntry, prefix: F) -> String
    where
        F: Fn(&mut String, &LogEntry),
    {
        let mut out = String::with_capacity(entry.message.len() + 48);
        for line in entry.lines() {
            prefix(&mut out, entry);
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn render_json(&self, entry: &LogEntry) -> Result<String> {
        let mut json_obj = serde_json::Map::new();
        json_obj.insert(
            "timestamp".to_string(),
            serde_json::Value::String(entry.timestamp.to_rfc3339()),
        );
        json_obj.insert(
            "priority".to_string(),
            serde_json::Value::String(entry.priority.to_str().to_string()),
        );
        json_obj.insert("tag".to_string(), serde_json::Value::String(entry.tag.clone()));
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.trim_end_matches('\n').to_string()),
        );
        json_obj.insert("pid".to_string(), serde_json::Value::from(entry.pid));
        json_obj.insert("tid".to_string(), serde_json::Value::from(entry.tid));
        if let Some(ref name) = entry.thread_name {
            json_obj.insert(
                "thread_name".to_string(),
                serde_json::Value::String(name.clone()),
            );
        }

        let mut out = serde_json::to_string(&serde_json::Value::Object(json_obj))?;
        out.push('\n');
        Ok(out)
    }
}
