//! Log priority definitions
//!
//! The discriminants are part of the platform ABI: existing values never
//! change and new priorities may only be appended after `Silent`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum LogPriority {
    Unknown = 0,
    /// Only for configuring a minimum priority
    #[default]
    Default = 1,
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Fatal = 7,
    /// Only for configuring a minimum priority; must stay last
    Silent = 8,
}

impl LogPriority {
    /// All priorities in ascending order
    pub const ALL: [LogPriority; 9] = [
        LogPriority::Unknown,
        LogPriority::Default,
        LogPriority::Verbose,
        LogPriority::Debug,
        LogPriority::Info,
        LogPriority::Warn,
        LogPriority::Error,
        LogPriority::Fatal,
        LogPriority::Silent,
    ];

    /// Priorities an actual message may carry
    pub const MESSAGE: [LogPriority; 6] = [
        LogPriority::Verbose,
        LogPriority::Debug,
        LogPriority::Info,
        LogPriority::Warn,
        LogPriority::Error,
        LogPriority::Fatal,
    ];

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(LogPriority::Unknown),
            1 => Some(LogPriority::Default),
            2 => Some(LogPriority::Verbose),
            3 => Some(LogPriority::Debug),
            4 => Some(LogPriority::Info),
            5 => Some(LogPriority::Warn),
            6 => Some(LogPriority::Error),
            7 => Some(LogPriority::Fatal),
            8 => Some(LogPriority::Silent),
            _ => None,
        }
    }

    /// True for VERBOSE through FATAL
    #[inline]
    pub const fn is_message_priority(self) -> bool {
        matches!(
            self,
            LogPriority::Verbose
                | LogPriority::Debug
                | LogPriority::Info
                | LogPriority::Warn
                | LogPriority::Error
                | LogPriority::Fatal
        )
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogPriority::Unknown => "UNKNOWN",
            LogPriority::Default => "DEFAULT",
            LogPriority::Verbose => "VERBOSE",
            LogPriority::Debug => "DEBUG",
            LogPriority::Info => "INFO",
            LogPriority::Warn => "WARN",
            LogPriority::Error => "ERROR",
            LogPriority::Fatal => "FATAL",
            LogPriority::Silent => "SILENT",
        }
    }

    /// Single-letter form used by logcat output
    pub const fn as_char(self) -> char {
        match self {
            LogPriority::Verbose => 'V',
            LogPriority::Debug => 'D',
            LogPriority::Info => 'I',
            LogPriority::Warn => 'W',
            LogPriority::Error => 'E',
            LogPriority::Fatal => 'F',
            LogPriority::Silent => 'S',
            LogPriority::Unknown | LogPriority::Default => '?',
        }
    }

    /// Interpret a `log.tag.*` property value.
    ///
    /// Only the first character is significant, so `"D"`, `"debug"` and
    /// `"DEBUG"` are equivalent. `A` (assert) maps to `Fatal` and `S`
    /// (suppress) to `Silent`. Anything else yields `None`.
    pub fn from_property_value(value: &str) -> Option<Self> {
        let first = value.trim().chars().next()?;
        match first.to_ascii_uppercase() {
            'V' => Some(LogPriority::Verbose),
            'D' => Some(LogPriority::Debug),
            'I' => Some(LogPriority::Info),
            'W' => Some(LogPriority::Warn),
            'E' => Some(LogPriority::Error),
            'F' | 'A' => Some(LogPriority::Fatal),
            'S' => Some(LogPriority::Silent),
            _ => None,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogPriority::Verbose => BrightBlack,
            LogPriority::Debug => Blue,
            LogPriority::Info => Green,
            LogPriority::Warn => Yellow,
            LogPriority::Error => Red,
            LogPriority::Fatal => BrightRed,
            LogPriority::Unknown | LogPriority::Default | LogPriority::Silent => White,
        }
    }
}

impl fmt::Display for LogPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UNKNOWN" => Ok(LogPriority::Unknown),
            "DEFAULT" => Ok(LogPriority::Default),
            "VERBOSE" | "V" => Ok(LogPriority::Verbose),
            "DEBUG" | "D" => Ok(LogPriority::Debug),
            "INFO" | "I" => Ok(LogPriority::Info),
            "WARN" | "WARNING" | "W" => Ok(LogPriority::Warn),
            "ERROR" | "E" => Ok(LogPriority::Error),
            "FATAL" | "ASSERT" | "F" | "A" => Ok(LogPriority::Fatal),
            "SILENT" | "SUPPRESS" | "S" => Ok(LogPriority::Silent),
            _ => Err(format!("Invalid log priority: '{}'", s)),
        }
    }
}

impl TryFrom<i32> for LogPriority {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        Self::from_i32(value).ok_or(value)
    }
}

impl From<LogPriority> for i32 {
    fn from(priority: LogPriority) -> Self {
        priority.as_i32()
    }
}
