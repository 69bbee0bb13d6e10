use std::fmt;
use std::str::FromStr;

use crate::model::error::LoggerError;

pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_GREEN: &str = "\x1b[0;32m";
pub const COLOR_RED: &str = "\x1b[0;31m";

/// Severity of a log line. Declaration order is the filtering order:
/// a logger emits every level at or below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info,
    Error,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Error, LogLevel::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// ANSI prefix used when echoing to the console. DEBUG gets the bare reset.
    pub fn color(&self) -> &'static str {
        match self {
            LogLevel::Info => COLOR_GREEN,
            LogLevel::Error => COLOR_RED,
            LogLevel::Debug => COLOR_RESET,
        }
    }

    /// Returns true if a logger with `self` as threshold emits `level`.
    pub fn admits(&self, level: LogLevel) -> bool {
        level <= *self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "ERROR" => Ok(LogLevel::Error),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
