use std::path::{Path, PathBuf};

use crate::logger::Logger;
use crate::model::error::LoggerError;
use crate::model::level::LogLevel;

/// Construction parameters for a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub path: PathBuf,
    pub threshold: LogLevel,
    pub echo_to_console: bool,
}

impl LoggerConfig {
    /// Defaults to the most verbose threshold with console echo off.
    pub fn new(path: impl AsRef<Path>) -> Self {
        LoggerConfig {
            path: path.as_ref().to_path_buf(),
            threshold: LogLevel::Debug,
            echo_to_console: false,
        }
    }

    pub fn threshold(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn echo_to_console(mut self, echo: bool) -> Self {
        self.echo_to_console = echo;
        self
    }

    pub fn open(self) -> Result<Logger, LoggerError> {
        Logger::from_config(self)
    }
}
