use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LoggerError {
    Allocation { requested: usize },
    Open { path: PathBuf, source: std::io::Error },
    Io(std::io::Error),
    Closed,
    InvalidLevel(String),
    InvalidArguments(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggerError::Allocation { requested } => {
                write!(f, "Failed to allocate {} bytes for hex buffer", requested)
            }
            LoggerError::Open { path, source } => {
                write!(f, "Failed to open log file {}: {}", path.display(), source)
            }
            LoggerError::Io(err) => write!(f, "I/O error: {}", err),
            LoggerError::Closed => write!(f, "Logger is closed"),
            LoggerError::InvalidLevel(name) => write!(f, "Invalid log level: {}", name),
            LoggerError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Open { source, .. } => Some(source),
            LoggerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::Io(err)
    }
}
