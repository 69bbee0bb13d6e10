use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use crate::console::Console;
use crate::hex;
use crate::model::config::LoggerConfig;
use crate::model::error::LoggerError;
use crate::model::level::LogLevel;

/// Shared, thread-safe line logger writing to one append-mode file.
///
/// Every accepted message is written, flushed, and optionally echoed to the
/// console while holding a single lock, so lines from concurrent callers
/// never interleave. Share it between threads with `Arc<Logger>`.
#[derive(Debug)]
pub struct Logger {
    path: PathBuf,
    threshold: LogLevel,
    echo_to_console: bool,
    sink: Mutex<Sink>,
}

#[derive(Debug)]
struct Sink {
    file: Option<BufWriter<File>>,
    console: Console,
}

/// Line prefix: `[YYYY-MM-DD HH:MM:SS] LEVEL: `.
fn format_header(level: LogLevel, now: &DateTime<Local>) -> String {
    format!("[{}] {}: ", now.format("%Y-%m-%d %H:%M:%S"), level)
}

impl Logger {
    pub fn create(
        path: impl AsRef<Path>,
        threshold: LogLevel,
        echo_to_console: bool,
    ) -> Result<Self, LoggerError> {
        LoggerConfig::new(path)
            .threshold(threshold)
            .echo_to_console(echo_to_console)
            .open()
    }

    pub fn from_config(config: LoggerConfig) -> Result<Self, LoggerError> {
        Self::with_console(config, Console::stdio())
    }

    /// Like [`Logger::from_config`], but echoes to `console` instead of stdout/stderr.
    pub fn with_console(config: LoggerConfig, console: Console) -> Result<Self, LoggerError> {
        let file = match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)
        {
            Ok(file) => file,
            Err(source) => {
                let err = LoggerError::Open {
                    path: config.path.clone(),
                    source,
                };
                eprintln!("[ERROR] {}", err);
                return Err(err);
            }
        };

        Ok(Logger {
            path: config.path,
            threshold: config.threshold,
            echo_to_console: config.echo_to_console,
            sink: Mutex::new(Sink {
                file: Some(BufWriter::new(file)),
                console,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn echoes_to_console(&self) -> bool {
        self.echo_to_console
    }

    pub fn is_closed(&self) -> bool {
        self.sink.lock().file.is_none()
    }

    /// Best-effort write; I/O failures and writes after close are dropped.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let _ = self.try_log(level, args);
    }

    pub fn try_log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        // Threshold is immutable; suppressed messages never touch the lock.
        if !self.threshold.admits(level) {
            return Ok(());
        }

        let mut sink = self.sink.lock();
        let Sink { file, console } = &mut *sink;
        let file = file.as_mut().ok_or(LoggerError::Closed)?;

        let header = format_header(level, &Local::now());
        let written = write_line(file, &header, args);
        let echoed = if self.echo_to_console {
            console.echo(level, &header, args)
        } else {
            Ok(())
        };

        written?;
        echoed?;
        Ok(())
    }

    /// Logs `bytes` as a hex dump. If the scratch buffer cannot be reserved
    /// the failure goes to stderr and nothing is written.
    pub fn log_hex(&self, level: LogLevel, bytes: &[u8]) {
        if let Err(err @ LoggerError::Allocation { .. }) = self.try_log_hex(level, bytes) {
            eprintln!("[ERROR] {}", err);
        }
    }

    pub fn try_log_hex(&self, level: LogLevel, bytes: &[u8]) -> Result<(), LoggerError> {
        if !self.threshold.admits(level) {
            return Ok(());
        }

        let message = hex::hex_message(bytes)?;
        self.try_log(level, format_args!("{}", message))
    }

    /// Flushes and releases the file. Later writes are no-ops and a second
    /// close does nothing.
    pub fn close(&self) -> Result<(), LoggerError> {
        let file = self.sink.lock().file.take();
        if let Some(mut file) = file {
            file.flush()?;
        }
        Ok(())
    }
}

fn write_line(
    file: &mut BufWriter<File>,
    header: &str,
    body: fmt::Arguments<'_>,
) -> std::io::Result<()> {
    file.write_all(header.as_bytes())?;
    file.write_fmt(body)?;
    file.write_all(b"\n")?;
    file.flush()
}
