pub mod console;
pub mod hex;
pub mod logger;
pub mod model;

pub use console::Console;
pub use logger::Logger;
pub use model::config::LoggerConfig;
pub use model::error::LoggerError;
pub use model::level::LogLevel;

/// Formats and logs a message at the given level, e.g.
/// `log_at!(logger, LogLevel::Info, "peer {} connected", addr)`.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}
