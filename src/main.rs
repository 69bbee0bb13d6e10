use std::env;
use std::io::{self, BufRead};
use std::process;

use linelog::{LogLevel, LoggerConfig, LoggerError};

const USAGE: &str =
    "Usage: linelog <log-file> [--threshold <info|error|debug>] [--console] [--hex]";

fn main() {
    match run() {
        Ok(()) => {}
        // The logger reports open failures itself.
        Err(LoggerError::Open { .. }) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<(), LoggerError> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut log_path = None;
    let mut threshold = LogLevel::Debug;
    let mut echo = false;
    let mut hex = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--threshold" => {
                let value = iter
                    .next()
                    .ok_or_else(|| LoggerError::InvalidArguments(USAGE.to_string()))?;
                threshold = value.parse()?;
            }
            "--console" => echo = true,
            "--hex" => hex = true,
            path if log_path.is_none() && !path.starts_with("--") => log_path = Some(path),
            _ => return Err(LoggerError::InvalidArguments(USAGE.to_string())),
        }
    }

    let log_path = log_path.ok_or_else(|| LoggerError::InvalidArguments(USAGE.to_string()))?;

    let logger = LoggerConfig::new(log_path)
        .threshold(threshold)
        .echo_to_console(echo)
        .open()?;

    // Each line is "<LEVEL> <message>"; lines without a level prefix log at INFO.
    for line in io::stdin().lock().lines() {
        let line = line?;
        let (level, message) = split_level(&line);

        if hex {
            logger.try_log_hex(level, message.as_bytes())?;
        } else {
            logger.try_log(level, format_args!("{}", message))?;
        }
    }

    logger.close()
}

fn split_level(line: &str) -> (LogLevel, &str) {
    if let Some((first, rest)) = line.split_once(' ') {
        if let Ok(level) = first.parse() {
            return (level, rest);
        }
    } else if let Ok(level) = line.parse() {
        return (level, "");
    }
    (LogLevel::Info, line)
}
