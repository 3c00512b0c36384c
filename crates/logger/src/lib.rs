//! Logging infrastructure for revscope.
//!
//! A simple thread-safe logger with file output and a bounded in-memory
//! ring of recent entries for in-app display.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Message level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Uppercase label for file output
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// One recorded message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug)]
struct Logger {
    /// Recent entries, oldest first
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Start each run with a fresh file
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== revscope log start ===");
        }

        Self {
            entries: VecDeque::new(),
            max_entries,
            min_level,
            file_path,
        }
    }

    fn record(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.entries.push_back(LogEntry {
            timestamp: timestamp.clone(),
            level,
            message: message.clone(),
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }

        // Recreate the file if it was deleted underneath us
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }

    fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn global() -> &'static Mutex<Logger> {
    LOGGER
        .get()
        .expect("Logger not initialized. Call logger::init() first.")
}

/// Initialize the global logger.
///
/// Must be called once at application startup before any logging functions;
/// subsequent calls are ignored.
pub fn init(file_path: PathBuf, max_entries: usize, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, max_entries, min_level)));
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    if let Ok(mut logger) = global().lock() {
        logger.record(LogLevel::Debug, message.into());
    }
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    if let Ok(mut logger) = global().lock() {
        logger.record(LogLevel::Info, message.into());
    }
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    if let Ok(mut logger) = global().lock() {
        logger.record(LogLevel::Warn, message.into());
    }
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    if let Ok(mut logger) = global().lock() {
        logger.record(LogLevel::Error, message.into());
    }
}

/// Recent entries, oldest first.
pub fn get_entries() -> Vec<LogEntry> {
    if let Ok(logger) = global().lock() {
        logger.snapshot()
    } else {
        Vec::new()
    }
}
