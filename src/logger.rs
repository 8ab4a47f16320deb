//! Logging setup
//!
//! Log records go to a file (the terminal belongs to the UI) and to a
//! [`LogBuffer`] the gallery shows on its logs page.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};

/// Shared, bounded buffer of formatted log lines
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry, dropping the oldest once full
    pub fn push(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// `[HH:MM:SS.mmm LEVEL target] message`
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {:<5} {}] {}", Local::now().format("%H:%M:%S%.3f"), level, target, message)
}

/// Default log file location
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
        .join(LOG_FILE_NAME)
}

/// Install the global logger. Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig, buffer: LogBuffer) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{}", format_line(record.level(), record.target(), message))))
        .level(config.level_filter()?)
        .chain(file)
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())))
        .apply()
        .context("Logger already initialised")?;

    log::info!("logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_newest_first() {
        let buffer = LogBuffer::new();
        buffer.push("one".to_string());
        buffer.push("two".to_string());
        assert_eq!(buffer.get_logs(), vec!["two", "one"]);
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::with_capacity(2);
        for line in ["a", "b", "c"] {
            buffer.push(line.to_string());
        }
        assert_eq!(buffer.get_logs(), vec!["c", "b"]);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_format_line() {
        let line = format_line(log::Level::Warn, "shadow", &format_args!("degraded"));
        assert!(line.ends_with(" WARN  shadow] degraded"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config, LogBuffer::new()).is_ok());
    }
}
