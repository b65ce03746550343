//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a bounded ring
//! and forwards every record to a sink (the browser console on wasm,
//! stderr elsewhere).

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Maximum number of records kept in memory
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 200,
            level: LevelFilter::Info,
        }
    }
}

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Destination for formatted records
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

/// Browser console on wasm32, stderr on every other target
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, entry: &LogEntry) {
        let line = entry.to_string();
        match entry.level {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
            Level::Info => web_sys::console::log_1(&line.into()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, entry: &LogEntry) {
        eprintln!("{}", entry);
    }
}

/// Ring-buffered logger
pub struct RollingLogger {
    config: LoggerConfig,
    buffer: Mutex<VecDeque<LogEntry>>,
    sink: Box<dyn LogSink>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig, sink: Box<dyn LogSink>) -> Self {
        Self {
            config,
            buffer: Mutex::new(VecDeque::with_capacity(config.capacity)),
            sink,
        }
    }

    /// Store an entry, evicting the oldest one when full
    pub fn push(&self, entry: LogEntry) {
        self.sink.write(&entry);

        if self.config.capacity == 0 {
            return;
        }
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        while buffer.len() >= self.config.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    /// Buffered entries, oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Install the global logger writing to the console sink.
/// Calling it twice returns the `log` crate's error.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let logger: &'static RollingLogger =
        Box::leak(Box::new(RollingLogger::new(config, Box::new(ConsoleSink))));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl LogSink for CountingSink {
        fn write(&self, entry: &LogEntry) {
            self.lines.lock().unwrap().push(entry.message.clone());
        }
    }

    fn make_entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap(),
            level: Level::Info,
            target: "ecoleta".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let config = LoggerConfig { capacity: 2, level: LevelFilter::Debug };
        let logger = RollingLogger::new(config, Box::new(CountingSink::default()));

        logger.push(make_entry("a"));
        logger.push(make_entry("b"));
        logger.push(make_entry("c"));

        let messages: Vec<_> = logger.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_sink_sees_every_entry() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = CountingSink { lines: lines.clone() };
        let config = LoggerConfig { capacity: 1, level: LevelFilter::Debug };
        let logger = RollingLogger::new(config, Box::new(sink));

        logger.push(make_entry("first"));
        logger.push(make_entry("second"));

        assert_eq!(*lines.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(logger.snapshot().len(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let config = LoggerConfig { capacity: 0, level: LevelFilter::Debug };
        let logger = RollingLogger::new(config, Box::new(CountingSink::default()));
        logger.push(make_entry("dropped"));
        assert!(logger.snapshot().is_empty());
    }

    #[test]
    fn test_level_filter() {
        let config = LoggerConfig { capacity: 4, level: LevelFilter::Warn };
        let logger = RollingLogger::new(config, Box::new(CountingSink::default()));

        let info = Metadata::builder().level(Level::Info).target("x").build();
        let error = Metadata::builder().level(Level::Error).target("x").build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn test_entry_display() {
        let line = make_entry("loaded 3 items").to_string();
        assert_eq!(line, "12:30:05.000 INFO  ecoleta: loaded 3 items");
    }
}
