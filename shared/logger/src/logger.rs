//! Thread-safe asynchronous logger.
//!
//! [`Logger`] is the handle passed around the application. Clones and
//! [`Logger::for_component`] views all feed the same writer thread, so a
//! log file is only ever opened once.

use crate::error::Result;
use crate::level::LogLevel;
use crate::record::LogRecord;
use crate::writer::spawn_writer;
use std::path::PathBuf;
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::builder("app.log")
///     .level(LogLevel::Debug)
///     .component("App")
///     .build()
///     .unwrap();
/// logger.info("Application started");
///
/// let fetch_logger = logger.for_component("Fetch");
/// fetch_logger.error("Connection refused");
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    sender: Sender<LogRecord>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

/// Configures a [`Logger`] before its writer thread is started.
#[derive(Debug)]
pub struct LoggerBuilder {
    path: PathBuf,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl LoggerBuilder {
    /// Minimum level that is recorded (default: `Info`).
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Tag added to every line, e.g. `"App"` or `"Fetch"`.
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Also print each line to stdout.
    pub fn console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Opens the log file and starts the writer thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or the thread
    /// cannot be spawned.
    pub fn build(self) -> Result<Logger> {
        let (sender, receiver) = channel();
        spawn_writer(&self.path, receiver)?;
        Ok(Logger {
            sender,
            level: self.level,
            component: self.component,
            console_output: self.console_output,
        })
    }
}

impl Logger {
    /// Starts configuring a logger that appends to `path`.
    pub fn builder(path: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder {
            path: path.into(),
            level: LogLevel::Info,
            component: None,
            console_output: false,
        }
    }

    /// Shorthand for a logger with no component tag.
    pub fn new(path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        Self::builder(path).level(level).build()
    }

    /// Same writer and level, different component tag.
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if a record at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let record = LogRecord::now(level, self.component.as_deref(), message);
        if self.console_output {
            print!("{}", record.render());
        }

        // Writer thread gone means the process is shutting down.
        let _ = self.sender.send(record);
    }
}
