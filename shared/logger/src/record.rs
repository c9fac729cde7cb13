//! A single log line before it is written.

use crate::level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogRecord {
    /// Stamps the record with the current local time.
    pub fn now(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    /// `[timestamp] LEVEL [component]: message\n`, component omitted when unset.
    pub fn render(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "[{}] {} [{}]: {}\n",
                self.timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}\n", self.timestamp, self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_component() {
        let record = LogRecord::now(LogLevel::Error, Some("Fetch"), "connection refused");
        let line = record.render();

        assert!(line.contains("ERROR [Fetch]: connection refused"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_render_without_component() {
        let record = LogRecord::now(LogLevel::Info, None, "started");
        assert!(record.render().contains("] INFO: started"));
    }

    #[test]
    fn test_timestamp_format() {
        let record = LogRecord::now(LogLevel::Info, None, "x");
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(record.timestamp.len(), 23);
        assert_eq!(&record.timestamp[4..5], "-");
        assert_eq!(&record.timestamp[19..20], ".");
    }
}
