//! Thread-safe asynchronous file logger.
//!
//! Records are handed to a dedicated writer thread over a channel, so
//! logging from the UI thread never waits on disk I/O.

pub mod error;
mod level;
mod logger;
mod record;
mod writer;

pub use error::{LoggingError, Result};
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
