//! Background writer thread.

use crate::error::Result;
use crate::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Owns the log file; lives on its own thread.
pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens (or creates) the log file in append mode.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    fn write_record(&mut self, record: &LogRecord) {
        let line = record.render();
        if let Err(e) = self
            .file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
        {
            eprintln!("Error writing log: {}", e);
        }
    }

    /// Drains the channel until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<LogRecord>) {
        for record in receiver {
            self.write_record(&record);
        }
    }
}

/// Opens the file on the caller's thread so errors surface immediately,
/// then moves the writer to a named background thread.
pub(crate) fn spawn_writer(path: &Path, receiver: Receiver<LogRecord>) -> Result<()> {
    let writer = LogWriter::open(path)?;
    std::thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))?;
    Ok(())
}
