use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::AppResult;
use crate::services::ReportSink;

pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> AppResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }
}

/// Appends each line to a file, opening and closing it per line.
pub struct AppendFileSink {
    path: PathBuf,
}

impl AppendFileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportSink for AppendFileSink {
    fn write_line(&mut self, line: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        tracing::debug!(path = %self.path.display(), "appended report line");
        Ok(())
    }
}
