use crate::error::AppResult;

/// Destination for report lines; each call writes exactly one line.
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> AppResult<()>;
}

impl ReportSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> AppResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}
