use crate::domain::issue::IssueResult;
use crate::error::AppResult;
use crate::services::ReportSink;

pub const HEADER: &str = "key,issue_type,summary,status,resolution,resolution_date,url";

const ERROR_MARKER: &str = "Error";

/// Escapes a value for a double-quoted CSV field. Absent values become "".
pub fn sanitize(value: Option<&str>) -> String {
    value.map(|text| text.replace('"', "\"\"")).unwrap_or_default()
}

/// One sanitized CSV line, always seven columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    fields: [String; 7],
}

impl ReportRow {
    pub fn from_result(result: &IssueResult) -> Self {
        let fields = match result {
            IssueResult::Success { issue, .. } => [
                Some(issue.key.as_str()),
                Some(issue.issue_type.as_str()),
                Some(issue.summary.as_str()),
                Some(issue.status.as_str()),
                issue.resolution.as_deref(),
                issue.resolution_date.as_deref(),
                Some(issue.url.as_str()),
            ],
            IssueResult::Failure { key, error_message } => [
                Some(key.as_str()),
                Some(ERROR_MARKER),
                Some(error_message.as_str()),
                None,
                None,
                None,
                None,
            ],
        };
        Self {
            fields: fields.map(sanitize),
        }
    }

    pub fn to_line(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("\"{field}\""))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Writes the header, then one row per result in the order given.
pub fn render(results: &[IssueResult], sink: &mut dyn ReportSink) -> AppResult<()> {
    sink.write_line(HEADER)?;
    for result in results {
        sink.write_line(&ReportRow::from_result(result).to_line())?;
    }
    Ok(())
}
