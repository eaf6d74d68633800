pub mod issue_tracker;
pub mod report_sink;
pub mod version_control;

pub use issue_tracker::IssueTrackerService;
pub use report_sink::ReportSink;
pub use version_control::VersionControlService;
