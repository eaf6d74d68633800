use std::sync::Arc;

use crate::context::AppContext;
use crate::domain::issue::IssueKeyPattern;
use crate::domain::report::render;
use crate::error::AppResult;
use crate::services::ReportSink;
use crate::workflow::fetch::fetch_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
    pub commits: usize,
    pub issues: usize,
    pub failures: usize,
}

/// Reads commits, extracts issue keys, looks them up and writes the report.
///
/// Commit retrieval happens before anything is written, so a version control
/// failure leaves the sink untouched.
pub async fn generate_report(ctx: &AppContext, sink: &mut dyn ReportSink) -> AppResult<ReportOutcome> {
    let config = &ctx.config;
    let pattern = IssueKeyPattern::new(&config.projects)?;

    let commits = ctx
        .version_control
        .list_commits_in(&config.repo_paths, &config.range)
        .await?;
    let keys = pattern.extract_keys(&commits);
    tracing::info!(
        commits = commits.len(),
        issues = keys.len(),
        "extracted issue keys"
    );

    let results = fetch_all(Arc::clone(&ctx.issue_tracker), &keys, config.concurrency).await;
    render(&results, sink)?;

    Ok(ReportOutcome {
        commits: commits.len(),
        issues: results.len(),
        failures: results.iter().filter(|result| !result.is_success()).count(),
    })
}
