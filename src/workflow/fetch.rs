use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::domain::issue::{IssueKey, IssueResult};
use crate::error::FetchError;
use crate::services::IssueTrackerService;

/// Looks up every key concurrently, at most `limit` requests in flight.
///
/// Returns exactly one result per key. A failed lookup, including a task
/// that panics, only turns its own key into a `Failure`; siblings keep
/// running and the call returns once all of them have settled.
pub async fn fetch_all(
    tracker: Arc<dyn IssueTrackerService>,
    keys: &HashSet<IssueKey>,
    limit: usize,
) -> Vec<IssueResult> {
    let permits = Arc::new(Semaphore::new(limit.clamp(1, Semaphore::MAX_PERMITS)));

    let handles: Vec<(IssueKey, JoinHandle<Result<IssueResult, FetchError>>)> = keys
        .iter()
        .cloned()
        .map(|key| {
            let tracker = Arc::clone(&tracker);
            let permits = Arc::clone(&permits);
            let task_key = key.clone();
            let handle = tokio::spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|err| FetchError::Task(err.to_string()))?;
                let issue = tracker.fetch_issue(&task_key).await?;
                Ok::<_, FetchError>(IssueResult::Success {
                    key: task_key,
                    issue,
                })
            });
            (key, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (key, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => Err(FetchError::Task(err.to_string())),
        };
        let result = match outcome {
            Ok(result) => {
                tracing::debug!(%key, "fetched issue");
                result
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "failed to fetch issue");
                IssueResult::Failure {
                    key,
                    error_message: err.report_message(),
                }
            }
        };
        results.push(result);
    }

    let failed_keys = results
        .iter()
        .filter(|result| !result.is_success())
        .map(IssueResult::key)
        .collect::<Vec<_>>();
    tracing::info!(
        requested = keys.len(),
        failed = failed_keys.len(),
        ?failed_keys,
        "issue batch complete"
    );
    results
}
