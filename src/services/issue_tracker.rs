use async_trait::async_trait;

use crate::domain::issue::{Issue, IssueKey};
use crate::error::FetchError;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn fetch_issue(&self, key: &IssueKey) -> Result<Issue, FetchError>;
}
