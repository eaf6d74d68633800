use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::commit::{Commit, CommitRange};
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn list_commits(&self, repo_path: &Path, range: &CommitRange) -> AppResult<Vec<Commit>>;

    /// Commits of every repository, concatenated in the order given.
    async fn list_commits_in(
        &self,
        repo_paths: &[PathBuf],
        range: &CommitRange,
    ) -> AppResult<Vec<Commit>> {
        let mut commits = Vec::new();
        for repo_path in repo_paths {
            commits.extend(self.list_commits(repo_path, range).await?);
        }
        Ok(commits)
    }
}
