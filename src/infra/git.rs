use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::commit::{Commit, CommitRange};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn log_command_args(range: &CommitRange) -> Vec<String> {
        let mut args = vec!["log".to_string()];
        args.extend(range.log_args());
        args.push("--pretty=oneline".to_string());
        args
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn list_commits(&self, repo_path: &Path, range: &CommitRange) -> AppResult<Vec<Commit>> {
        let args = Self::log_command_args(range);
        let cmdline = format!("{} {}", self.program, args.join(" "));
        tracing::info!(repo = %repo_path.display(), %cmdline, "reading commit log");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(repo_path)
            .output()
            .await
            .map_err(|err| {
                AppError::VersionControl(format!(
                    "failed to run {cmdline} in {}: {err}",
                    repo_path.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map(|code| code.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(AppError::VersionControl(format!(
                "Cmd('{}') failed due to: exit code({code})\n  cmdline: {cmdline}\n  stderr: {}",
                self.program,
                stderr.trim_end_matches('\n')
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let commits = stdout
            .lines()
            .map(Commit::from_log_line)
            .collect::<AppResult<Vec<_>>>()?;
        tracing::debug!(repo = %repo_path.display(), count = commits.len(), "parsed commits");
        Ok(commits)
    }
}
