use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::domain::commit::Commit;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey(pub String);

impl IssueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Matches `CODE-<digits>` for any of the configured project codes.
#[derive(Debug, Clone)]
pub struct IssueKeyPattern {
    regex: Regex,
}

impl IssueKeyPattern {
    pub fn new<S: AsRef<str>>(project_codes: &[S]) -> AppResult<Self> {
        let codes = project_codes
            .iter()
            .map(|code| code.as_ref().trim())
            .filter(|code| !code.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>();
        if codes.is_empty() {
            return Err(AppError::Configuration(
                "at least one project code is required".to_string(),
            ));
        }

        let pattern = format!("(?:{})-[0-9]+", codes.join("|"));
        let regex = Regex::new(&pattern).map_err(|err| {
            AppError::Configuration(format!("invalid project pattern {pattern}: {err}"))
        })?;
        Ok(Self { regex })
    }

    pub fn extract_keys(&self, commits: &[Commit]) -> HashSet<IssueKey> {
        commits
            .iter()
            .flat_map(|commit| self.regex.find_iter(&commit.message))
            .map(|found| IssueKey(found.as_str().to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub issue_type: String,
    pub summary: String,
    pub status: String,
    pub resolution: Option<String>,
    pub resolution_date: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueResult {
    /// `key` is the requested key; `issue.key` is what the tracker reports,
    /// which differs when an issue has been moved.
    Success { key: IssueKey, issue: Issue },
    Failure { key: IssueKey, error_message: String },
}

impl IssueResult {
    /// The requested key this result answers.
    pub fn key(&self) -> &str {
        match self {
            IssueResult::Success { key, .. } | IssueResult::Failure { key, .. } => key.as_str(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, IssueResult::Success { .. })
    }
}
