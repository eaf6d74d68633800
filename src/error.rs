use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub const GENERIC_FETCH_ERROR: &str = "Errors getting issue data";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a single issue lookup did not produce issue data.
///
/// These never abort a batch; they end up as the text of a failure row.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Jira responded with {0}")]
    Status(StatusCode),
    #[error("Jira reported: {0}")]
    Tracker(String),
    #[error("failed to call Jira: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to parse Jira response: {0}")]
    Decode(String),
    #[error("fetch task did not complete: {0}")]
    Task(String),
}

impl FetchError {
    pub fn report_message(&self) -> String {
        match self {
            FetchError::Tracker(message) => message.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}
