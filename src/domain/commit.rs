use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    pub message: String,
}

impl Commit {
    /// Parses one `git log --pretty=oneline` line: `<id> <message>`.
    pub fn from_log_line(line: &str) -> AppResult<Self> {
        match line.split_once(' ') {
            Some((id, message)) if !id.is_empty() => Ok(Self {
                id: id.to_string(),
                message: message.to_string(),
            }),
            _ => Err(AppError::VersionControl(format!(
                "unexpected git log line: {line:?}"
            ))),
        }
    }
}

/// Bounds of the history scanned in every repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    Dates {
        from: Option<String>,
        to: Option<String>,
    },
    Refs {
        from: Option<String>,
        to: Option<String>,
    },
}

impl CommitRange {
    pub fn log_args(&self) -> Vec<String> {
        match self {
            CommitRange::Dates { from, to } => {
                let mut args = Vec::new();
                if let Some(from) = from {
                    args.push(format!("--since={from}"));
                }
                if let Some(to) = to {
                    args.push(format!("--until={to}"));
                }
                args
            }
            CommitRange::Refs { from, to } => {
                let to = to.as_deref().unwrap_or("HEAD");
                match from {
                    Some(from) => vec![format!("{from}..{to}")],
                    None => vec![to.to_string()],
                }
            }
        }
    }
}
