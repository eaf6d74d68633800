use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::cmd::report::{RangeType, ReportArgs};
use crate::domain::commit::CommitRange;
use crate::error::{AppError, AppResult};

pub const DEFAULT_CONCURRENCY: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_CONCURRENCY: u64 = 1024;
pub const MAX_TIMEOUT_SECS: u64 = 3600;

const CONCURRENCY_ENV: &str = "JIRA_COMMITS_REPORT_CONCURRENCY";
const TIMEOUT_ENV: &str = "JIRA_COMMITS_REPORT_TIMEOUT_SECS";

#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"****")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira_server: String,
    pub credentials: Option<Credentials>,
    pub projects: Vec<String>,
    pub repo_paths: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub range: CommitRange,
    pub concurrency: usize,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn load(args: ReportArgs) -> AppResult<Self> {
        Self::load_with_env(args, |name| env::var(name).ok())
    }

    /// Flags win over environment variables, which win over defaults.
    pub fn load_with_env<F>(args: ReportArgs, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jira_server = args.jira_server.trim().trim_end_matches('/').to_string();
        if jira_server.is_empty() {
            return Err(AppError::Configuration(
                "Jira server URL must not be empty".to_string(),
            ));
        }

        let projects = args
            .projects
            .iter()
            .map(|project| project.trim().to_string())
            .filter(|project| !project.is_empty())
            .collect::<Vec<_>>();
        if projects.is_empty() {
            return Err(AppError::Configuration(
                "at least one project code is required".to_string(),
            ));
        }

        let repo_paths = if args.repo_paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.repo_paths
        };

        let range = match args.range_type {
            RangeType::Date => CommitRange::Dates {
                from: args.from,
                to: args.to,
            },
            RangeType::Ref => CommitRange::Refs {
                from: args.from,
                to: args.to,
            },
        };

        let concurrency = resolve_positive(
            "concurrency",
            args.concurrency.map(|value| value as u64),
            CONCURRENCY_ENV,
            DEFAULT_CONCURRENCY as u64,
            MAX_CONCURRENCY,
            &lookup,
        )? as usize;
        let timeout_secs = resolve_positive(
            "timeout",
            args.timeout,
            TIMEOUT_ENV,
            DEFAULT_TIMEOUT_SECS,
            MAX_TIMEOUT_SECS,
            &lookup,
        )?;

        Ok(Self {
            jira_server,
            credentials: Some(Credentials {
                user: args.jira_user,
                password: args.jira_password,
            }),
            projects,
            repo_paths,
            output: args.file,
            range,
            concurrency,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn resolve_positive<F>(
    label: &str,
    flag: Option<u64>,
    env_name: &str,
    default: u64,
    max: u64,
    lookup: &F,
) -> AppResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match flag {
        Some(value) => value,
        None => match lookup(env_name) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|err| {
                AppError::Configuration(format!("invalid {env_name} value {raw:?}: {err}"))
            })?,
            None => default,
        },
    };
    if !(1..=max).contains(&value) {
        return Err(AppError::Configuration(format!(
            "{label} must be between 1 and {max}, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        report: ReportArgs,
    }

    fn args(extra: &[&str]) -> ReportArgs {
        let mut argv = vec![
            "jira-commits-report",
            "-s",
            "https://jira.example.com/",
            "-P",
            "ABC",
            "-u",
            "bot",
            "-p",
            "secret",
        ];
        argv.extend_from_slice(extra);
        TestCli::try_parse_from(argv).unwrap().report
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn applies_defaults() {
        let config = AppConfig::load_with_env(args(&[]), no_env).unwrap();
        assert_eq!(config.jira_server, "https://jira.example.com");
        assert_eq!(config.projects, vec!["ABC"]);
        assert_eq!(config.repo_paths, vec![PathBuf::from(".")]);
        assert_eq!(config.output, None);
        assert_eq!(
            config.range,
            CommitRange::Refs {
                from: None,
                to: None
            }
        );
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        let credentials = config.credentials.unwrap();
        assert_eq!(credentials.user, "bot");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn builds_date_range() {
        let config = AppConfig::load_with_env(
            args(&["-t", "date", "--from", "2024-01-01", "--to", "2024-02-01"]),
            no_env,
        )
        .unwrap();
        assert_eq!(
            config.range,
            CommitRange::Dates {
                from: Some("2024-01-01".to_string()),
                to: Some("2024-02-01".to_string()),
            }
        );
    }

    #[test]
    fn accepts_several_projects_and_repos() {
        let config = AppConfig::load_with_env(
            args(&["-P", "XY", "-r", "one", "-r", "two", "-f", "out.csv"]),
            no_env,
        )
        .unwrap();
        assert_eq!(config.projects, vec!["ABC", "XY"]);
        assert_eq!(
            config.repo_paths,
            vec![PathBuf::from("one"), PathBuf::from("two")]
        );
        assert_eq!(config.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn environment_overrides_defaults_but_not_flags() {
        let env = |name: &str| match name {
            CONCURRENCY_ENV => Some("8".to_string()),
            TIMEOUT_ENV => Some("12".to_string()),
            _ => None,
        };
        let config = AppConfig::load_with_env(args(&[]), env).unwrap();
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.request_timeout, Duration::from_secs(12));

        let config = AppConfig::load_with_env(args(&["--concurrency", "3"]), env).unwrap();
        assert_eq!(config.concurrency, 3);
    }

    #[test]
    fn rejects_invalid_tuning() {
        let env = |name: &str| (name == TIMEOUT_ENV).then(|| "soon".to_string());
        assert!(matches!(
            AppConfig::load_with_env(args(&[]), env),
            Err(AppError::Configuration(_))
        ));
        assert!(AppConfig::load_with_env(args(&["--concurrency", "0"]), no_env).is_err());
    }

    #[test]
    fn rejects_oversized_tuning() {
        let huge = usize::MAX.to_string();
        assert!(matches!(
            AppConfig::load_with_env(args(&["--concurrency", huge.as_str()]), no_env),
            Err(AppError::Configuration(_))
        ));

        let env = |name: &str| (name == CONCURRENCY_ENV).then(|| u64::MAX.to_string());
        assert!(matches!(
            AppConfig::load_with_env(args(&[]), env),
            Err(AppError::Configuration(_))
        ));

        let too_long = (MAX_TIMEOUT_SECS + 1).to_string();
        assert!(AppConfig::load_with_env(args(&["--timeout", too_long.as_str()]), no_env).is_err());

        let max = MAX_CONCURRENCY.to_string();
        let config = AppConfig::load_with_env(args(&["--concurrency", max.as_str()]), no_env).unwrap();
        assert_eq!(config.concurrency, MAX_CONCURRENCY as usize);
    }

    #[test]
    fn rejects_blank_server() {
        let mut report = args(&[]);
        report.jira_server = "  ".to_string();
        assert!(AppConfig::load_with_env(report, no_env).is_err());
    }

    #[test]
    fn masks_password_in_debug_output() {
        let credentials = Credentials {
            user: "bot".to_string(),
            password: "secret".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("secret"));
    }
}
