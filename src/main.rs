mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod telemetry;
mod workflow;

use std::sync::Arc;

use clap::{ArgAction, Parser};

use crate::cmd::report::{self, ReportArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::jira::JiraClient;

#[derive(Parser)]
#[command(
    name = "jira-commits-report",
    author,
    version,
    about = "Get issues from git repository commit history"
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Increase diagnostic output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let _telemetry = telemetry::init(cli.verbose);

    if let Err(error) = run(cli.report).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(args: ReportArgs) -> AppResult<()> {
    let config = AppConfig::load(args)?;
    tracing::debug!(?config, "loaded configuration");

    let git = Arc::new(GitCli::new());
    let issue_tracker = Arc::new(JiraClient::new(
        &config.jira_server,
        config.credentials.clone(),
        config.concurrency,
        config.request_timeout,
    )?);

    let context = AppContext::new(config, git, issue_tracker);
    let outcome = report::run(&context).await?;

    tracing::info!(
        commits = outcome.commits,
        issues = outcome.issues,
        failures = outcome.failures,
        "report written"
    );
    Ok(())
}
