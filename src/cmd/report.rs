use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::output::{AppendFileSink, StdoutSink};
use crate::services::ReportSink;
use crate::workflow::report::{ReportOutcome, generate_report};

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Jira server URL.
    #[arg(short = 's', long = "jira-server")]
    pub jira_server: String,

    /// Jira project code; repeat or list several to match any of them.
    #[arg(short = 'P', long = "project", num_args = 1.., required = true)]
    pub projects: Vec<String>,

    /// Jira user.
    #[arg(short = 'u', long = "jira-user")]
    pub jira_user: String,

    /// Jira password.
    #[arg(short = 'p', long = "jira-password")]
    pub jira_password: String,

    /// Repository path; defaults to the current directory.
    #[arg(short = 'r', long = "repo-path", num_args = 1..)]
    pub repo_paths: Vec<PathBuf>,

    /// Output file, appended to. Writes to stdout when omitted.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// How --from and --to are interpreted.
    #[arg(short = 't', long = "type", value_enum, default_value = "ref")]
    pub range_type: RangeType,

    /// Start of the range (date or ref).
    #[arg(long)]
    pub from: Option<String>,

    /// End of the range (date or ref); refs default to HEAD.
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum simultaneous Jira requests [default: 50].
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds [default: 30].
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeType {
    Date,
    Ref,
}

pub async fn run(ctx: &AppContext) -> AppResult<ReportOutcome> {
    let mut sink: Box<dyn ReportSink> = match &ctx.config.output {
        Some(path) => Box::new(AppendFileSink::new(path.clone())),
        None => Box::new(StdoutSink),
    };
    generate_report(ctx, sink.as_mut()).await
}
