pub mod git;
pub mod jira;
pub mod output;
