use std::time::Duration;

use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::config::Credentials;
use crate::domain::issue::{Issue, IssueKey};
use crate::error::{AppError, AppResult, FetchError, GENERIC_FETCH_ERROR};
use crate::services::IssueTrackerService;

/// Read-only client for the issue lookup endpoint. One instance (and so one
/// connection pool) is shared by every request of a batch.
pub struct JiraClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl JiraClient {
    pub fn new(
        base_url: &str,
        credentials: Option<Credentials>,
        max_connections: usize,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(max_connections)
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::IssueTracker(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn auth_header(user: &str, password: &str) -> String {
        let credentials = format!("{user}:{password}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(&self, key: &IssueKey) -> String {
        format!("{}/rest/api/2/issue/{}", self.base_url, key)
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_issue(&self, key: &IssueKey) -> Result<Issue, FetchError> {
        let mut request = self
            .http
            .get(self.issue_endpoint(key))
            .header(ACCEPT, "application/json");
        if let Some(credentials) = &self.credentials {
            request = request.header(
                AUTHORIZATION,
                Self::auth_header(&credentials.user, &credentials.password),
            );
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let payload: JiraIssueResponse =
            serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))?;

        if let Some(messages) = payload.error_messages {
            let message = messages
                .first()
                .map(|message| message.trim_end_matches('.').to_string())
                .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string());
            return Err(FetchError::Tracker(message));
        }

        let issue_key = payload
            .key
            .ok_or_else(|| FetchError::Decode("response has no issue key".to_string()))?;
        let fields = payload
            .fields
            .ok_or_else(|| FetchError::Decode("response has no fields".to_string()))?;

        Ok(Issue {
            url: self.browse_url(&issue_key),
            key: issue_key,
            issue_type: fields.issuetype.name,
            summary: fields.summary,
            status: fields.status.name,
            resolution: fields.resolution.map(|resolution| resolution.name),
            resolution_date: fields.resolutiondate,
        })
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    #[serde(rename = "errorMessages")]
    error_messages: Option<Vec<String>>,
    key: Option<String>,
    fields: Option<JiraIssueFields>,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    issuetype: JiraNamed,
    summary: String,
    status: JiraNamed,
    resolution: Option<JiraNamed>,
    resolutiondate: Option<String>,
}

#[derive(Deserialize)]
struct JiraNamed {
    name: String,
}
