// src/trackers/jira.rs
use chrono::NaiveDate;
use reqwest::header;

use crate::config::JiraCredentials;
use crate::trackers::models::{JiraIssue, JiraSearchResponse};
use crate::trackers::{build_http_client, ensure_success};
use crate::utils::error::TrackerError;

/// Fields requested from the search endpoint.
const SEARCH_FIELDS: &str = "key,summary,status";

pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(credentials: &JiraCredentials) -> Result<Self, TrackerError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: format!("https://{}", credentials.domain.trim_end_matches('/')),
            email: credentials.email.clone(),
            api_token: credentials.api_token.clone(),
        })
    }

    /// Issues of `project_key` updated on or after `date` whose status is `done_status`.
    pub async fn completed_issues(
        &self,
        project_key: &str,
        date: NaiveDate,
        done_status: &str,
    ) -> Result<Vec<JiraIssue>, TrackerError> {
        let url = format!("{}/rest/api/3/search", self.base_url);
        let jql = updated_since_jql(project_key, date);
        tracing::debug!("Searching Jira: {}", jql);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(header::ACCEPT, "application/json")
            .query(&[("jql", jql.as_str()), ("fields", SEARCH_FIELDS)])
            .send()
            .await?;

        let search: JiraSearchResponse = ensure_success(response).await?.json().await?;
        let issues = keep_completed(search.issues, done_status);
        for issue in &issues {
            tracing::debug!("Completed {}: {}", issue.key, issue.fields.summary);
        }
        tracing::info!("Jira project {}: {} completed issues", project_key, issues.len());
        Ok(issues)
    }
}

fn updated_since_jql(project_key: &str, date: NaiveDate) -> String {
    format!(
        "project = {} AND updated >= \"{}\" ORDER BY creator ASC",
        project_key,
        date.format("%Y-%m-%d")
    )
}

fn keep_completed(issues: Vec<JiraIssue>, done_status: &str) -> Vec<JiraIssue> {
    issues
        .into_iter()
        .filter(|issue| issue.fields.status.name == done_status)
        .collect()
}
