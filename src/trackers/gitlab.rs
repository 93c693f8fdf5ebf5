// src/trackers/gitlab.rs
use chrono::NaiveDate;
use reqwest::{header, Url};

use crate::trackers::models::{GitLabCommit, GitLabProject};
use crate::trackers::{build_http_client, ensure_success};
use crate::utils::error::TrackerError;

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

pub struct GitLabClient {
    http: reqwest::Client,
    api_base: Url,
    token: String,
}

impl GitLabClient {
    pub fn new(domain: &str, token: &str) -> Result<Self, TrackerError> {
        let raw = format!("https://{}/api/v4/", domain.trim_end_matches('/'));
        let api_base = Url::parse(&raw).map_err(|e| TrackerError::Url(format!("{}: {}", raw, e)))?;
        Ok(Self {
            http: build_http_client()?,
            api_base,
            token: token.to_string(),
        })
    }

    /// Resolves a repository path such as `/group/app` to its numeric project id.
    pub async fn project_id(&self, repo_path: &str) -> Result<u64, TrackerError> {
        let url = self.project_url(repo_path)?;
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let project: GitLabProject = ensure_success(response).await?.json().await?;
        tracing::debug!("Resolved {} to project id {}", repo_path, project.id);
        Ok(project.id)
    }

    /// Commits on any branch since midnight UTC of `date`, branch merges excluded.
    pub async fn commits_since(&self, project_id: u64, date: NaiveDate) -> Result<Vec<GitLabCommit>, TrackerError> {
        let url = self.commits_url(project_id)?;
        let since = format!("{}T00:00:00Z", date.format("%Y-%m-%d"));

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .header(header::ACCEPT, "application/json")
            .query(&[("since", since.as_str()), ("all", "true")])
            .send()
            .await?;

        let commits: Vec<GitLabCommit> = ensure_success(response).await?.json().await?;
        let commits: Vec<GitLabCommit> = commits.into_iter().filter(|c| !c.is_branch_merge()).collect();
        tracing::info!("GitLab project {}: {} commits", project_id, commits.len());
        Ok(commits)
    }

    fn project_url(&self, repo_path: &str) -> Result<Url, TrackerError> {
        let path = repo_path.trim().trim_start_matches('/');
        self.with_segments(&["projects", path])
    }

    fn commits_url(&self, project_id: u64) -> Result<Url, TrackerError> {
        self.with_segments(&["projects", &project_id.to_string(), "repository", "commits"])
    }

    // Each segment is percent-encoded, so a `group/app` path becomes `group%2Fapp`.
    fn with_segments(&self, segments: &[&str]) -> Result<Url, TrackerError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| TrackerError::Url(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GitLabClient {
        GitLabClient::new("gitlab.example.com", "secret").unwrap()
    }

    #[test]
    fn test_project_url_encodes_path() {
        let url = client().project_url("/web/front-ABCD").unwrap();
        assert_eq!(url.as_str(), "https://gitlab.example.com/api/v4/projects/web%2Ffront-ABCD");
    }

    #[test]
    fn test_commits_url() {
        let url = client().commits_url(42).unwrap();
        assert_eq!(url.as_str(), "https://gitlab.example.com/api/v4/projects/42/repository/commits");
    }
}
