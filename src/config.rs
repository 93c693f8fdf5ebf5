// src/config.rs
//! Tracker settings read from the environment, after loading `.env` if present.

use crate::utils::AppError;

pub const DEFAULT_GITLAB_DOMAIN: &str = "gitlab.com";
pub const DEFAULT_DONE_STATUS: &str = "완료";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraCredentials {
    pub domain: String,
    pub email: String,
    pub api_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raw team keys from `JIRA_TEAMS`, in configured order.
    pub team_keys: Vec<String>,
    /// Jira status name counted as completed.
    pub done_status: String,
    pub jira: Option<JiraCredentials>,
    pub gitlab_domain: String,
    pub gitlab_token: Option<String>,
    /// Repository paths from `REPOSITORIES`, e.g. `/group/app`.
    pub repositories: Vec<String>,
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("No .env file found, using process environment"),
            Err(e) => return Err(AppError::Config(format!("Failed to load .env: {}", e))),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Only `JIRA_TEAMS` is required here; tracker credentials are checked
    /// when the producer phase asks for them.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let team_keys = get("JIRA_TEAMS")
            .map(|v| split_list(&v))
            .ok_or_else(|| AppError::Config("JIRA_TEAMS must be set".to_string()))?;
        if team_keys.is_empty() {
            return Err(AppError::Config("JIRA_TEAMS lists no team keys".to_string()));
        }

        let jira = match (get("JIRA_DOMAIN"), get("JIRA_EMAIL"), get("JIRA_API_TOKEN")) {
            (Some(domain), Some(email), Some(api_token)) => Some(JiraCredentials { domain, email, api_token }),
            _ => None,
        };

        Ok(Self {
            team_keys,
            done_status: get("JIRA_DONE_STATUS").unwrap_or_else(|| DEFAULT_DONE_STATUS.to_string()),
            jira,
            gitlab_domain: get("GITLAB_DOMAIN").unwrap_or_else(|| DEFAULT_GITLAB_DOMAIN.to_string()),
            gitlab_token: get("GITLAB_TOKEN"),
            repositories: get("REPOSITORIES").map(|v| split_list(&v)).unwrap_or_default(),
        })
    }

    pub fn jira_credentials(&self) -> Result<&JiraCredentials, AppError> {
        self.jira.as_ref().ok_or_else(|| {
            AppError::Config("JIRA_DOMAIN, JIRA_EMAIL and JIRA_API_TOKEN must be set to fetch issues".to_string())
        })
    }

    pub fn gitlab_token(&self) -> Result<&str, AppError> {
        self.gitlab_token
            .as_deref()
            .ok_or_else(|| AppError::Config("GITLAB_TOKEN must be set to fetch commits".to_string()))
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
