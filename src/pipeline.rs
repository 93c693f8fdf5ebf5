// src/pipeline.rs
//! Two-phase daily run: the producers write both source documents, then the
//! merge phase reads them back and writes the combined report.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::report::{merge, ComposeOptions, TeamRoster};
use crate::storage::{ReportPaths, SourceKind, StorageManager};
use crate::trackers::gitlab::GitLabClient;
use crate::trackers::jira::JiraClient;
use crate::trackers::render;
use crate::utils::AppError;

/// Fetches today's completed issues per team key and renders the Jira document.
/// A team whose lookup fails is logged and left out.
pub async fn produce_jira(client: &JiraClient, config: &AppConfig, date: NaiveDate) -> String {
    let mut teams = Vec::with_capacity(config.team_keys.len());
    for key in &config.team_keys {
        match client.completed_issues(key, date, &config.done_status).await {
            Ok(issues) => teams.push((key.clone(), issues)),
            Err(e) => tracing::error!("Failed to fetch Jira issues for {}: {}", key, e),
        }
    }

    render::jira_document(date, &teams)
}

/// Fetches today's commits per repository and renders the Git document.
/// A repository whose lookup fails is logged and left out.
pub async fn produce_git(client: &GitLabClient, config: &AppConfig, date: NaiveDate) -> String {
    let mut repositories = Vec::with_capacity(config.repositories.len());
    for repo in &config.repositories {
        let project_id = match client.project_id(repo).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to resolve GitLab project {}: {}", repo, e);
                continue;
            }
        };
        match client.commits_since(project_id, date).await {
            Ok(commits) => repositories.push((repo.clone(), commits)),
            Err(e) => tracing::error!("Failed to fetch commits for {}: {}", repo, e),
        }
    }

    render::git_document(date, &repositories)
}

/// Producer phase. Both documents are fully written before this returns.
/// Missing credentials fail the phase before any request is sent.
pub async fn produce(
    config: &AppConfig,
    storage: &StorageManager,
    paths: &ReportPaths,
    date: NaiveDate,
) -> Result<(), AppError> {
    let jira = JiraClient::new(config.jira_credentials()?)?;
    let gitlab = GitLabClient::new(&config.gitlab_domain, config.gitlab_token()?)?;

    tracing::info!("Fetching tracker activity for {}", date);
    let (jira_doc, git_doc) = tokio::join!(produce_jira(&jira, config, date), produce_git(&gitlab, config, date));

    storage.write_document(&paths.jira, &jira_doc)?;
    storage.write_document(&paths.git, &git_doc)?;
    Ok(())
}

/// Merge phase. Fails before writing anything if either source document is missing.
pub fn merge_phase(
    storage: &StorageManager,
    paths: &ReportPaths,
    teams: &TeamRoster,
    options: &ComposeOptions,
) -> Result<PathBuf, AppError> {
    let jira_doc = storage.read_source(SourceKind::Jira, paths)?;
    let git_doc = storage.read_source(SourceKind::Git, paths)?;

    let report = merge(&jira_doc, &git_doc, teams, options);
    if report.is_empty() {
        tracing::warn!("No team activity found in either source; writing an empty report");
    } else {
        let reported: Vec<&str> = report.blocks().iter().map(|b| b.team.as_str()).collect();
        tracing::info!("Reporting teams: {}", reported.join(", "));
    }

    storage.write_document(&paths.combined, &report.render())?;
    Ok(paths.combined.clone())
}

/// Runs both phases for `date`, or only the merge when `merge_only` is set.
pub async fn run(
    config: &AppConfig,
    storage: &StorageManager,
    date: NaiveDate,
    options: &ComposeOptions,
    merge_only: bool,
) -> Result<PathBuf, AppError> {
    let paths = storage.paths_for(date);

    if merge_only {
        tracing::info!("Skipping producer phase, merging existing documents");
    } else {
        produce(config, storage, &paths, date).await?;
    }

    let teams = TeamRoster::from_keys(&config.team_keys);
    if teams.is_empty() {
        return Err(AppError::Config("No usable team keys configured".to_string()));
    }
    merge_phase(storage, &paths, &teams, options)
}
