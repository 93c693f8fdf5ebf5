// src/trackers/render.rs
//! Markdown rendering of the per-source documents. Each team or repository
//! with activity gets one level-2 section holding a flat list.

use chrono::NaiveDate;

use crate::trackers::models::{GitLabCommit, JiraIssue};

/// Renders the Jira document: completed issue summaries grouped by team key.
pub fn jira_document(date: NaiveDate, teams: &[(String, Vec<JiraIssue>)]) -> String {
    let mut output = format!("# {} 작업 내역\n", date.format("%Y-%m-%d"));
    for (team_key, issues) in teams {
        if issues.is_empty() {
            continue;
        }
        output.push_str(&format!("\n## {}\n", team_key));
        for issue in issues {
            output.push_str(&format!("- {}\n", issue.fields.summary));
        }
    }
    output
}

/// Renders the Git document: commit titles grouped by repository path.
pub fn git_document(date: NaiveDate, repositories: &[(String, Vec<GitLabCommit>)]) -> String {
    let mut output = format!("# {} 커밋 내역\n\n", date.format("%Y-%m-%d"));
    for (repo, commits) in repositories {
        if commits.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n", repo));
        for commit in commits {
            output.push_str(&format!("- {}\n", commit.title));
        }
        output.push('\n');
    }
    output
}
