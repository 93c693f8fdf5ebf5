// src/trackers/models.rs
use serde::Deserialize;

/// Response of the Jira issue search endpoint, trimmed to the requested fields.
/// Example: https://<domain>/rest/api/3/search?jql=...&fields=key,summary,status
#[derive(Debug, Deserialize)]
pub struct JiraSearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueFields {
    pub summary: String,
    pub status: JiraStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraStatus {
    pub name: String,
}

/// Only the project id is needed from the GitLab project lookup.
#[derive(Debug, Deserialize)]
pub struct GitLabProject {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitLabCommit {
    pub title: String,
}

impl GitLabCommit {
    /// Merge commits generated by GitLab carry no information for the report.
    pub fn is_branch_merge(&self) -> bool {
        self.title.starts_with("Merge branch")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jira_search_payload() {
        let payload = serde_json::json!({
            "startAt": 0,
            "total": 2,
            "issues": [
                { "key": "PROJ-1", "fields": { "summary": "Fix login", "status": { "name": "완료" } } },
                { "key": "PROJ-2", "fields": { "summary": "Draft spec", "status": { "name": "진행 중" } } }
            ]
        });
        let response: JiraSearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.issues.len(), 2);
        assert_eq!(response.issues[1].fields.status.name, "진행 중");
    }

    #[test]
    fn test_parse_gitlab_commits_payload() {
        let payload = r#"[
            {"id": "a1b2", "title": "Merge branch 'feature' into 'main'", "author_name": "kim"},
            {"id": "c3d4", "title": "[BUGFIX] fix login", "created_at": "2024-05-02T09:00:00.000+09:00"}
        ]"#;
        let commits: Vec<GitLabCommit> = serde_json::from_str(payload).unwrap();
        assert!(commits[0].is_branch_merge());
        assert!(!commits[1].is_branch_merge());
        assert_eq!(commits[1].title, "[BUGFIX] fix login");
    }
}
