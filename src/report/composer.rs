// src/report/composer.rs
use std::fmt;

use crate::report::extractor::SectionMatch;
use crate::report::team::TeamId;

/// Default minimum number of characters a commit section must have to be reported.
/// Anything shorter is a dangling fragment such as `- [`.
pub const DEFAULT_MIN_COMMIT_CHARS: usize = 4;

/// Fixed text used when rendering a team block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub team_suffix: String,
    pub issues_heading: String,
    pub commits_heading: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            team_suffix: "팀".to_string(),
            issues_heading: "Jira 완료된 이슈".to_string(),
            commits_heading: "Git 커밋 내역".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    pub labels: ReportLabels,
    pub min_commit_chars: usize,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            labels: ReportLabels::default(),
            min_commit_chars: DEFAULT_MIN_COMMIT_CHARS,
        }
    }
}

/// One team's block in the combined report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamBlock {
    pub team: TeamId,
    pub issues: Option<String>,
    pub commits: Option<String>,
    labels: ReportLabels,
}

impl fmt::Display for TeamBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}{}\n\n", self.team, self.labels.team_suffix)?;
        if let Some(issues) = &self.issues {
            write!(f, "### {}\n{}\n\n", self.labels.issues_heading, issues)?;
        }
        if let Some(commits) = &self.commits {
            write!(f, "### {}\n{}\n\n", self.labels.commits_heading, commits)?;
        }
        Ok(())
    }
}

/// Builds the block for one team from its Jira and Git sections.
///
/// Returns `None` only when neither document has a section for the team.
/// A Jira section is always kept, even when empty; a Git section is kept
/// only when it passes the noise guard.
pub fn compose(
    team: &TeamId,
    jira: SectionMatch<'_>,
    git: SectionMatch<'_>,
    options: &ComposeOptions,
) -> Option<TeamBlock> {
    if !jira.is_found() && !git.is_found() {
        return None;
    }

    let issues = jira.into_option().map(|body| body.trim().to_string());

    let commits = git.into_option().map(str::trim).and_then(|body| {
        if body.chars().count() < options.min_commit_chars {
            tracing::debug!("Suppressing near-empty commit section for team {}: {:?}", team, body);
            None
        } else {
            Some(body.to_string())
        }
    });

    Some(TeamBlock {
        team: team.clone(),
        issues,
        commits,
        labels: options.labels.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> TeamId {
        TeamId::from_key("ABCD").unwrap()
    }

    #[test]
    fn test_both_absent_yields_nothing() {
        let block = compose(&abcd(), SectionMatch::NotFound, SectionMatch::NotFound, &ComposeOptions::default());
        assert!(block.is_none());
    }

    #[test]
    fn test_both_present_renders_in_fixed_order() {
        let block = compose(
            &abcd(),
            SectionMatch::Found("- Fix login"),
            SectionMatch::Found("- [BUGFIX] fix login"),
            &ComposeOptions::default(),
        )
        .unwrap();

        assert_eq!(
            block.to_string(),
            "## ABCD팀\n\n### Jira 완료된 이슈\n- Fix login\n\n### Git 커밋 내역\n- [BUGFIX] fix login\n\n"
        );
    }

    #[test]
    fn test_dangling_list_marker_is_suppressed() {
        let block = compose(&abcd(), SectionMatch::NotFound, SectionMatch::Found("  - [ "), &ComposeOptions::default())
            .unwrap();
        assert!(block.commits.is_none());
        assert!(block.issues.is_none());
        assert_eq!(block.to_string(), "## ABCD팀\n\n");
    }

    #[test]
    fn test_empty_jira_section_is_kept() {
        let block = compose(&abcd(), SectionMatch::Found(""), SectionMatch::NotFound, &ComposeOptions::default())
            .unwrap();
        assert_eq!(block.issues.as_deref(), Some(""));
        assert_eq!(block.to_string(), "## ABCD팀\n\n### Jira 완료된 이슈\n\n\n");
    }

    #[test]
    fn test_guard_counts_characters_not_bytes() {
        let options = ComposeOptions::default();
        let block = compose(&abcd(), SectionMatch::NotFound, SectionMatch::Found("- 수"), &options).unwrap();
        assert!(block.commits.is_none());

        let block = compose(&abcd(), SectionMatch::NotFound, SectionMatch::Found("- [ "), &options).unwrap();
        assert!(block.commits.is_none());

        let block = compose(&abcd(), SectionMatch::NotFound, SectionMatch::Found(" - ab\n"), &options).unwrap();
        assert_eq!(block.commits.as_deref(), Some("- ab"));

        let block = compose(&abcd(), SectionMatch::NotFound, SectionMatch::Found("- 버그수정"), &options).unwrap();
        assert_eq!(block.commits.as_deref(), Some("- 버그수정"));
    }

    #[test]
    fn test_custom_labels() {
        let options = ComposeOptions {
            labels: ReportLabels {
                team_suffix: " team".into(),
                issues_heading: "Jira completed issues".into(),
                commits_heading: "Git commit history".into(),
            },
            min_commit_chars: 1,
        };
        let block = compose(&abcd(), SectionMatch::Found("- a"), SectionMatch::Found("x"), &options).unwrap();
        assert_eq!(
            block.to_string(),
            "## ABCD team\n\n### Jira completed issues\n- a\n\n### Git commit history\nx\n\n"
        );
    }
}
