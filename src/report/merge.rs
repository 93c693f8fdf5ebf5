// src/report/merge.rs
use std::fmt;

use crate::report::composer::{compose, ComposeOptions, TeamBlock};
use crate::report::extractor::extract;
use crate::report::team::TeamRoster;

/// The merged per-team report for one day, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombinedReport {
    blocks: Vec<TeamBlock>,
}

impl CombinedReport {
    pub fn blocks(&self) -> &[TeamBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Renders the document text written to storage.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push('\n');
            out.push_str(&block.to_string());
        }
        out.trim().to_string()
    }
}

impl fmt::Display for CombinedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Merges the Jira and Git documents into one report, one block per team
/// that appears in either document, ordered by the roster.
pub fn merge(jira_doc: &str, git_doc: &str, teams: &TeamRoster, options: &ComposeOptions) -> CombinedReport {
    let blocks: Vec<TeamBlock> = teams
        .iter()
        .filter_map(|team| {
            let jira = extract(jira_doc, team);
            let git = extract(git_doc, team);
            tracing::debug!(
                "Team {}: jira section {}, git section {}",
                team,
                if jira.is_found() { "found" } else { "missing" },
                if git.is_found() { "found" } else { "missing" }
            );
            compose(team, jira, git, options)
        })
        .collect();

    tracing::info!("Merged report covers {} of {} teams", blocks.len(), teams.len());
    CombinedReport { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JIRA_DOC: &str = "# 2024. 5. 2. 작업 내역\n\n## PROJWXYZ\n- Update docs\n\n## PROJABCD\n- Fix login\n";
    const GIT_DOC: &str = "# 2024. 5. 2. 커밋 내역\n\n## /web/front-ABCD\n- [BUGFIX] fix login\n\n## /api/core-WXYZ\n- [\n\n";

    fn roster(keys: &str) -> TeamRoster {
        TeamRoster::from_keys(keys.split(','))
    }

    #[test]
    fn test_output_follows_roster_order() {
        let report = merge(JIRA_DOC, GIT_DOC, &roster("PROJABCD,PROJWXYZ"), &ComposeOptions::default());
        let order: Vec<&str> = report.blocks().iter().map(|b| b.team.as_str()).collect();
        assert_eq!(order, vec!["ABCD", "WXYZ"]);

        let reversed = merge(JIRA_DOC, GIT_DOC, &roster("PROJWXYZ,PROJABCD"), &ComposeOptions::default());
        let order: Vec<&str> = reversed.blocks().iter().map(|b| b.team.as_str()).collect();
        assert_eq!(order, vec!["WXYZ", "ABCD"]);
    }

    #[test]
    fn test_full_document_rendering() {
        let report = merge(JIRA_DOC, GIT_DOC, &roster("PROJABCD,PROJWXYZ"), &ComposeOptions::default());
        let expected = "## ABCD팀\n\n\
                        ### Jira 완료된 이슈\n- Fix login\n\n\
                        ### Git 커밋 내역\n- [BUGFIX] fix login\n\n\n\
                        ## WXYZ팀\n\n\
                        ### Jira 완료된 이슈\n- Update docs";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_team_missing_everywhere_is_omitted() {
        let report = merge(JIRA_DOC, GIT_DOC, &roster("PROJABCD,NONE,PROJWXYZ"), &ComposeOptions::default());
        assert_eq!(report.blocks().len(), 2);
        assert!(!report.render().contains("NONE"));
    }

    #[test]
    fn test_jira_only_team_has_only_issue_block() {
        let jira = "## ABCD\n- Ship release\n";
        let report = merge(jira, "# 커밋 내역\n", &roster("ABCD"), &ComposeOptions::default());
        assert_eq!(report.render(), "## ABCD팀\n\n### Jira 완료된 이슈\n- Ship release");
    }

    #[test]
    fn test_no_matches_renders_empty_string() {
        let report = merge(JIRA_DOC, GIT_DOC, &roster("AAAA,BBBB"), &ComposeOptions::default());
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
        assert_eq!(merge("", "", &TeamRoster::default(), &ComposeOptions::default()).render(), "");
    }

    #[test]
    fn test_merge_is_deterministic() {
        let teams = roster("PROJABCD,PROJWXYZ");
        let first = merge(JIRA_DOC, GIT_DOC, &teams, &ComposeOptions::default()).render();
        let second = merge(JIRA_DOC, GIT_DOC, &teams, &ComposeOptions::default()).render();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
