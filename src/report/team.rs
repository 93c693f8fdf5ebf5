// src/report/team.rs
use std::fmt;

/// Number of trailing characters of a team key that identify the team in reports.
pub const TEAM_ID_LEN: usize = 4;

/// Short team code used to locate a team's section in both source documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamId(String);

impl TeamId {
    /// Derives the identifier from a raw team key by keeping its last
    /// `TEAM_ID_LEN` characters. Returns `None` for blank keys.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let skip = key.chars().count().saturating_sub(TEAM_ID_LEN);
        Some(Self(key.chars().skip(skip).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of team identifiers. Output order follows this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    teams: Vec<TeamId>,
}

impl TeamRoster {
    /// Builds a roster from raw team keys, keeping configuration order.
    ///
    /// Keys whose identifiers collide with an earlier key are dropped with a
    /// warning, since both would resolve to the same report section.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut teams: Vec<TeamId> = Vec::new();
        let mut origins: Vec<String> = Vec::new();

        for key in keys {
            let key = key.as_ref().trim();
            let Some(id) = TeamId::from_key(key) else {
                continue;
            };
            if let Some(pos) = teams.iter().position(|t| t == &id) {
                tracing::warn!(
                    "Team key '{}' collides with '{}' on identifier '{}'; keeping the first",
                    key,
                    origins[pos],
                    id
                );
                continue;
            }
            teams.push(id);
            origins.push(key.to_string());
        }

        Self { teams }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamId> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_keeps_last_four_chars() {
        assert_eq!(TeamId::from_key("PROJABCD").unwrap().as_str(), "ABCD");
        assert_eq!(TeamId::from_key("  XYZ ").unwrap().as_str(), "XYZ");
        assert_eq!(TeamId::from_key("개발팀코드1").unwrap().as_str(), "팀코드1");
        assert!(TeamId::from_key("   ").is_none());
    }

    #[test]
    fn test_roster_keeps_order_and_drops_collisions() {
        let roster = TeamRoster::from_keys("WEBFRNT,APIBACK,OLDFRNT,,MOBI".split(','));
        let ids: Vec<&str> = roster.iter().map(TeamId::as_str).collect();
        assert_eq!(ids, vec!["FRNT", "BACK", "MOBI"]);
        assert_eq!(roster.len(), 3);
    }
}
