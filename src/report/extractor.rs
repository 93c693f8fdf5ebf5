// src/report/extractor.rs

// --- Imports ---
use crate::report::team::TeamId;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
/// Heading level that introduces one team's section in a source document.
pub const TEAM_HEADING_LEVEL: usize = 2;

// Captures the marker run and the heading text of an ATX heading line.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#{1,6})[ \t]+(.*?)\s*$").expect("Failed to compile HEADING_RE")
});

// --- Data Structures ---

/// Result of looking up one team's section in a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMatch<'a> {
    /// The trimmed body of the section, heading line excluded. May be empty.
    Found(&'a str),
    /// No heading in the document mentions the team.
    NotFound,
}

impl<'a> SectionMatch<'a> {
    pub fn into_option(self) -> Option<&'a str> {
        match self {
            SectionMatch::Found(body) => Some(body),
            SectionMatch::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SectionMatch::Found(_))
    }
}

/// Parsed heading line: marker level and text.
#[derive(Debug, PartialEq, Eq)]
struct Heading<'a> {
    level: usize,
    text: &'a str,
}

fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2).map_or("", |m| m.as_str());
    Some(Heading { level, text })
}

/// Locates the first level-2 section whose heading contains `team` and returns its body.
///
/// The body runs until the next level-2 heading or the end of the document.
/// Deeper headings stay inside the body.
pub fn extract<'a>(document: &'a str, team: &TeamId) -> SectionMatch<'a> {
    let mut body_start: Option<usize> = None;
    let mut body_end = document.len();
    let mut offset = 0;

    for line in document.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let content = line.trim_end_matches(['\n', '\r']);
        let Some(heading) = parse_heading(content) else {
            continue;
        };
        if heading.level != TEAM_HEADING_LEVEL {
            continue;
        }

        if body_start.is_some() {
            body_end = line_start;
            break;
        }
        if heading.text.contains(team.as_str()) {
            tracing::trace!("Matched heading '{}' for team {}", heading.text, team);
            body_start = Some(offset);
        }
    }

    match body_start {
        Some(start) => SectionMatch::Found(document[start..body_end].trim()),
        None => SectionMatch::NotFound,
    }
}
