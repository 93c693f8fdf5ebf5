// src/storage/mod.rs
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::utils::error::StorageError;

/// The two upstream documents consumed by the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Jira,
    Git,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Jira => f.write_str("Jira"),
            SourceKind::Git => f.write_str("Git"),
        }
    }
}

/// Directories holding the per-source documents and the combined report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub jira_dir: PathBuf,
    pub git_dir: PathBuf,
    pub report_dir: PathBuf,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            jira_dir: PathBuf::from("./daily-jira"),
            git_dir: PathBuf::from("./daily-git"),
            report_dir: PathBuf::from("./daily-report"),
        }
    }
}

/// The three date-stamped file paths of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub jira: PathBuf,
    pub git: PathBuf,
    pub combined: PathBuf,
}

impl ReportPaths {
    pub fn for_date(layout: &StorageLayout, date: NaiveDate) -> Self {
        let stamp = date.format("%Y-%m-%d");
        Self {
            jira: layout.jira_dir.join(format!("일일보고서용-Jira-{}.md", stamp)),
            git: layout.git_dir.join(format!("일일보고서용-Git-{}.md", stamp)),
            combined: layout.report_dir.join(format!("일일보고서-{}.md", stamp)),
        }
    }

    pub fn source(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Jira => &self.jira,
            SourceKind::Git => &self.git,
        }
    }
}

pub struct StorageManager {
    layout: StorageLayout,
}

impl StorageManager {
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    pub fn paths_for(&self, date: NaiveDate) -> ReportPaths {
        ReportPaths::for_date(&self.layout, date)
    }

    /// Reads one upstream document. An absent file is reported as
    /// `MissingInput`, never treated as an empty document.
    pub fn read_source(&self, kind: SourceKind, paths: &ReportPaths) -> Result<String, StorageError> {
        let path = paths.source(kind);
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("Read {} document {} ({} bytes)", kind, path.display(), content.len());
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::MissingInput {
                kind,
                path: path.to_path_buf(),
            }),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    /// Writes a document, creating its directory if needed and replacing any
    /// previous file at the same path.
    pub fn write_document(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        fs::write(path, content).map_err(StorageError::IoError)?;

        tracing::info!("Saved {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}
