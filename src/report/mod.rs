// src/report/mod.rs
pub mod composer;
pub mod extractor;
pub mod merge;
pub mod team;

// Re-export key report types for convenience
#[allow(unused_imports)]
pub use composer::{ComposeOptions, ReportLabels, TeamBlock};
#[allow(unused_imports)]
pub use extractor::SectionMatch;
#[allow(unused_imports)]
pub use merge::{merge, CombinedReport};
#[allow(unused_imports)]
pub use team::{TeamId, TeamRoster};
