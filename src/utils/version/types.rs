// version data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// version string plus the three dates stamped into the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// `YYYY.MM.DD`
    pub version: String,
    /// e.g. `01. September 2025`
    pub document_date: String,
    /// `DD.MM.YYYY`, release date plus 3×365 days
    pub valid_until: String,
    /// e.g. `August 2027`, release date plus 2×365 days
    pub next_review: String,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version:       {}", self.version)?;
        writeln!(f, "document date: {}", self.document_date)?;
        writeln!(f, "valid until:   {}", self.valid_until)?;
        write!(f, "next review:   {}", self.next_review)
    }
}
