// changelog rendering configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// placeholder inside a release note that receives the total item count
pub const CHANGE_COUNT_TOKEN: &str = "{changes}";

/// configuration for the generated changelog table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// maximum number of versions rendered into the table (default: 10)
    pub max_entries: usize,

    /// empty rows appended for manual entries (default: 5)
    pub placeholder_rows: usize,

    /// fixed summaries for specific versions, `{changes}` is replaced by the item count
    pub release_notes: BTreeMap<String, String>,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    pub fn placeholder_rows(mut self, rows: usize) -> Self {
        self.placeholder_rows = rows;
        self
    }

    pub fn release_note(mut self, version: impl Into<String>, note: impl Into<String>) -> Self {
        self.release_notes.insert(version.into(), note.into());
        self
    }

    pub fn without_release_notes(mut self) -> Self {
        self.release_notes.clear();
        self
    }

    /// fixed summary for `version`, if one is configured
    pub fn release_note_for(&self, version: &str, total_changes: usize) -> Option<String> {
        self.release_notes
            .get(version)
            .map(|note| note.replace(CHANGE_COUNT_TOKEN, &total_changes.to_string()))
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let mut release_notes = BTreeMap::new();
        release_notes.insert(
            "2025.09.01".to_string(),
            "Initial Release der vollständigen IT-Sicherheitsdokumentation nach §390 SGB V \
             mit {changes} implementierten Sicherheitsmaßnahmen und Richtlinien"
                .to_string(),
        );

        Self {
            max_entries: 10,
            placeholder_rows: 5,
            release_notes,
        }
    }
}
