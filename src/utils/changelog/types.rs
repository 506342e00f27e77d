// changelog data structures

use serde::{Deserialize, Serialize};

/// bullet items listed under one `### Category` heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCategory {
    pub name: String,
    pub items: Vec<String>,
}

impl ChangeCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }
}

/// represents a single version section in the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    /// ISO date as written in the heading (`YYYY-MM-DD`)
    pub date: String,
    /// categories in source order
    pub changes: Vec<ChangeCategory>,
}

impl ChangelogEntry {
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            changes: Vec::new(),
        }
    }

    /// open a category, restarting its item list if it was already declared
    pub fn start_category(&mut self, name: &str) {
        match self.changes.iter_mut().position(|c| c.name == name) {
            Some(index) => self.changes[index].items.clear(),
            None => self.changes.push(ChangeCategory::new(name)),
        }
    }

    /// append an item to the named category if it exists
    pub fn add_item(&mut self, category: &str, item: impl Into<String>) {
        if let Some(cat) = self.changes.iter_mut().find(|c| c.name == category) {
            cat.items.push(item.into());
        }
    }

    pub fn category(&self, name: &str) -> Option<&ChangeCategory> {
        self.changes.iter().find(|c| c.name == name)
    }

    pub fn first_category(&self) -> Option<&ChangeCategory> {
        self.changes.first()
    }

    /// number of bullet items across all categories
    pub fn total_changes(&self) -> usize {
        self.changes.iter().map(|c| c.items.len()).sum()
    }
}

/// parsed changelog, entries in the order they appear in the file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    pub entries: Vec<ChangelogEntry>,
}

impl Changelog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: ChangelogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// first entry in the file, which is the newest by convention
    pub fn latest(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }

    pub fn get_version(&self, version: &str) -> Option<&ChangelogEntry> {
        self.entries.iter().find(|e| e.version == version)
    }
}

/// result of regenerating the changelog fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogReport {
    pub output_path: std::path::PathBuf,
    pub entry_count: usize,
    pub rendered_count: usize,
}
