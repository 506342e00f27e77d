// changelog parser

use super::types::{Changelog, ChangelogEntry};
use crate::error::Result;
use crate::utils::fs_ops;
use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static VERSION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## \[([^\]]+)\] - (\d{4}-\d{2}-\d{2})").expect("version header pattern is valid")
});

/// split a `## [VERSION] - YYYY-MM-DD` heading into version and date
fn extract_version_header(line: &str) -> Option<(&str, &str)> {
    let caps = VERSION_HEADER.captures(line)?;
    let version = caps.get(1)?.as_str();
    let date = caps.get(2)?.as_str();
    Some((version, date))
}

/// parse a changelog file
pub fn parse_changelog<P: AsRef<Path>>(path: P) -> Result<Changelog> {
    let content = fs_ops::read_text(path)?;
    Ok(parse_changelog_str(&content))
}

/// parse changelog text
///
/// unrecognised lines are skipped, as are bullets that precede the first
/// category heading of their section
pub fn parse_changelog_str(content: &str) -> Changelog {
    let mut changelog = Changelog::new();
    let mut current_entry: Option<ChangelogEntry> = None;
    let mut current_category: Option<String> = None;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some((version, date)) = extract_version_header(trimmed) {
            if let Some(prev) = current_entry.take() {
                changelog.add_entry(prev);
            }
            current_entry = Some(ChangelogEntry::new(version, date));
            current_category = None;
            continue;
        }

        let Some(entry) = current_entry.as_mut() else {
            // preamble before the first version
            continue;
        };

        if let Some(name) = trimmed.strip_prefix("### ") {
            let name = name.trim();
            entry.start_category(name);
            current_category = Some(name.to_string());
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ") {
            match current_category {
                Some(ref category) => entry.add_item(category, item.trim()),
                None => debug!(
                    "line {}: bullet outside of a category in {}, dropped",
                    index + 1,
                    entry.version
                ),
            }
        }
    }

    if let Some(entry) = current_entry {
        changelog.add_entry(entry);
    }

    changelog
}
