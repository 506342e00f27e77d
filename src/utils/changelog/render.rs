// LaTeX rendering of the changelog table

use super::config::ChangelogConfig;
use super::types::ChangelogEntry;
use crate::error::Result;
use crate::utils::fs_ops;
use log::debug;
use std::path::Path;

const LATEX_HEADER: [&str; 12] = [
    r"\section{Anhang – Changelog und Versionsverlauf}",
    r"\label{sec:anhang-changelog}",
    "",
    r"\subsection*{Versionshistorie}",
    "",
    r"\small",
    r"\begin{longtable}{p{3cm} >{\raggedright\arraybackslash}p{10cm}}",
    r"  \toprule",
    r"  \textbf{Version} & \textbf{Änderungen} \\",
    r"  \midrule",
    r"  \endhead",
    "",
];

const LATEX_FOOTER: [&str; 3] = [r"  \bottomrule", r"\end{longtable}", ""];

const PLACEHOLDER_ROW: &str = r"  & \\[1cm]";

const NO_CHANGES: &str = "Keine Änderungen dokumentiert";

/// escape LaTeX special characters in one pass over the input
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '_' | '#' | '$' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// one-line summary shown in the right-hand cell
pub fn summarize_entry(entry: &ChangelogEntry, config: &ChangelogConfig) -> String {
    let total = entry.total_changes();

    if let Some(note) = config.release_note_for(&entry.version, total) {
        return note;
    }

    match entry.first_category() {
        Some(category) => format!("{}: {} Änderungen", category.name, total),
        None => NO_CHANGES.to_string(),
    }
}

/// render the changelog fragment included by the main document
pub fn generate_latex_changelog(entries: &[ChangelogEntry], config: &ChangelogConfig) -> String {
    let mut lines: Vec<String> = LATEX_HEADER.iter().map(|l| l.to_string()).collect();

    for entry in entries.iter().take(config.max_entries) {
        debug!("rendering {} ({})", entry.version, entry.date);
        let summary = summarize_entry(entry, config);
        lines.push(format!(
            r"  {} & {} \\",
            escape_latex(&entry.version),
            escape_latex(&summary)
        ));
        lines.push(String::new());
    }

    for _ in 0..config.placeholder_rows {
        lines.push(PLACEHOLDER_ROW.to_string());
        lines.push(String::new());
    }

    lines.extend(LATEX_FOOTER.iter().map(|l| l.to_string()));
    lines.join("\n")
}

/// overwrite the fragment file, creating its directory if needed
pub fn write_changelog_fragment<P: AsRef<Path>>(output_path: P, content: &str) -> Result<()> {
    fs_ops::write_text(output_path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(version: &str, categories: &[(&str, usize)]) -> ChangelogEntry {
        let mut entry = ChangelogEntry::new(version, "2025-10-01");
        for (name, count) in categories {
            entry.start_category(name);
            for i in 0..*count {
                entry.add_item(name, format!("item {}", i));
            }
        }
        entry
    }

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("Test & Co."), r"Test \& Co.");
        assert_eq!(escape_latex("50% done"), r"50\% done");
        assert_eq!(escape_latex("Price: $100"), r"Price: \$100");
        assert_eq!(escape_latex("a_b #1 {x}"), r"a\_b \#1 \{x\}");
    }

    #[test]
    fn test_escape_latex_single_pass() {
        // the braces introduced by the tilde escape must not be escaped again
        assert_eq!(escape_latex("~"), r"\textasciitilde{}");
        assert_eq!(escape_latex("x^2"), r"x\textasciicircum{}2");
        assert_eq!(escape_latex("{~}"), r"\{\textasciitilde{}\}");
    }

    #[test]
    fn test_escape_latex_plain_text_unchanged() {
        let plain = "Passwortrichtlinie überarbeitet (v2)";
        assert_eq!(escape_latex(plain), plain);
        assert_eq!(escape_latex(&escape_latex(plain)), plain);
    }

    #[test]
    fn test_summary_rules() {
        let config = ChangelogConfig::default();

        assert_eq!(
            summarize_entry(&entry("2025.10.01", &[("Changed", 2), ("Fixed", 3)]), &config),
            "Changed: 5 Änderungen"
        );
        assert_eq!(
            summarize_entry(&entry("2025.10.02", &[]), &config),
            "Keine Änderungen dokumentiert"
        );

        let initial = summarize_entry(&entry("2025.09.01", &[("Added", 4), ("Security", 2)]), &config);
        assert!(initial.starts_with("Initial Release"));
        assert!(initial.contains("mit 6 implementierten"));
    }

    #[test]
    fn test_render_empty_table() {
        let output = generate_latex_changelog(&[], &ChangelogConfig::default());

        let mut expected: Vec<String> = LATEX_HEADER.iter().map(|l| l.to_string()).collect();
        for _ in 0..5 {
            expected.push(PLACEHOLDER_ROW.to_string());
            expected.push(String::new());
        }
        expected.extend(LATEX_FOOTER.iter().map(|l| l.to_string()));

        assert_eq!(output, expected.join("\n"));
        assert!(output.ends_with("\\end{longtable}\n"));
    }

    #[test]
    fn test_render_rows() {
        let entries = vec![
            entry("2025.10.15", &[("R&D", 1)]),
            entry("2025.09.01", &[("Added", 2)]),
        ];
        let output = generate_latex_changelog(&entries, &ChangelogConfig::default());

        let first_row = output.find(r"  2025.10.15 & R\&D: 1 Änderungen \\").unwrap();
        let second_row = output.find(r"  2025.09.01 & Initial Release").unwrap();
        let first_placeholder = output.find(PLACEHOLDER_ROW).unwrap();
        assert!(first_row < second_row);
        assert!(second_row < first_placeholder);
        assert_eq!(output.matches(PLACEHOLDER_ROW).count(), 5);
    }

    #[test]
    fn test_render_respects_max_entries() {
        let entries: Vec<ChangelogEntry> = (1..=12)
            .map(|i| entry(&format!("2025.01.{:02}", i), &[("Changed", 1)]))
            .collect();

        let output = generate_latex_changelog(&entries, &ChangelogConfig::default());
        assert!(output.contains("2025.01.10 &"));
        assert!(!output.contains("2025.01.11 &"));

        let config = ChangelogConfig::default().max_entries(2).placeholder_rows(1);
        let output = generate_latex_changelog(&entries, &config);
        assert!(output.contains("2025.01.01 &"));
        assert!(output.contains("2025.01.02 &"));
        assert!(!output.contains("2025.01.03 &"));
        assert_eq!(output.matches(PLACEHOLDER_ROW).count(), 1);
    }
}
