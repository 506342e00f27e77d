// changelog parsing and LaTeX table generation

pub mod config;
pub mod parser;
pub mod render;
pub mod types;

pub use config::ChangelogConfig;
pub use parser::{parse_changelog, parse_changelog_str};
pub use render::{escape_latex, generate_latex_changelog, summarize_entry, write_changelog_fragment};
pub use types::{ChangeCategory, Changelog, ChangelogEntry, ChangelogReport};
