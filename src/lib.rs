pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangeCategory, Changelog, ChangelogConfig, ChangelogEntry, ChangelogReport, escape_latex,
    generate_latex_changelog, parse_changelog, parse_changelog_str,
};
pub use utils::config::{DocstampConfig, PathsConfig};
pub use utils::latex::{BuildConfig, BuildOutcome, LatexBuilder};
pub use utils::metadata::{Placeholder, apply_version_info, read_current_version};
pub use utils::pipeline::{DocumentPipeline, RunSummary};
pub use utils::version::{
    VersionInfo, format_date_german, generate_version_from_date, translate_month,
};
