// version and date metadata derived from a release date

pub mod dates;
pub mod types;

pub use dates::{format_date_german, generate_version_from_date, translate_month, version_for_date};
pub use types::VersionInfo;
