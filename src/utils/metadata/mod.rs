// template metadata rewriting

pub mod placeholder;
pub mod rewriter;

pub use placeholder::Placeholder;
pub use rewriter::{apply_version_info, current_version, read_current_version, update_metadata_file};
