// metadata template rewriter

use super::placeholder::Placeholder;
use crate::error::{Error, Result};
use crate::utils::fs_ops;
use crate::utils::version::VersionInfo;
use log::{debug, info};
use regex::Captures;
use std::path::Path;

/// replace the value of every known placeholder, leaving all other text untouched
///
/// placeholders that are absent from `content` are skipped
pub fn apply_version_info(content: &str, info: &VersionInfo) -> String {
    let mut updated = content.to_string();

    for placeholder in Placeholder::ALL {
        let value = placeholder.value_from(info);
        let pattern = placeholder.pattern();

        if !pattern.is_match(&updated) {
            debug!("{} not present, leaving template as is", placeholder);
            continue;
        }

        updated = pattern
            .replace_all(&updated, |caps: &Captures<'_>| {
                format!("{}{}{}", &caps[1], value, &caps[3])
            })
            .into_owned();
    }

    updated
}

/// extract the `\DocumentVersion` value from template text
pub fn read_current_version(content: &str) -> Result<String> {
    Placeholder::DocumentVersion
        .pattern()
        .captures(content)
        .map(|caps| caps[2].to_string())
        .ok_or(Error::PlaceholderNotFound {
            name: Placeholder::DocumentVersion.macro_name(),
            path: None,
        })
}

/// read the current version from a metadata file
pub fn current_version<P: AsRef<Path>>(metadata_path: P) -> Result<String> {
    let path = metadata_path.as_ref();
    let content = fs_ops::read_text(path)?;

    read_current_version(&content).map_err(|e| match e {
        Error::PlaceholderNotFound { name, .. } => Error::PlaceholderNotFound {
            name,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

/// rewrite the metadata file in place
pub fn update_metadata_file<P: AsRef<Path>>(metadata_path: P, info: &VersionInfo) -> Result<()> {
    let path = metadata_path.as_ref();
    let content = fs_ops::read_text(path)?;
    let updated = apply_version_info(&content, info);

    fs_ops::write_text(path, &updated)?;
    info!("updated version to {} in {}", info.version, path.display());
    Ok(())
}
