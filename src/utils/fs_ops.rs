// file helpers shared by the pipeline stages

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// read a utf-8 text file, reporting a missing file as `FileNotFound`
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|e| Error::from_read(path, e))
}

/// overwrite a text file, creating parent directories first
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    debug!("writing {} ({} bytes)", path.display(), content.len());
    fs::write(path, content).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::FileWriteError {
                path: parent.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
