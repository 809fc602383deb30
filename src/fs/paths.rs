//! Destination folder handling.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Full path an asset is written to.
///
/// Without a folder the file goes to the current working directory.
pub fn destination_path(folder: Option<&Path>, file_name: &str) -> PathBuf {
    match folder {
        Some(folder) => folder.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Check that the destination folder exists. Folders are never created.
pub fn ensure_destination(folder: Option<&Path>) -> Result<()> {
    match folder {
        Some(folder) if !folder.is_dir() => {
            Err(Error::DestinationFolderMissing(folder.to_path_buf()))
        }
        _ => Ok(()),
    }
}
