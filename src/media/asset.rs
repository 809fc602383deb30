//! Resolved asset representation.

use crate::api::types::GifInfo;
use crate::error::Result;
use crate::fs::naming::asset_file_name;

/// A GIF id paired with the direct URL of its video file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    /// GIF id.
    pub id: String,

    /// Direct download URL (best available quality).
    pub url: String,
}

impl AssetReference {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Build a reference from a GIF record, picking its best quality URL.
    ///
    /// Returns `None` when the record carries no video URL at all.
    pub fn from_gif(gif: &GifInfo) -> Option<Self> {
        gif.best_url().map(|url| Self::new(gif.id.clone(), url))
    }

    /// Local file name this asset is saved under.
    pub fn file_name(&self) -> Result<String> {
        asset_file_name(&self.url)
    }
}
