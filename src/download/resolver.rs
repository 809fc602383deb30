//! Single post resolution.

use crate::api::MediaApi;
use crate::error::{Error, Result};
use crate::media::AssetReference;

/// Resolve a GIF id to the direct URL of its best quality video.
pub async fn resolve<A: MediaApi + ?Sized>(api: &A, post_id: &str) -> Result<AssetReference> {
    let gif = api.get_gif(post_id).await?;
    tracing::debug!(
        "Resolved {} (created {:?}, {}x{})",
        gif.id,
        gif.created_at(),
        gif.width,
        gif.height
    );

    AssetReference::from_gif(&gif)
        .ok_or_else(|| Error::AssetNotFound(format!("{} has no downloadable video", post_id)))
}
