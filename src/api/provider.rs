//! The collaborator interface the downloader talks to.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::api::types::{CreatorResponse, GifInfo};
use crate::error::Result;

/// Body chunks of a download.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>>>;

/// An in-flight download.
pub struct DownloadBody {
    /// Size announced by the server, if any.
    pub content_length: Option<u64>,
    pub chunks: ByteStream,
}

/// Operations the dispatcher needs from a RedGifs API client.
///
/// [`RedGifsApi`](crate::api::RedGifsApi) is the HTTP implementation; tests
/// substitute in-memory fakes.
#[async_trait]
pub trait MediaApi: Send + Sync {
    /// Obtain a session token. Must be called once before anything else.
    async fn login(&self) -> Result<()>;

    /// Look up a single GIF by id.
    ///
    /// Returns [`Error::AssetNotFound`](crate::Error::AssetNotFound) when the
    /// id does not exist.
    async fn get_gif(&self, id: &str) -> Result<GifInfo>;

    /// Fetch one page (1-based) of a creator's GIFs.
    ///
    /// Returns [`Error::CreatorNotFound`](crate::Error::CreatorNotFound) when
    /// the username is unknown.
    async fn search_creator(&self, username: &str, page: u32) -> Result<CreatorResponse>;

    /// Start downloading `url`.
    async fn download(&self, url: &str) -> Result<DownloadBody>;
}
