//! Lazy iteration over a creator's paginated catalog.

use std::collections::{HashSet, VecDeque};

use futures::stream::{self, Stream};

use crate::api::{GifInfo, MediaApi};
use crate::error::{Error, Result};
use crate::media::AssetReference;

/// Walks every page of a creator's GIFs, fetching the next page only once
/// the current one has been fully handed out.
///
/// Page 1 is fetched by [`CreatorPaginator::start`]. The page counter only
/// moves forward and iteration ends on the last page reported by that first
/// response, so a paginator always terminates and cannot be restarted.
pub struct CreatorPaginator<'a, A: MediaApi + ?Sized> {
    api: &'a A,
    username: String,
    current_page: u32,
    total_pages: u32,
    total: u64,
    buffer: VecDeque<GifInfo>,
    seen: HashSet<String>,
}

impl<'a, A: MediaApi + ?Sized> CreatorPaginator<'a, A> {
    /// Fetch the first page of `username`'s catalog.
    pub async fn start(api: &'a A, username: &str) -> Result<Self> {
        let first = api.search_creator(username, 1).await?;

        if first.total == 0 || first.gifs.is_empty() {
            return Err(Error::CreatorNotFound(format!(
                "{} (no GIFs found)",
                username
            )));
        }

        tracing::debug!(
            "Creator {}: {} GIFs over {} page(s)",
            username,
            first.total,
            first.pages
        );

        Ok(Self {
            api,
            username: username.to_string(),
            current_page: 1,
            total_pages: first.pages.max(1),
            total: first.total,
            buffer: first.gifs.into(),
            seen: HashSet::new(),
        })
    }

    /// Total number of GIFs the API reported for this creator.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Next asset in page order, or `None` once the last page is drained.
    pub async fn next_asset(&mut self) -> Result<Option<AssetReference>> {
        loop {
            while let Some(gif) = self.buffer.pop_front() {
                if !self.seen.insert(gif.id.clone()) {
                    tracing::debug!("Skipping {} already seen on an earlier page", gif.id);
                    continue;
                }

                match AssetReference::from_gif(&gif) {
                    Some(asset) => return Ok(Some(asset)),
                    None => tracing::warn!("GIF {} has no video URL, skipping", gif.id),
                }
            }

            if self.current_page >= self.total_pages {
                return Ok(None);
            }

            let next_page = self.current_page + 1;
            let page = self.api.search_creator(&self.username, next_page).await?;
            tracing::debug!(
                "Fetched page {}/{} of {} ({} GIFs)",
                next_page,
                self.total_pages,
                self.username,
                page.gifs.len()
            );

            self.current_page = next_page;
            self.buffer = page.gifs.into();
        }
    }

    /// Consume the paginator as a stream of assets.
    pub fn into_stream(self) -> impl Stream<Item = Result<AssetReference>> + 'a {
        stream::try_unfold(self, |mut pages| async move {
            let next = pages.next_asset().await?;
            Ok::<_, Error>(next.map(|asset| (asset, pages)))
        })
    }
}
