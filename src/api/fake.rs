//! In-memory `MediaApi` used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::api::provider::{DownloadBody, MediaApi};
use crate::api::types::{CreatorResponse, GifInfo, MediaUrls};
use crate::error::{Error, Result};

/// Media URL the fake hands out for a GIF id.
pub fn media_url(id: &str) -> String {
    format!("https://media.redgifs.com/{}.mp4?expires=1", id)
}

/// A GIF record with only an id and an hd URL.
pub fn gif(id: &str) -> GifInfo {
    GifInfo {
        id: id.to_string(),
        create_date: 0,
        has_audio: false,
        width: 0,
        height: 0,
        likes: 0,
        views: None,
        duration: None,
        tags: Vec::new(),
        published: true,
        urls: MediaUrls {
            hd: Some(media_url(id)),
            ..MediaUrls::default()
        },
        user_name: None,
    }
}

#[derive(Default)]
pub struct FakeApi {
    gifs: HashMap<String, GifInfo>,
    creators: HashMap<String, Vec<Vec<GifInfo>>>,
    failing_urls: HashSet<String>,
    broken_pages: HashSet<u32>,
    pub gif_lookups: Mutex<Vec<String>>,
    pub page_fetches: Mutex<Vec<(String, u32)>>,
    pub downloads: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gif(mut self, id: &str) -> Self {
        self.gifs.insert(id.to_string(), gif(id));
        self
    }

    pub fn with_record(mut self, record: GifInfo) -> Self {
        self.gifs.insert(record.id.clone(), record);
        self
    }

    /// Register a creator whose catalog is split into the given pages.
    pub fn with_creator(mut self, username: &str, pages: &[&[&str]]) -> Self {
        let pages: Vec<Vec<GifInfo>> = pages
            .iter()
            .map(|ids| ids.iter().map(|id| gif(id)).collect())
            .collect();
        self.creators.insert(username.to_string(), pages);
        self
    }

    /// Make downloads of this GIF fail before any byte arrives.
    pub fn failing(mut self, id: &str) -> Self {
        self.failing_urls.insert(media_url(id));
        self
    }

    /// Make fetching this page number fail.
    pub fn broken_page(mut self, page: u32) -> Self {
        self.broken_pages.insert(page);
        self
    }

    pub fn page_fetch_count(&self) -> usize {
        self.page_fetches.lock().unwrap().len()
    }

    pub fn download_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaApi for FakeApi {
    async fn login(&self) -> Result<()> {
        Ok(())
    }

    async fn get_gif(&self, id: &str) -> Result<GifInfo> {
        self.gif_lookups.lock().unwrap().push(id.to_string());
        self.gifs
            .get(id)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound(id.to_string()))
    }

    async fn search_creator(&self, username: &str, page: u32) -> Result<CreatorResponse> {
        self.page_fetches
            .lock()
            .unwrap()
            .push((username.to_string(), page));

        if self.broken_pages.contains(&page) {
            return Err(Error::Api(format!("HTTP 500 on page {}", page)));
        }

        let pages = self
            .creators
            .get(username)
            .ok_or_else(|| Error::CreatorNotFound(username.to_string()))?;
        let total: u64 = pages.iter().map(|p| p.len() as u64).sum();
        let gifs = pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();

        Ok(CreatorResponse {
            page,
            pages: pages.len() as u32,
            total,
            gifs,
        })
    }

    async fn download(&self, url: &str) -> Result<DownloadBody> {
        self.downloads.lock().unwrap().push(url.to_string());
        if self.failing_urls.contains(url) {
            return Err(Error::Download("simulated network error".into()));
        }

        let body = url.as_bytes().to_vec();
        let (head, tail) = body.split_at(body.len() / 2);
        let chunks = vec![Ok(head.to_vec()), Ok(Vec::new()), Ok(tail.to_vec())];

        Ok(DownloadBody {
            content_length: Some(body.len() as u64),
            chunks: stream::iter(chunks).boxed(),
        })
    }
}
