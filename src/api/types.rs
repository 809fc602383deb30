//! API response type definitions.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// Response of `/v2/auth/temporary`.
#[derive(Debug, Deserialize)]
pub struct TemporaryToken {
    pub token: String,
}

/// Wrapper for the single GIF endpoint.
#[derive(Debug, Deserialize)]
pub struct GifResponse {
    pub gif: GifInfo,
}

/// A single GIF (video) record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifInfo {
    pub id: String,
    #[serde(default)]
    pub create_date: i64,
    #[serde(default)]
    pub has_audio: bool,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub likes: u64,
    pub views: Option<u64>,
    pub duration: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub urls: MediaUrls,
    pub user_name: Option<String>,
}

impl GifInfo {
    /// Creation time, if the API reported one.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if self.create_date <= 0 {
            return None;
        }
        Utc.timestamp_opt(self.create_date, 0).single()
    }

    /// Best quality video URL available for this GIF.
    pub fn best_url(&self) -> Option<&str> {
        self.urls.hd.as_deref().or(self.urls.sd.as_deref())
    }
}

/// Media URLs of a GIF.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaUrls {
    pub sd: Option<String>,
    pub hd: Option<String>,
    pub poster: Option<String>,
    pub thumbnail: Option<String>,
    pub vthumbnail: Option<String>,
}

/// One page of a creator search.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatorResponse {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    #[serde(default)]
    pub gifs: Vec<GifInfo>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// Error details.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
}
