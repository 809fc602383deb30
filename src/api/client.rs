//! RedGifs API HTTP client.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response, StatusCode};
use tokio::sync::RwLock;

use crate::api::provider::{DownloadBody, MediaApi};
use crate::api::types::*;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// RedGifs API client holding the HTTP session and temporary token.
pub struct RedGifsApi {
    client: Client,
    base_url: String,
    user_agent: String,
    page_size: u32,
    order: String,
    token: RwLock<Option<String>>,
}

impl RedGifsApi {
    /// Create a new API client. No request is made until [`MediaApi::login`].
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            page_size: config.page_size,
            order: config.order.clone(),
            token: RwLock::new(None),
        })
    }

    /// Whether a token has been obtained.
    pub async fn is_logged_in(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Build the session headers sent with every request.
    async fn build_headers(&self) -> Result<header::HeaderMap> {
        let token = self.token.read().await;
        let token = token.as_deref().ok_or_else(|| {
            Error::Authentication("No session token, login() must be called first".into())
        })?;

        let mut headers = header::HeaderMap::new();
        let bearer = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::Authentication(format!("Malformed token: {}", e)))?;
        headers.insert(header::AUTHORIZATION, bearer);
        if let Ok(agent) = header::HeaderValue::from_str(&self.user_agent) {
            headers.insert(header::USER_AGENT, agent);
        }
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_static("https://www.redgifs.com/"),
        );

        Ok(headers)
    }

    /// Make an authenticated GET request against the API.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers().await?;

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                describe_error_body(&body).unwrap_or_else(|| "Authentication failed".into())
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl MediaApi for RedGifsApi {
    async fn login(&self) -> Result<()> {
        let url = format!("{}/v2/auth/temporary", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Authentication(format!("Could not reach RedGifs: {}", e)))?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                describe_error_body(&text).unwrap_or(text)
            )));
        }

        let token: TemporaryToken = serde_json::from_str(&text).map_err(|e| {
            Error::Authentication(format!("Failed to parse token: {} - Response: {}", e, text))
        })?;

        *self.token.write().await = Some(token.token);
        tracing::debug!("Obtained temporary token");
        Ok(())
    }

    async fn get_gif(&self, id: &str) -> Result<GifInfo> {
        let path = format!("/v2/gifs/{}", id.to_lowercase());
        let response = self
            .get(&path, &[("views", "yes".into()), ("users", "yes".into())])
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("GIF response: {}", text);

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(Error::AssetNotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        let gif_response: GifResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!("Failed to parse GIF: {} - Response: {}", e, text))
        })?;

        Ok(gif_response.gif)
    }

    async fn search_creator(&self, username: &str, page: u32) -> Result<CreatorResponse> {
        let path = format!("/v2/users/{}/search", username.to_lowercase());
        let query = [
            ("order", self.order.clone()),
            ("count", self.page_size.to_string()),
            ("page", page.to_string()),
        ];

        let response = self.get(&path, &query).await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Creator page {} response length: {} bytes", page, text.len());

        if status == StatusCode::NOT_FOUND {
            return Err(Error::CreatorNotFound(username.to_string()));
        }
        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse creator page: {} - Response: {}",
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    async fn download(&self, url: &str) -> Result<DownloadBody> {
        let headers = self.build_headers().await?;
        let response = self.client.get(url).headers(headers).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        let content_length = response.content_length();
        let chunks = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| Error::Download(format!("Stream error: {}", e)))
            })
            .boxed();

        Ok(DownloadBody {
            content_length,
            chunks,
        })
    }
}

/// Build an [`Error::Api`] from a non-success response.
fn api_error(status: StatusCode, body: &str) -> Error {
    let detail = describe_error_body(body).unwrap_or_else(|| body.chars().take(200).collect());
    Error::Api(format!("HTTP {}: {}", status, detail))
}

/// Pull `code: message` out of a RedGifs error body.
fn describe_error_body(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.error.code, parsed.error.message) {
        (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
        (Some(code), None) => Some(code),
        (None, Some(message)) => Some(message),
        (None, None) => None,
    }
}
