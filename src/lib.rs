//! RedGifs Downloader - resolve RedGifs links to video files and download them.
//!
//! This library provides functionality for downloading videos from RedGifs.
//!
//! # Features
//!
//! - Download single posts (`/watch/<id>`)
//! - Download a creator's whole catalog (`/users/<username>`), page by page
//! - Process newline-delimited link lists
//! - Per-item failure tolerance within a batch
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use redgifs_downloader::{Config, Dispatcher, MediaApi, RedGifsApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = RedGifsApi::new(&config.api)?;
//!     api.login().await?;
//!
//!     let dispatcher = Dispatcher::new(&api, Some(Path::new("videos")), true);
//!     let report = dispatcher
//!         .dispatch("https://www.redgifs.com/users/someone")
//!         .await?;
//!     println!("{} downloaded", report.succeeded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{MediaApi, RedGifsApi};
pub use config::Config;
pub use dispatch::{classify, Dispatcher, LinkKind};
pub use download::{
    resolve, BatchDownloader, BatchReport, CreatorPaginator, DownloadOutcome, RunSummary,
};
pub use error::{Error, Result};
pub use media::AssetReference;
