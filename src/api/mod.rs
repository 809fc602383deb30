//! RedGifs API module.
//!
//! This module provides:
//! - The `MediaApi` trait the download logic is written against
//! - HTTP client for the RedGifs v2 REST API
//! - API response types

pub mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod provider;
pub mod types;

pub use client::RedGifsApi;
pub use provider::{ByteStream, DownloadBody, MediaApi};
pub use types::*;
