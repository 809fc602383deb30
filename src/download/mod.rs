//! Download module for content downloading.
//!
//! This module provides:
//! - Single post resolution
//! - Lazy creator pagination
//! - Sequential batch downloading with per-item failure tolerance
//! - Outcome and tally tracking

pub mod batch;
pub mod outcome;
pub mod paginator;
pub mod resolver;

pub use batch::{BatchDownloader, CHUNK_SIZE};
pub use outcome::{BatchReport, DownloadOutcome, RunSummary};
pub use paginator::CreatorPaginator;
pub use resolver::resolve;
