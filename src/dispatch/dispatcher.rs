//! Routing of classified links to the resolver or paginator.

use std::path::Path;

use futures::stream;

use crate::api::MediaApi;
use crate::dispatch::link::{classify, LinkKind};
use crate::download::{resolve, BatchDownloader, BatchReport, CreatorPaginator, RunSummary};
use crate::error::{Error, Result};
use crate::output::{print_error, print_info};

/// Sends each link through resolve or pagination, then downloads the result
/// into one destination folder.
///
/// The API handle must already be logged in.
pub struct Dispatcher<'a, A: MediaApi + ?Sized> {
    api: &'a A,
    downloader: BatchDownloader<'a, A>,
}

impl<'a, A: MediaApi + ?Sized> Dispatcher<'a, A> {
    pub fn new(api: &'a A, folder: Option<&'a Path>, show_progress: bool) -> Self {
        Self {
            api,
            downloader: BatchDownloader::new(api, folder, show_progress),
        }
    }

    /// Download everything `url` points at.
    ///
    /// Links to other RedGifs pages do nothing and return an empty report.
    pub async fn dispatch(&self, url: &str) -> Result<BatchReport> {
        match classify(url)? {
            LinkKind::SinglePost(id) => {
                let asset = resolve(self.api, &id).await?;
                print_info(&format!("Downloading {}...", id));
                self.downloader
                    .download_all(stream::iter([Ok(asset)]), 1, &format!("\"{}\"", id))
                    .await
            }
            LinkKind::CreatorListing(username) => {
                let pages = CreatorPaginator::start(self.api, &username).await?;
                let total = pages.total();
                print_info(&format!(
                    "Found {} GIFs from \"{}\" across {} page(s)",
                    total,
                    username,
                    pages.total_pages()
                ));
                self.downloader
                    .download_all(pages.into_stream(), total, &format!("\"{}\"", username))
                    .await
            }
            LinkKind::Unrecognized => {
                tracing::debug!("Nothing to download at {}", url.trim());
                Ok(BatchReport::default())
            }
        }
    }

    /// Dispatch every link in order.
    ///
    /// A link that fails is reported and skipped. Fatal errors (missing
    /// destination folder, lost authentication) stop the whole list.
    pub async fn dispatch_list<I, S>(&self, urls: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RunSummary::default();

        for url in urls {
            let url = url.as_ref().trim();
            if url.is_empty() {
                continue;
            }

            match self.dispatch(url).await {
                Ok(report) => summary.add_report(&report),
                Err(e) if e.is_fatal() => return Err(e),
                Err(Error::BatchInterrupted { report, source }) => {
                    print_error(&format!("Stopped early on {}: {}", url, source));
                    summary.add_interrupted(&report);
                }
                Err(e) => {
                    print_error(&format!("Skipping {}: {}", url, e));
                    summary.mark_url_failed();
                }
            }
        }

        Ok(summary)
    }
}
