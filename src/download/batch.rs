//! Sequential batch downloading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::{pin_mut, Stream, StreamExt};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::api::{ByteStream, MediaApi};
use crate::download::outcome::BatchReport;
use crate::error::{Error, Result};
use crate::fs::{destination_path, ensure_destination};
use crate::media::AssetReference;
use crate::output::{
    create_download_bar, print_batch_summary, print_error, print_success, print_warning,
};

/// Size of the write buffer between the network and the file (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Downloads assets one after another into a single folder.
pub struct BatchDownloader<'a, A: MediaApi + ?Sized> {
    api: &'a A,
    folder: Option<&'a Path>,
    show_progress: bool,
}

impl<'a, A: MediaApi + ?Sized> BatchDownloader<'a, A> {
    /// `folder` of `None` means the current working directory.
    pub fn new(api: &'a A, folder: Option<&'a Path>, show_progress: bool) -> Self {
        Self {
            api,
            folder,
            show_progress,
        }
    }

    /// Download every asset `items` yields, in order.
    ///
    /// Per-item failures are recorded in the report and the batch moves on.
    /// A missing destination folder aborts the batch with
    /// [`Error::DestinationFolderMissing`]. An error yielded by `items`
    /// itself ends the batch with [`Error::BatchInterrupted`], which keeps
    /// the report of what was already downloaded.
    pub async fn download_all<S>(&self, items: S, total: u64, label: &str) -> Result<BatchReport>
    where
        S: Stream<Item = Result<AssetReference>>,
    {
        ensure_destination(self.folder)?;

        let mut report = BatchReport::new(total);
        pin_mut!(items);

        while let Some(item) = items.next().await {
            let asset = match item {
                Ok(asset) => asset,
                Err(e) => {
                    print_error(&format!("Could not fetch more GIFs for {}: {}", label, e));
                    print_batch_summary(&report, label, self.folder);
                    return Err(Error::BatchInterrupted {
                        report: Box::new(report),
                        source: Box::new(e),
                    });
                }
            };

            match self.download_asset(&asset).await {
                Ok(path) => {
                    tracing::debug!("Saved {} to {}", asset.id, path.display());
                    report.record_success(asset, path);
                    print_success(&format!("Downloaded {}/{} GIFs", report.succeeded, total));
                }
                Err(e) if e.is_fatal() => {
                    print_error(&format!("An error occurred while downloading: {}", e));
                    return Err(e);
                }
                Err(e) => {
                    print_warning(&format!(
                        "Error occurred when downloading {}: {}. Continuing...",
                        asset.url, e
                    ));
                    report.record_failure(asset, e.to_string());
                }
            }
        }

        print_batch_summary(&report, label, self.folder);
        Ok(report)
    }

    /// Stream one asset to disk, returning the written path.
    async fn download_asset(&self, asset: &AssetReference) -> Result<PathBuf> {
        let file_name = asset.file_name()?;
        let output_path = destination_path(self.folder, &file_name);

        let body = self.api.download(&asset.url).await?;

        let file = File::create(&output_path)
            .await
            .map_err(|e| self.map_create_error(e))?;

        let written = self
            .write_body(file, body.chunks, body.content_length)
            .await;

        if let Err(e) = written {
            if let Err(remove_err) = tokio::fs::remove_file(&output_path).await {
                tracing::debug!(
                    "Could not remove partial file {}: {}",
                    output_path.display(),
                    remove_err
                );
            }
            return Err(e);
        }

        Ok(output_path)
    }

    async fn write_body(
        &self,
        file: File,
        chunks: ByteStream,
        content_length: Option<u64>,
    ) -> Result<()> {
        let progress = match content_length {
            Some(len) if self.show_progress && len > PROGRESS_THRESHOLD => {
                Some(create_download_bar(len))
            }
            _ => None,
        };

        let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
        let mut chunks = chunks;
        let mut downloaded: u64 = 0;

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            if chunk.is_empty() {
                continue;
            }
            writer.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        writer.flush().await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(())
    }

    fn map_create_error(&self, err: std::io::Error) -> Error {
        if err.kind() == ErrorKind::NotFound {
            let folder = self
                .folder
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Error::DestinationFolderMissing(folder)
        } else {
            Error::Io(err)
        }
    }
}
