//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// RedGifs video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "redgifs-dl",
    about = "Download videos from RedGifs posts and creators",
    long_about = "Download RedGifs videos.\n\n\
                  Accepts single post links (https://www.redgifs.com/watch/<id>) and \
                  creator links (https://www.redgifs.com/users/<username>), either \
                  directly or from a list file.",
    disable_version_flag = true
)]
pub struct Args {
    /// Enter a RedGifs URL to download it.
    pub link: Option<String>,

    /// Folder to download the video(s) to. Must already exist.
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Download GIFs from a newline-delimited list of URLs.
    #[arg(short, long)]
    pub list: Option<PathBuf>,

    /// Show version and environment info.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Path to configuration file.
    #[arg(short, long, env = "REDGIFS_CONFIG", default_value = "redgifs.toml")]
    pub config: PathBuf,

    /// Hide download progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Whether any link needs to be downloaded.
    pub fn has_work(&self) -> bool {
        self.link.is_some() || self.list.is_some()
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(folder) = &self.folder {
            config.options.download_directory = Some(folder.clone());
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}
