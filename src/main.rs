//! RedGifs Downloader - CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use redgifs_downloader::{
    api::{MediaApi, RedGifsApi},
    cli::Args,
    config::{validate_config, Config},
    dispatch::{read_link_list, Dispatcher},
    error::{exit_codes, Result},
    output::{print_error, print_info, print_run_summary, print_version},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Bare invocation prints usage and counts as a failure
    if std::env::args_os().len() <= 1 {
        if let Err(e) = Args::command().print_help() {
            eprintln!("{}", e);
        }
        return ExitCode::from(exit_codes::ABORT as u8);
    }

    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if args.version {
        print_version();
    }

    if !args.has_work() {
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Open the API session once for the whole run
    print_info("Connecting to RedGifs...");
    let api = RedGifsApi::new(&config.api)?;
    api.login().await?;

    let dispatcher = Dispatcher::new(
        &api,
        config.download_directory(),
        config.options.show_downloads,
    );

    // A single link fails fast
    if let Some(link) = &args.link {
        dispatcher.dispatch(link).await?;
    }

    // List mode skips links that fail and stops only on fatal errors
    if let Some(list) = &args.list {
        let links = read_link_list(list)?;
        print_info(&format!("Processing {} link(s) from {}", links.len(), list.display()));
        let summary = dispatcher.dispatch_list(&links).await?;
        print_run_summary(&summary);
    }

    Ok(())
}
