//! Statistics reporting.

use std::path::Path;

use console::style;

use crate::download::{BatchReport, RunSummary};

/// Print the closing line of a batch.
pub fn print_batch_summary(report: &BatchReport, label: &str, folder: Option<&Path>) {
    let folder = folder
        .map(|f| f.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    println!();
    if report.failed() == 0 {
        println!(
            "Downloaded {}/{} videos of {} to \"{}\" folder successfully!",
            style(report.succeeded).green(),
            report.total,
            label,
            folder
        );
    } else {
        println!(
            "Downloaded {}/{} videos of {} to \"{}\" folder ({} failed)",
            style(report.succeeded).green(),
            report.total,
            label,
            folder,
            style(report.failed()).red()
        );
    }
}

/// Print statistics across every URL of a list run.
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Summary:").bold());
    println!("  URLs processed: {}", summary.urls_processed);
    if summary.urls_failed > 0 {
        println!("  URLs failed:    {}", style(summary.urls_failed).red());
    }
    println!("  Downloaded:     {}", summary.downloaded);
    if summary.failed_items > 0 {
        println!("  Failed items:   {}", style(summary.failed_items).yellow());
    }
    println!("{}", style("═".repeat(50)).dim());
}
