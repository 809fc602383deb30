//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Lines printed by `--version`.
pub fn version_lines() -> Vec<String> {
    vec![
        format!("- {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        "- HTTP client: reqwest (rustls)".to_string(),
        format!(
            "- system info: {} {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH,
            std::env::consts::FAMILY
        ),
    ]
}

/// Print version and environment information.
pub fn print_version() {
    println!("{}", version_lines().join("\n"));
}
