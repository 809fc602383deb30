//! Filesystem module.
//!
//! Provides:
//! - Destination folder checks and path building
//! - Filename derivation and sanitizing

pub mod naming;
pub mod paths;

pub use naming::{asset_file_name, sanitize_filename};
pub use paths::{destination_path, ensure_destination};
