//! Media module for downloadable asset references.

pub mod asset;

pub use asset::AssetReference;
