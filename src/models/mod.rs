//! Data models for feature-driven project generation.
//!
//! # Core Concepts
//!
//! - [`TwaManifest`]: The subset of the project manifest (`twa-manifest.json`) that
//!   decides which features are enabled and which fallback strategy is used.
//! - [`Feature`]: A self-contained integration (e.g. an analytics SDK) declaring the
//!   fragments it needs in the generated project, split into four contribution groups:
//!   build configuration, manifest entries, application class code and launcher
//!   activity code.

mod feature;
mod twa_manifest;

pub use feature::*;
pub use twa_manifest::*;
