//! Shared types for the relm release index.
//!
//! The release index is a single JSON document mapping product names to
//! releases, releases to versions, and versions to per-platform builds.
//! This crate only describes that shape and the exact-key lookups over it;
//! fetching and installing live in `relm-core`.

pub mod catalog;
pub mod platform;

// Re-exports
pub use catalog::{Build, Catalog, CatalogError, Release, Version};
pub use platform::Platform;
