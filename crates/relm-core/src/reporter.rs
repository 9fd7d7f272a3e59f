//! Reporter trait for dependency injection
//!
//! This trait allows core logic to report progress and status without
//! being coupled to a specific terminal implementation.

use relm_schema::Build;
use std::path::Path;

pub trait Reporter: Send + Sync {
    /// Updates the progress of a download.
    fn downloading(&self, build: &Build, current: u64, total: Option<u64>);

    /// Marks the start of archive extraction.
    fn extracting(&self, build: &Build);

    /// Marks a build as placed on disk at `path`.
    fn installed(&self, build: &Build, path: &Path);

    /// Marks `link` as now pointing at `target`.
    fn activated(&self, link: &Path, target: &Path);

    /// Log an informational message.
    fn info(&self, msg: &str);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn downloading(&self, build: &Build, current: u64, total: Option<u64>) {
        (**self).downloading(build, current, total);
    }
    fn extracting(&self, build: &Build) {
        (**self).extracting(build);
    }
    fn installed(&self, build: &Build, path: &Path) {
        (**self).installed(build, path);
    }
    fn activated(&self, link: &Path, target: &Path) {
        (**self).activated(link, target);
    }
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }
}

/// A no-op reporter for silent operations (e.g., scripting, testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn downloading(&self, _: &Build, _: u64, _: Option<u64>) {}
    fn extracting(&self, _: &Build) {}
    fn installed(&self, _: &Build, _: &Path) {}
    fn activated(&self, _: &Path, _: &Path) {}
    fn info(&self, _: &str) {}
}
