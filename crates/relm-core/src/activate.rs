//! Activation Manager: the per-binary symlink in the bin directory.
//!
//! Each binary name has at most one link, `<bin_dir>/<name>`, pointing at an
//! installed artifact. Switching versions builds the new link under a random
//! hidden name and renames it over the old one, so the path always resolves
//! to either the old or the new target.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::InstallError;

/// Point `<bin_dir>/<link_name>` at `installed_path`, replacing any existing entry.
///
/// The link target is made absolute so it resolves regardless of where
/// `bin_dir` lives. Returns the link path.
pub fn activate(
    installed_path: &Path,
    bin_dir: &Path,
    link_name: &str,
) -> Result<PathBuf, InstallError> {
    if link_name.is_empty() || link_name.contains(['/', '\\']) || link_name == ".." {
        return Err(InstallError::context(
            "Invalid link name",
            format!("'{link_name}'"),
        ));
    }

    std::fs::create_dir_all(bin_dir).map_err(|e| {
        InstallError::context(
            "Failed to create bin directory",
            format!("{}: {e}", bin_dir.display()),
        )
    })?;

    let target = std::path::absolute(installed_path)?;
    let link = bin_dir.join(link_name);
    let staging = bin_dir.join(format!(".{link_name}.relm-{:016x}", rand::random::<u64>()));

    symlink(&target, &staging).map_err(|e| {
        InstallError::context(
            "Failed to create symlink",
            format!("{}: {e}", staging.display()),
        )
    })?;

    if let Err(e) = std::fs::rename(&staging, &link) {
        std::fs::remove_file(&staging).ok();
        return Err(InstallError::context(
            "Failed to replace symlink",
            format!("{}: {e}", link.display()),
        ));
    }

    debug!("Linked {} -> {}", link.display(), target.display());
    Ok(link)
}

/// Target of the current activation link for `link_name`, if one exists.
pub fn active_target(bin_dir: &Path, link_name: &str) -> Option<PathBuf> {
    std::fs::read_link(bin_dir.join(link_name)).ok()
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
