use dirs::home_dir;
use std::path::PathBuf;

/// Default release index base URL.
pub const DEFAULT_INDEX_URL: &str = "https://releases.hashicorp.com";

/// Data directory holding installed artifacts: `~/.local/share/relm`.
///
/// Returns None if the user's home cannot be resolved.
pub fn data_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".local/share/relm"))
}

/// Activation directory holding one symlink per binary: `~/.local/bin`.
///
/// It is expected to be on `PATH`. Returns None if the user's home cannot be resolved.
pub fn bin_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".local/bin"))
}

/// Extract the filename from a URL or published path, dropping any directories.
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit(['/', '\\']).next().unwrap_or("")
}
