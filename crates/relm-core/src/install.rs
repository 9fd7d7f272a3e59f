//! Install Manager: download, extract and place a build in the data directory.
//!
//! Layout:
//!
//! ```text
//! <data_dir>/
//! ├── terraform_1.5.0       # installed artifacts, one per (name, version)
//! ├── terraform_1.6.2
//! └── .relm-download-XXXX   # in-flight download, removed on every exit path
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use reqwest::Client;
use relm_schema::Build;
use thiserror::Error;
use tracing::{debug, info};

use crate::Reporter;
use crate::io::download::{self, DownloadError};
use crate::io::extract::{self, ExtractError};

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Archive '{archive}' has no entry named '{entry}'")]
    EntryNotFound { archive: String, entry: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context}: {message}")]
    Context {
        context: &'static str,
        message: String,
    },
}

impl InstallError {
    /// Create an error with context for better debugging.
    pub fn context(ctx: &'static str, msg: impl std::fmt::Display) -> Self {
        Self::Context {
            context: ctx,
            message: msg.to_string(),
        }
    }
}

/// File name of an installed artifact: `<name>_<version>`.
pub fn artifact_file_name(build: &Build) -> String {
    format!("{}_{}", build.name, build.version)
}

/// Where `build` lives once installed under `data_dir`.
pub fn installed_path(build: &Build, data_dir: &Path) -> PathBuf {
    data_dir.join(artifact_file_name(build))
}

/// Download `build`, extract its binary and place it at `<data_dir>/<name>_<version>`.
///
/// Every step aborts the install on failure. The raw archive is staged in a
/// uniquely named temporary file inside `data_dir` that is removed whether
/// the install succeeds or not. The final artifact is written to a second
/// temporary file and renamed into place, so a reader never sees a partially
/// written binary. Installing the same build again overwrites it.
pub async fn install<R: Reporter + ?Sized>(
    client: &Client,
    build: &Build,
    data_dir: &Path,
    reporter: &R,
) -> Result<PathBuf, InstallError> {
    // 1. Data directory
    std::fs::create_dir_all(data_dir).map_err(|e| {
        InstallError::context(
            "Failed to create data directory",
            format!("{}: {e}", data_dir.display()),
        )
    })?;

    // 2. Scratch file for the raw archive, deleted on drop
    let archive = tempfile::Builder::new()
        .prefix(".relm-download-")
        .tempfile_in(data_dir)
        .map_err(|e| InstallError::context("Failed to create temporary file", e))?;

    // 3. Fetch
    {
        let mut sink = tokio::fs::File::from_std(archive.as_file().try_clone()?);
        download::download(client, build, &mut sink, reporter).await?;
    }

    // 4 + 5. Validate format and pull out the binary
    reporter.extracting(build);
    let archive_path = archive.path().to_path_buf();
    let owned_build = build.clone();
    let extracted = tokio::task::spawn_blocking(move || {
        extract::extract_entry(&archive_path, &owned_build)
    })
    .await
    .map_err(|e| InstallError::context("Extraction task failed", e))??;

    let bytes = extracted.ok_or_else(|| InstallError::EntryNotFound {
        archive: build.filename.clone(),
        entry: build.name.clone(),
    })?;

    // 6. Place atomically with the executable bit set
    let dest = installed_path(build, data_dir);
    place_executable(&bytes, data_dir, &dest)?;
    drop(archive);

    info!("Installed {} {} at {}", build.name, build.version, dest.display());
    reporter.installed(build, &dest);

    // 7.
    Ok(dest)
}

/// Write `bytes` beside `dest` and rename over it once complete.
fn place_executable(bytes: &[u8], data_dir: &Path, dest: &Path) -> Result<(), InstallError> {
    let mut staged = tempfile::Builder::new()
        .prefix(".relm-install-")
        .tempfile_in(data_dir)
        .map_err(|e| InstallError::context("Failed to create temporary file", e))?;

    staged
        .write_all(bytes)
        .map_err(|e| InstallError::context("Failed to write artifact", e))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| InstallError::context("Failed to write artifact", e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(staged.path(), std::fs::Permissions::from_mode(0o755))
            .map_err(|e| InstallError::context("Failed to set executable permission", e))?;
    }

    staged.persist(dest).map_err(|e| {
        InstallError::context(
            "Failed to move artifact into place",
            format!("{}: {}", dest.display(), e.error),
        )
    })?;
    debug!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullReporter;
    use mockito::Server;
    use std::io::Cursor;
    use zip::write::SimpleFileOptions;

    fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    fn build(base: &str, filename: &str) -> Build {
        Build {
            name: "widget".into(),
            version: "1.0.0".into(),
            os: "linux".into(),
            arch: "amd64".into(),
            filename: filename.into(),
            url: format!("{base}/widget.zip"),
        }
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_installed_path_layout() {
        let b = build("https://example", "widget.zip");
        assert_eq!(
            installed_path(&b, Path::new("/data")),
            PathBuf::from("/data/widget_1.0.0")
        );
    }

    #[tokio::test]
    async fn test_install_places_executable() {
        let mut server = Server::new_async().await;
        let body = zip_bytes(&[("widget", b"binary-v1".as_slice())]);
        let _m = server
            .mock("GET", "/widget.zip")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        let b = build(&server.url(), "widget_1.0.0_linux_amd64.zip");

        let path = install(&Client::new(), &b, &data_dir, &NullReporter)
            .await
            .unwrap();

        assert_eq!(path, data_dir.join("widget_1.0.0"));
        assert_eq!(std::fs::read(&path).unwrap(), b"binary-v1");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
        assert_eq!(dir_entries(&data_dir), vec!["widget_1.0.0"]);
    }

    #[tokio::test]
    async fn test_install_twice_is_idempotent() {
        let mut server = Server::new_async().await;
        let body = zip_bytes(&[("widget", b"same-bytes".as_slice())]);
        let _m = server
            .mock("GET", "/widget.zip")
            .with_status(200)
            .with_body(body)
            .expect(2)
            .create_async()
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let b = build(&server.url(), "widget.zip");
        let client = Client::new();

        let first = install(&client, &b, tmp.path(), &NullReporter).await.unwrap();
        let first_bytes = std::fs::read(&first).unwrap();
        let second = install(&client, &b, tmp.path(), &NullReporter).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), first_bytes);
        assert_eq!(dir_entries(tmp.path()), vec!["widget_1.0.0"]);
    }

    #[tokio::test]
    async fn test_missing_entry_writes_no_artifact() {
        let mut server = Server::new_async().await;
        let body = zip_bytes(&[("README.md", b"docs".as_slice())]);
        let _m = server
            .mock("GET", "/widget.zip")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let b = build(&server.url(), "widget.zip");

        let err = install(&Client::new(), &b, tmp.path(), &NullReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, InstallError::EntryNotFound { .. }), "got {err:?}");
        assert!(!tmp.path().join("widget_1.0.0").exists());
        assert!(dir_entries(tmp.path()).is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_format_cleans_up() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/widget.zip")
            .with_status(200)
            .with_body(b"tarball")
            .create_async()
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let b = build(&server.url(), "widget_1.0.0_linux_amd64.tar.gz");

        let err = install(&Client::new(), &b, tmp.path(), &NullReporter)
            .await
            .unwrap_err();

        assert!(
            matches!(
                err,
                InstallError::Extract(ExtractError::UnsupportedFormat { .. })
            ),
            "got {err:?}"
        );
        assert!(dir_entries(tmp.path()).is_empty());
    }

    #[tokio::test]
    async fn test_download_failure_cleans_up() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/widget.zip")
            .with_status(502)
            .create_async()
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let b = build(&server.url(), "widget.zip");

        let err = install(&Client::new(), &b, tmp.path(), &NullReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, InstallError::Download(_)), "got {err:?}");
        assert!(dir_entries(tmp.path()).is_empty());
    }
}
