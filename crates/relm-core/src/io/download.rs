//! Artifact download.
//!
//! A build's archive is fetched with a single GET and streamed chunk by chunk
//! into a caller-supplied sink. There are no range requests, no resumption
//! and no checksum verification.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Client;
use relm_schema::Build;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::Reporter;
use crate::paths::filename_from_url;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stream the archive of `build` into `sink`, returning the number of bytes written.
///
/// The sink is flushed before returning. On error the sink may hold a prefix
/// of the body; callers decide whether to keep or discard it.
pub async fn download<W, R>(
    client: &Client,
    build: &Build,
    sink: &mut W,
    reporter: &R,
) -> Result<u64, DownloadError>
where
    W: AsyncWrite + Unpin + ?Sized,
    R: Reporter + ?Sized,
{
    debug!("GET {}", build.url);
    let response = client.get(&build.url).send().await?.error_for_status()?;

    let total_size = response.content_length();
    reporter.downloading(build, 0, total_size);

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        sink.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        reporter.downloading(build, downloaded, total_size);
    }

    sink.flush().await?;
    debug!("Downloaded {downloaded} bytes from {}", build.url);
    Ok(downloaded)
}

/// Download `build` into `dir` under its published filename.
///
/// The body lands in a temporary file first and is renamed into place only
/// after the transfer completes, so an interrupted download leaves nothing
/// behind under the final name.
pub async fn download_to_dir<R: Reporter + ?Sized>(
    client: &Client,
    build: &Build,
    dir: &Path,
    reporter: &R,
) -> Result<PathBuf, DownloadError> {
    let filename = filename_from_url(&build.filename);
    if filename.is_empty() || filename == "." || filename == ".." {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Invalid published filename '{}'", build.filename),
        )
        .into());
    }

    let tmp = tempfile::Builder::new()
        .prefix(".relm-download-")
        .tempfile_in(dir)?;
    let mut file = tokio::fs::File::from_std(tmp.as_file().try_clone()?);
    download(client, build, &mut file, reporter).await?;
    drop(file);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o644))?;
    }

    let dest = dir.join(filename);
    tmp.persist(&dest).map_err(|e| e.error)?;
    Ok(dest)
}
