//! Archive extraction module
//!
//! Pulls the single binary named after a build out of a downloaded archive.
//! Only zip archives are supported; other formats are recognised so that the
//! rejection names what was published.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use relm_schema::Build;
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported archive format {format} for '{filename}': expected zip")]
    UnsupportedFormat {
        filename: String,
        format: ArtifactFormat,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Archive or binary format of a published artifact, inferred from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Zip archive (`.zip`).
    Zip,
    /// Gzip-compressed tar archive (`.tar.gz` / `.tgz`).
    TarGz,
    /// Zstandard-compressed tar archive (`.tar.zst`).
    TarZst,
    /// Uncompressed tar archive (`.tar`).
    Tar,
    /// Anything else: a bare executable or an unknown wrapper.
    Binary,
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
            Self::TarZst => "tar.zst",
            Self::Tar => "tar",
            Self::Binary => "binary",
        })
    }
}

/// Upper bound on the buffer reserved up front for an extracted entry.
const MAX_PREALLOC: u64 = 64 << 20;

/// Detect archive format from file extension. Suffixes are matched case-sensitively.
pub fn detect_format(name: &str) -> ArtifactFormat {
    if name.ends_with(".zip") {
        ArtifactFormat::Zip
    } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        ArtifactFormat::TarGz
    } else if name.ends_with(".tar.zst") || name.ends_with(".tzst") {
        ArtifactFormat::TarZst
    } else if name.ends_with(".tar") {
        ArtifactFormat::Tar
    } else {
        ArtifactFormat::Binary
    }
}

/// Read the entry named `build.name` out of the archive at `archive_path`.
///
/// The build's published filename must be a zip; anything else is rejected
/// before the archive is opened. Returns `Ok(None)` when the archive has no
/// entry with that exact name. Callers must treat that as a miss, not as an
/// empty binary.
pub fn extract_entry(archive_path: &Path, build: &Build) -> Result<Option<Vec<u8>>, ExtractError> {
    let format = detect_format(&build.filename);
    if format != ArtifactFormat::Zip {
        return Err(ExtractError::UnsupportedFormat {
            filename: build.filename.clone(),
            format,
        });
    }

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.name() != build.name {
            continue;
        }

        // Header sizes are untrusted; cap the preallocation.
        let hint = entry.size().min(MAX_PREALLOC);
        let mut bytes = Vec::with_capacity(usize::try_from(hint).unwrap_or_default());
        entry.read_to_end(&mut bytes)?;
        debug!(
            "Extracted '{}' ({} bytes) from {}",
            build.name,
            bytes.len(),
            archive_path.display()
        );
        return Ok(Some(bytes));
    }

    debug!(
        "No entry named '{}' among {} entries of {}",
        build.name,
        archive.len(),
        archive_path.display()
    );
    Ok(None)
}
