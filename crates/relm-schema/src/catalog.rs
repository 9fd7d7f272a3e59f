//! The release index: products, versions and per-platform builds.
//!
//! Lookups are exact-key only. A miss is reported as a [`CatalogError`]
//! naming what was asked for.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Errors raised when a lookup against the release index misses.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No release is published under this product name.
    #[error("product '{0}' not found in release index")]
    ProductNotFound(String),

    /// The release exists but has no entry for this exact version string.
    #[error("version '{version}' of '{product}' not found")]
    VersionNotFound {
        /// Product the lookup was made against.
        product: String,
        /// Requested version string.
        version: String,
    },

    /// The version publishes no build for the requested platform.
    #[error("no build of {product} {version} for {os}/{arch}")]
    BuildNotFound {
        /// Product name of the version that was searched.
        product: String,
        /// Version string that was searched.
        version: String,
        /// Requested operating system.
        os: String,
        /// Requested architecture.
        arch: String,
    },
}

/// The full release index: product name to [`Release`].
///
/// Products are kept in an ordered map so that enumeration is always sorted
/// by name. A catalog is decoded once per invocation and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: BTreeMap<String, Release>,
}

impl Catalog {
    /// Look up the release published under `product`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] when the key is absent.
    pub fn get_release(&self, product: &str) -> Result<&Release, CatalogError> {
        self.products
            .get(product)
            .ok_or_else(|| CatalogError::ProductNotFound(product.to_string()))
    }

    /// Product names in ascending order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Number of products in the index.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the index lists no products at all.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// All published versions of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Product name (e.g. "terraform").
    pub name: String,

    /// Version string to version details. Keys are matched exactly.
    pub versions: HashMap<String, Version>,
}

impl Release {
    /// Look up a version by its exact version string.
    ///
    /// No range or semver matching is performed: `"1.2"` does not match
    /// `"1.2.0"`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VersionNotFound`] when the key is absent.
    pub fn get_version(&self, version: &str) -> Result<&Version, CatalogError> {
        self.versions
            .get(version)
            .ok_or_else(|| CatalogError::VersionNotFound {
                product: self.name.clone(),
                version: version.to_string(),
            })
    }

    /// Published version strings, sorted lexically.
    pub fn versions(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.versions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// One version of a product and the builds published for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Product name.
    pub name: String,

    /// Version string (e.g. "1.2.3").
    pub version: String,

    /// Filename of the checksum manifest. Carried but never verified.
    #[serde(default)]
    pub shasums: Option<String>,

    /// Filename of the checksum manifest signature. Carried but never verified.
    #[serde(default)]
    pub shasums_signature: Option<String>,

    /// Builds in publication order. Order matters for resolution.
    pub builds: Vec<Build>,
}

/// A single platform-specific artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Binary name inside the archive (e.g. "terraform").
    pub name: String,

    /// Version string, repeated from the parent version.
    pub version: String,

    /// Operating system in index vocabulary (e.g. "linux", "darwin").
    pub os: String,

    /// Architecture in index vocabulary (e.g. "amd64", "arm64").
    pub arch: String,

    /// Published archive filename; its extension decides the archive type.
    pub filename: String,

    /// Download URL of the archive.
    pub url: String,
}

impl Build {
    /// Whether this build targets the given os/arch pair.
    pub fn targets(&self, os: &str, arch: &str) -> bool {
        self.os == os && self.arch == arch
    }
}
