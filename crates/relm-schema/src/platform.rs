//! Target platform selection.
//!
//! Release indexes use Go-style platform names (`darwin`, `amd64`), which
//! differ from Rust's `std::env::consts` values (`macos`, `x86_64`).
//!
//! # Example
//!
//! ```
//! use relm_schema::Platform;
//!
//! let target: Platform = "linux/arm64".parse().unwrap();
//! assert_eq!(target.os(), "linux");
//! assert_eq!(target.arch(), "arm64");
//! ```

use std::fmt;
use std::str::FromStr;

/// An operating system and architecture pair in index vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    os: String,
    arch: String,
}

impl Platform {
    /// Create a platform from index-vocabulary names.
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::new(
            os_name(std::env::consts::OS),
            arch_name(std::env::consts::ARCH),
        )
    }

    /// Operating system name (e.g. "linux").
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Architecture name (e.g. "amd64").
    pub fn arch(&self) -> &str {
        &self.arch
    }
}

/// Map a Rust `target_os` value to the index name.
fn os_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust `target_arch` value to the index name.
fn arch_name(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        other => other,
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((os, arch)) if !os.is_empty() && !arch.is_empty() && !arch.contains('/') => {
                let os = os.to_lowercase();
                let arch = arch.to_lowercase();
                Ok(Self::new(os_name(&os), arch_name(&arch)))
            }
            _ => Err(format!("Invalid platform '{s}': expected <os>/<arch>")),
        }
    }
}
