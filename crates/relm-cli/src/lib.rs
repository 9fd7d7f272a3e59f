//! relm - install and switch versions of released binaries
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! relm reads a release index (`<base>/index.json`), picks the build of a
//! product version published for the host platform, and installs the binary
//! from its zip archive.
//!
//! # Directory Layout
//!
//! ```text
//! ~/.local/share/relm/
//! ├── terraform_1.5.0   # installed artifacts, one per (name, version)
//! └── terraform_1.6.2
//! ~/.local/bin/
//! └── terraform -> ~/.local/share/relm/terraform_1.6.2
//! ```

pub mod cmd;
pub mod context;
pub mod ui;

pub use context::Context;

use clap::{Parser, Subcommand};
use relm_schema::Platform;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "relm")]
#[command(author, version, about = "relm - install and switch versions of released binaries")]
pub struct Cli {
    /// Base URL of the release index
    #[arg(
        long,
        global = true,
        env = "RELM_INDEX_URL",
        default_value = relm_core::DEFAULT_INDEX_URL
    )]
    pub index_url: String,

    /// Directory holding installed artifacts [default: ~/.local/share/relm]
    #[arg(long, global = true, env = "RELM_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding activation symlinks [default: ~/.local/bin]
    #[arg(long, global = true, env = "RELM_BIN_DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Target platform as <os>/<arch> [default: this host]
    #[arg(long, global = true, env = "RELM_PLATFORM")]
    pub platform: Option<Platform>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available products
    List,
    /// List the published versions of a product
    Versions {
        /// Product name
        product: String,
    },
    /// Download a product build into the current directory
    Download {
        /// Product name
        product: String,
        /// Exact version
        version: String,
    },
    /// Install a product build into the data directory
    Install {
        /// Product name
        product: String,
        /// Exact version
        version: String,
    },
    /// Install a product build and make it the active one
    Use {
        /// Product name
        product: String,
        /// Exact version
        version: String,
    },
    /// Show which installed artifact a binary name points at
    Current {
        /// Binary name
        name: String,
    },
}
