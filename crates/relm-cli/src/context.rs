//! Shared command context.
//!
//! This module defines the `Context` struct, which groups the settings and
//! handles every command needs so they are resolved once in `main`.

use anyhow::{Context as _, Result};
use relm_core::Reporter;
use relm_schema::Platform;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::Cli;
use crate::ui::TerminalReporter;

/// Groups common state used by the commands.
#[derive(Clone)]
pub struct Context {
    pub client: reqwest::Client,
    pub index_url: String,
    pub platform: Platform,
    pub reporter: Arc<dyn Reporter>,
    data_dir: Option<PathBuf>,
    bin_dir: Option<PathBuf>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("index_url", &self.index_url)
            .field("platform", &self.platform)
            .field("data_dir", &self.data_dir)
            .field("bin_dir", &self.bin_dir)
            .finish_non_exhaustive()
    }
}

impl Context {
    pub fn new(cli: &Cli) -> Result<Self> {
        let client = relm_core::http_client().context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            index_url: cli.index_url.clone(),
            platform: cli.platform.clone().unwrap_or_else(Platform::current),
            reporter: Arc::new(TerminalReporter::new(cli.quiet)),
            data_dir: cli.data_dir.clone().or_else(relm_core::data_dir),
            bin_dir: cli.bin_dir.clone().or_else(relm_core::bin_dir),
        })
    }

    /// Directory holding installed artifacts.
    pub fn data_dir(&self) -> Result<&PathBuf> {
        self.data_dir
            .as_ref()
            .context("Could not determine home directory. Pass --data-dir or set RELM_DATA_DIR.")
    }

    /// Directory holding activation symlinks.
    pub fn bin_dir(&self) -> Result<&PathBuf> {
        self.bin_dir
            .as_ref()
            .context("Could not determine home directory. Pass --bin-dir or set RELM_BIN_DIR.")
    }
}
