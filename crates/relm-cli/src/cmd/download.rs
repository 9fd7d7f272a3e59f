//! Fetch a build's archive without installing it.
use anyhow::{Context as _, Result};
use relm_core::io::download::download_to_dir;

use crate::Context;

/// Download the archive for `product` `version` into the current directory.
pub async fn download(ctx: &Context, product: &str, version: &str) -> Result<()> {
    let build = super::resolve(ctx, product, version).await?;
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    let path = download_to_dir(&ctx.client, &build, &cwd, &ctx.reporter)
        .await
        .with_context(|| format!("Failed to download {}", build.url))?;

    ctx.reporter.info(&format!("Saved {}", path.display()));
    Ok(())
}
