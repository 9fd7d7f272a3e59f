//! Install a version and switch the active link to it (the `use` command)
use anyhow::{Context as _, Result};

use crate::Context;

/// Install `product` `version` and point `<bin_dir>/<name>` at it.
pub async fn use_version(ctx: &Context, product: &str, version: &str) -> Result<()> {
    let bin_dir = ctx.bin_dir()?.clone();
    let (build, installed) = super::install::install_build(ctx, product, version).await?;

    let link = relm_core::activate(&installed, &bin_dir, &build.name)
        .with_context(|| format!("Failed to activate {} {}", build.name, build.version))?;

    ctx.reporter.activated(&link, &installed);
    Ok(())
}
