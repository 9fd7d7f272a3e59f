use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::Context;

/// Install `product` `version` into the data directory.
pub async fn install(ctx: &Context, product: &str, version: &str) -> Result<()> {
    install_build(ctx, product, version).await.map(|_| ())
}

/// Shared by `install` and `use`: resolve, then run the install pipeline.
pub(crate) async fn install_build(
    ctx: &Context,
    product: &str,
    version: &str,
) -> Result<(relm_schema::Build, PathBuf)> {
    let build = super::resolve(ctx, product, version).await?;
    let data_dir = ctx.data_dir()?;

    let path = relm_core::install(&ctx.client, &build, data_dir, &ctx.reporter)
        .await
        .with_context(|| format!("Failed to install {} {}", build.name, build.version))?;

    Ok((build, path))
}
