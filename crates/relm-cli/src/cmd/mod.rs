//! Command implementations, one module per subcommand.

pub mod current;
pub mod download;
pub mod install;
pub mod list;
pub mod r#use;
pub mod versions;

use anyhow::{Context as _, Result};
use relm_core::io::index::{fetch_catalog, index_url};
use relm_schema::{Build, Catalog};

use crate::Context;

/// Fetch the release index configured for this invocation.
pub(crate) async fn load_catalog(ctx: &Context) -> Result<Catalog> {
    let url = index_url(&ctx.index_url);
    fetch_catalog(&ctx.client, &url)
        .await
        .with_context(|| format!("Failed to retrieve release index from {url}"))
}

/// Narrow the index down to the build of `product` `version` for the target platform.
pub(crate) async fn resolve(ctx: &Context, product: &str, version: &str) -> Result<Build> {
    let catalog = load_catalog(ctx).await?;
    let release = catalog.get_release(product)?;
    let version = release.get_version(version)?;
    let build = relm_core::resolve_build(version, &ctx.platform)?;
    Ok(build.clone())
}
