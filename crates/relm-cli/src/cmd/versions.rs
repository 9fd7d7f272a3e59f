use anyhow::Result;

use crate::Context;

/// Print the published versions of `product`, one per line.
pub async fn versions(ctx: &Context, product: &str) -> Result<()> {
    let catalog = super::load_catalog(ctx).await?;
    let release = catalog.get_release(product)?;
    for version in release.versions() {
        println!("{version}");
    }
    Ok(())
}
