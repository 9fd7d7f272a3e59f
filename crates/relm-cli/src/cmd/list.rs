use anyhow::Result;

use crate::Context;

/// Print every product in the release index, sorted, one per line.
pub async fn list(ctx: &Context) -> Result<()> {
    let catalog = super::load_catalog(ctx).await?;
    let names: Vec<&str> = catalog.products().collect();
    if !names.is_empty() {
        println!("{}", names.join("\n"));
    }
    Ok(())
}
