use anyhow::{Result, bail};

use crate::Context;

/// Print the artifact the activation link for `name` points at.
pub fn current(ctx: &Context, name: &str) -> Result<()> {
    let bin_dir = ctx.bin_dir()?;
    match relm_core::active_target(bin_dir, name) {
        Some(target) => {
            println!("{}", target.display());
            Ok(())
        }
        None => bail!("No active version of '{name}' in {}", bin_dir.display()),
    }
}
