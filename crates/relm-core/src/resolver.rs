use relm_schema::{Build, CatalogError, Platform, Version};
use tracing::debug;

/// Selects the build of `version` published for `platform`.
///
/// Builds are scanned in publication order and the *last* entry whose os and
/// arch both match is returned. Indexes occasionally list the same platform
/// twice; later entries supersede earlier ones.
///
/// # Errors
///
/// Returns [`CatalogError::BuildNotFound`] naming the requested os/arch when no
/// build matches.
pub fn resolve_build<'a>(
    version: &'a Version,
    platform: &Platform,
) -> Result<&'a Build, CatalogError> {
    let mut selected = None;
    for build in &version.builds {
        if build.targets(platform.os(), platform.arch()) {
            selected = Some(build);
        }
    }

    let build = selected.ok_or_else(|| CatalogError::BuildNotFound {
        product: version.name.clone(),
        version: version.version.clone(),
        os: platform.os().to_string(),
        arch: platform.arch().to_string(),
    })?;

    debug!(
        "Resolved {} {} for {platform} -> {}",
        version.name, version.version, build.filename
    );
    Ok(build)
}
