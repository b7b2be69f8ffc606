//! Image reference -> URL.

use super::record::ImageReference;

/// Resolve the asset URL of an image reference.
///
/// Returns an empty string when the reference, its asset, or the asset URL
/// is missing, so callers can concatenate without checks.
pub fn resolve_image(image: Option<&ImageReference>) -> String {
    image
        .and_then(|image| image.asset.as_ref())
        .and_then(|asset| asset.url.clone())
        .unwrap_or_default()
}
