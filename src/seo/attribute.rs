//! Meta attributes -> flat key/value tag.

use indexmap::IndexMap;

use super::image::resolve_image;
use super::record::MetaAttribute;
use crate::debug;

/// A flattened meta tag: attribute name -> value, in first-insertion order.
pub type MetaTag = IndexMap<String, String>;

/// Flatten a list of attributes into one tag.
///
/// Returns `None` when the list itself is absent. Attributes are applied in
/// order and a repeated key overwrites the earlier value (keeping the
/// earlier position). Attributes without a key are skipped; a text
/// attribute without a value contributes an empty string.
pub fn resolve_attributes(attrs: Option<&[MetaAttribute]>) -> Option<MetaTag> {
    let attrs = attrs?;
    let mut tag = MetaTag::with_capacity(attrs.len());

    for attr in attrs {
        let Some(key) = attr.key() else {
            debug!("attribute"; "skipping meta attribute without key");
            continue;
        };
        let value = match attr {
            MetaAttribute::Image { image, .. } => resolve_image(image.as_ref()),
            MetaAttribute::Text { value, .. } => value.clone().unwrap_or_default(),
        };
        tag.insert(key.to_owned(), value);
    }

    Some(tag)
}
