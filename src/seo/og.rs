//! Open Graph and Twitter Card data.
//!
//! Provides pure data structures for social-preview tags.
//! HTML output is handled by `seo/head.rs`.

use serde::Serialize;

use super::image::resolve_image;
use super::record::{OpenGraph, Twitter};

/// One Open Graph image slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
}

/// Open Graph data ready for rendering.
///
/// Text fields are copied verbatim from the record. `images` always holds
/// exactly one entry; its URL is empty when the record has no usable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphMeta {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub images: [OpenGraphImage; 1],
}

impl OpenGraphMeta {
    /// The single representative image.
    pub fn image(&self) -> &OpenGraphImage {
        &self.images[0]
    }
}

/// Build renderable Open Graph data from the stored descriptor.
pub fn resolve_open_graph(og: &OpenGraph) -> OpenGraphMeta {
    OpenGraphMeta {
        kind: og.kind.clone(),
        site_name: og.site_name.clone(),
        url: og.url.clone(),
        description: og.description.clone(),
        title: og.title.clone(),
        images: [OpenGraphImage {
            url: resolve_image(og.image.as_ref()),
        }],
    }
}

/// Twitter Card data ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterMeta {
    /// Creator handle (`twitter:creator`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
}

/// Map the stored Twitter descriptor; an absent one yields all-`None`.
///
/// The handle comes from `creator`, falling back to the legacy `handle` field.
pub fn resolve_twitter(twitter: Option<&Twitter>) -> TwitterMeta {
    let Some(twitter) = twitter else {
        return TwitterMeta::default();
    };
    TwitterMeta {
        handle: twitter.creator.clone().or_else(|| twitter.handle.clone()),
        site: twitter.site.clone(),
        card_type: twitter.card_type.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::record::ImageReference;

    mod open_graph {
        use super::*;

        #[test]
        fn copies_fields() {
            let og = OpenGraph {
                kind: Some("openGraph".into()),
                site_name: Some("Site".into()),
                url: Some("https://example.com/post".into()),
                description: Some("About".into()),
                title: Some("Post".into()),
                image: Some(ImageReference::with_url("https://cdn.example.com/p.png")),
            };
            let meta = resolve_open_graph(&og);
            assert_eq!(meta.kind.as_deref(), Some("openGraph"));
            assert_eq!(meta.site_name.as_deref(), Some("Site"));
            assert_eq!(meta.url.as_deref(), Some("https://example.com/post"));
            assert_eq!(meta.description.as_deref(), Some("About"));
            assert_eq!(meta.title.as_deref(), Some("Post"));
            assert_eq!(meta.image().url, "https://cdn.example.com/p.png");
        }

        #[test]
        fn missing_image_keeps_one_empty_slot() {
            let meta = resolve_open_graph(&OpenGraph::default());
            assert_eq!(meta.images.len(), 1);
            assert_eq!(meta.image().url, "");
        }

        #[test]
        fn serializes_store_field_names() {
            let og = OpenGraph {
                kind: Some("openGraph".into()),
                site_name: Some("Site".into()),
                ..Default::default()
            };
            let value = serde_json::to_value(resolve_open_graph(&og)).unwrap();
            assert_eq!(
                value,
                serde_json::json!({
                    "_type": "openGraph",
                    "siteName": "Site",
                    "images": [{"url": ""}]
                })
            );
        }
    }

    mod twitter {
        use super::*;

        #[test]
        fn absent() {
            assert_eq!(resolve_twitter(None), TwitterMeta::default());
        }

        #[test]
        fn renames_creator_to_handle() {
            let twitter = Twitter {
                site: Some("@site".into()),
                creator: Some("@author".into()),
                card_type: Some("summary_large_image".into()),
                ..Default::default()
            };
            let meta = resolve_twitter(Some(&twitter));
            assert_eq!(meta.handle.as_deref(), Some("@author"));
            assert_eq!(meta.site.as_deref(), Some("@site"));
            assert_eq!(meta.card_type.as_deref(), Some("summary_large_image"));
        }

        #[test]
        fn legacy_handle_fallback() {
            let twitter = Twitter {
                handle: Some("@legacy".into()),
                ..Default::default()
            };
            assert_eq!(resolve_twitter(Some(&twitter)).handle.as_deref(), Some("@legacy"));
        }

        #[test]
        fn creator_wins_over_handle() {
            let twitter = Twitter {
                creator: Some("@new".into()),
                handle: Some("@old".into()),
                ..Default::default()
            };
            assert_eq!(resolve_twitter(Some(&twitter)).handle.as_deref(), Some("@new"));
        }
    }
}
