//! SEO record as delivered by the content store.
//!
//! Field names follow the store's camelCase (`metaTitle`, `seoKeywords`, ...).
//! Every field is optional and JSON `null` is read as "absent", so a partial
//! payload always deserializes.

use serde::{Deserialize, Deserializer};

/// Attribute type tag selecting the image variant of [`MetaAttribute`].
pub const ATTRIBUTE_TYPE_IMAGE: &str = "image";

/// Deserialize an optional list, dropping `null` entries.
fn compact<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(value.map(|items| items.into_iter().flatten().collect()))
}

/// Like [`compact`], treating a missing list as empty.
fn compact_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(compact(deserializer)?.unwrap_or_default())
}

/// Deserialize a value, treating `null` as `Default::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Top-level SEO payload attached to a page.
///
/// | Field                | JSON key             | Default |
/// |----------------------|----------------------|---------|
/// | `meta_title`         | `metaTitle`          | absent  |
/// | `meta_description`   | `metaDescription`    | absent  |
/// | `seo_keywords`       | `seoKeywords`        | `[]`    |
/// | `nofollow_attributes`| `nofollowAttributes` | `false` |
/// | `open_graph`         | `openGraph`          | absent  |
/// | `twitter`            | `twitter`            | absent  |
/// | `additional_meta_tags` | `additionalMetaTags` | absent |
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoRecord {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(deserialize_with = "compact_or_empty")]
    pub seo_keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub nofollow_attributes: bool,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<Twitter>,
    #[serde(deserialize_with = "compact")]
    pub additional_meta_tags: Option<Vec<MetaTagGroup>>,
}

/// Open Graph descriptor as stored (single representative image).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub site_name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,
    pub image: Option<ImageReference>,
}

/// Twitter card descriptor as stored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Twitter {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub site: Option<String>,
    pub creator: Option<String>,
    /// e.g. `summary`, `summary_large_image`
    pub card_type: Option<String>,
    /// Older records carry the creator handle here instead of `creator`.
    pub handle: Option<String>,
}

/// Image field with a dereferenced asset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageReference {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub asset: Option<ImageAsset>,
    pub crop: Option<ImageCrop>,
    pub hotspot: Option<ImageHotspot>,
}

impl ImageReference {
    /// Reference to an asset served at `url`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            asset: Some(ImageAsset {
                url: Some(url.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Dereferenced image asset. Only the URL is used; other asset
/// fields returned by the store are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageAsset {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub url: Option<String>,
}

/// Crop rectangle, as fractions of the source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageCrop {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// Focal area of the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageHotspot {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub height: Option<f64>,
    pub width: Option<f64>,
}

/// One logical additional `<meta>` tag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaTagGroup {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "compact")]
    pub meta_attributes: Option<Vec<MetaAttribute>>,
}

impl MetaTagGroup {
    pub fn new(attributes: Vec<MetaAttribute>) -> Self {
        Self {
            kind: None,
            meta_attributes: Some(attributes),
        }
    }
}

/// A single attribute of a meta tag, dispatched on `attributeType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMetaAttribute")]
pub enum MetaAttribute {
    /// `attributeValueString` carries the value.
    Text {
        key: Option<String>,
        value: Option<String>,
    },
    /// `attributeValueImage` carries the value; resolves to the asset URL.
    ///
    /// `value` keeps a stale `attributeValueString`. It is never emitted but
    /// still counts for the indexing-directive filter.
    Image {
        key: Option<String>,
        image: Option<ImageReference>,
        value: Option<String>,
    },
}

impl MetaAttribute {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    pub fn image(key: impl Into<String>, image: Option<ImageReference>) -> Self {
        Self::Image {
            key: Some(key.into()),
            image,
            value: None,
        }
    }

    /// The tag attribute name (`attributeKey`).
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Text { key, .. } | Self::Image { key, .. } => key.as_deref(),
        }
    }

    /// The `attributeValueString` as stored, whatever the attribute type.
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Self::Text { value, .. } | Self::Image { value, .. } => value.as_deref(),
        }
    }
}

/// Wire shape of [`MetaAttribute`] before dispatch.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawMetaAttribute {
    attribute_type: Option<String>,
    attribute_key: Option<String>,
    attribute_value_string: Option<String>,
    attribute_value_image: Option<ImageReference>,
}

impl From<RawMetaAttribute> for MetaAttribute {
    fn from(raw: RawMetaAttribute) -> Self {
        match raw.attribute_type.as_deref() {
            Some(ATTRIBUTE_TYPE_IMAGE) => Self::Image {
                key: raw.attribute_key,
                image: raw.attribute_value_image,
                value: raw.attribute_value_string,
            },
            _ => Self::Text {
                key: raw.attribute_key,
                value: raw.attribute_value_string,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_all_defaults() {
        let record: SeoRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, SeoRecord::default());
    }

    #[test]
    fn nulls_are_absent() {
        let record: SeoRecord = serde_json::from_value(json!({
            "metaTitle": null,
            "seoKeywords": null,
            "nofollowAttributes": null,
            "openGraph": null,
            "additionalMetaTags": null
        }))
        .unwrap();
        assert!(record.meta_title.is_none());
        assert!(record.seo_keywords.is_empty());
        assert!(!record.nofollow_attributes);
        assert!(record.open_graph.is_none());
        assert!(record.additional_meta_tags.is_none());
    }

    #[test]
    fn null_list_entries_are_dropped() {
        let record: SeoRecord = serde_json::from_value(json!({
            "seoKeywords": ["rust", null, "seo"],
            "additionalMetaTags": [null, {"metaAttributes": [null]}]
        }))
        .unwrap();
        assert_eq!(record.seo_keywords, vec!["rust", "seo"]);
        let groups = record.additional_meta_tags.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].meta_attributes, Some(vec![]));
    }

    #[test]
    fn full_record() {
        let record: SeoRecord = serde_json::from_value(json!({
            "_type": "seoMetaFields",
            "metaTitle": "Hello",
            "metaDescription": "World",
            "nofollowAttributes": true,
            "openGraph": {
                "_type": "openGraph",
                "siteName": "Site",
                "image": {
                    "_type": "customImage",
                    "asset": {"_id": "image-abc", "url": "https://cdn.example.com/a.png", "size": 12},
                    "crop": {"top": 0.0, "bottom": 0.1, "left": 0.0, "right": 0.0},
                    "hotspot": {"x": 0.5, "y": 0.5, "height": 1.0, "width": 1.0}
                }
            },
            "twitter": {"site": "@site", "creator": "@me", "cardType": "summary"}
        }))
        .unwrap();
        assert_eq!(record.meta_title.as_deref(), Some("Hello"));
        assert!(record.nofollow_attributes);
        let og = record.open_graph.unwrap();
        assert_eq!(og.site_name.as_deref(), Some("Site"));
        let image = og.image.unwrap();
        assert_eq!(
            image.asset.and_then(|a| a.url).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(image.hotspot.and_then(|h| h.x), Some(0.5));
        assert_eq!(record.twitter.unwrap().card_type.as_deref(), Some("summary"));
    }

    mod attribute {
        use super::*;

        #[test]
        fn string_type() {
            let attr: MetaAttribute = serde_json::from_value(json!({
                "attributeType": "string",
                "attributeKey": "name",
                "attributeValueString": "robots"
            }))
            .unwrap();
            assert_eq!(attr, MetaAttribute::text("name", "robots"));
        }

        #[test]
        fn missing_type_is_text() {
            let attr: MetaAttribute = serde_json::from_value(json!({
                "attributeKey": "content",
                "attributeValueString": "x"
            }))
            .unwrap();
            assert_eq!(attr.string_value(), Some("x"));
        }

        #[test]
        fn image_type() {
            let attr: MetaAttribute = serde_json::from_value(json!({
                "attributeType": "image",
                "attributeKey": "content",
                "attributeValueString": "stale",
                "attributeValueImage": {"asset": {"url": "https://cdn/x.png"}}
            }))
            .unwrap();
            assert_eq!(
                attr,
                MetaAttribute::Image {
                    key: Some("content".into()),
                    image: Some(ImageReference::with_url("https://cdn/x.png")),
                    value: Some("stale".into()),
                }
            );
            assert_eq!(attr.string_value(), Some("stale"));
        }

        #[test]
        fn missing_key() {
            let attr: MetaAttribute =
                serde_json::from_value(json!({"attributeValueString": "x"})).unwrap();
            assert_eq!(attr.key(), None);
        }
    }
}
