//! SEO record -> normalized page metadata.

use serde::Serialize;

use super::attribute::MetaTag;
use super::canonical::canonical_url;
use super::filter::filter_meta_tags;
use super::og::{OpenGraphMeta, TwitterMeta, resolve_open_graph, resolve_twitter};
use super::record::SeoRecord;

/// Separator between keywords in the `keywords` meta tag.
const KEYWORDS_SEPARATOR: &str = ", ";

/// Metadata for one page, ready for the head renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub noindex: bool,
    pub nofollow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraphMeta>,
    pub twitter: TwitterMeta,
    /// `keywords` tag first (if any), then the filtered additional tags.
    pub meta_tags: Vec<MetaTag>,
}

/// Build the `keywords` tag, or `None` when there are no keywords.
pub fn keywords_tag(keywords: &[String]) -> Option<MetaTag> {
    if keywords.is_empty() {
        return None;
    }
    Some(MetaTag::from([
        ("name".to_owned(), "keywords".to_owned()),
        ("content".to_owned(), keywords.join(KEYWORDS_SEPARATOR)),
    ]))
}

/// Resolve an SEO record for the page at `page_path`.
///
/// Never fails: a missing record or sub-object degrades to empty defaults.
/// `nofollowAttributes` drives both `noindex` and `nofollow`.
pub fn assemble(
    seo: Option<&SeoRecord>,
    page_path: &str,
    base_url: &str,
    allow_indexing: bool,
) -> ResolvedMetadata {
    let canonical_url = canonical_url(base_url, page_path);
    let Some(seo) = seo else {
        return ResolvedMetadata {
            canonical_url,
            ..Default::default()
        };
    };

    let additional = seo
        .additional_meta_tags
        .as_deref()
        .map(|groups| filter_meta_tags(groups, allow_indexing))
        .unwrap_or_default();

    let meta_tags = keywords_tag(&seo.seo_keywords)
        .into_iter()
        .chain(additional)
        .collect();

    ResolvedMetadata {
        title: seo.meta_title.clone().unwrap_or_default(),
        description: seo.meta_description.clone().unwrap_or_default(),
        canonical_url,
        noindex: seo.nofollow_attributes,
        nofollow: seo.nofollow_attributes,
        open_graph: seo.open_graph.as_ref().map(resolve_open_graph),
        twitter: resolve_twitter(seo.twitter.as_ref()),
        meta_tags,
    }
}
