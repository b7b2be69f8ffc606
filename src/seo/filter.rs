//! Indexing-policy filter for additional meta tags.

use super::attribute::{MetaTag, resolve_attributes};
use super::record::MetaTagGroup;
use crate::debug;

/// Substrings that mark a tag as an indexing directive.
const INDEXING_DIRECTIVES: [&str; 2] = ["noindex", "nofollow"];

/// Whether any attribute string value of the group mentions `noindex` or
/// `nofollow`. Image attributes are checked on their stored string too.
///
/// This is a plain substring test: `"max-image-preview:noindex-like"` matches.
pub fn has_indexing_directive(group: &MetaTagGroup) -> bool {
    group
        .meta_attributes
        .iter()
        .flatten()
        .filter_map(|attr| attr.string_value())
        .any(|value| INDEXING_DIRECTIVES.iter().any(|d| value.contains(d)))
}

/// Resolve additional tag groups into flat tags, in input order.
///
/// Unless `allow_indexing` is set, groups carrying an indexing directive are
/// dropped. Groups without an attribute list contribute nothing.
pub fn filter_meta_tags(groups: &[MetaTagGroup], allow_indexing: bool) -> Vec<MetaTag> {
    groups
        .iter()
        .enumerate()
        .filter(|(index, group)| {
            let excluded = !allow_indexing && has_indexing_directive(group);
            if excluded {
                debug!("filter"; "excluded meta tag group #{} (indexing directive)", index);
            }
            !excluded
        })
        .filter_map(|(_, group)| resolve_attributes(group.meta_attributes.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::record::{ImageReference, MetaAttribute};

    fn robots(content: &str) -> MetaTagGroup {
        MetaTagGroup::new(vec![
            MetaAttribute::text("name", "robots"),
            MetaAttribute::text("content", content),
        ])
    }

    fn author() -> MetaTagGroup {
        MetaTagGroup::new(vec![
            MetaAttribute::text("name", "author"),
            MetaAttribute::text("content", "Jane"),
        ])
    }

    #[test]
    fn excludes_directives_by_default() {
        let tags = filter_meta_tags(&[robots("noindex, nofollow"), author()], false);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0]["name"], "author");
    }

    #[test]
    fn allow_indexing_keeps_directives() {
        let tags = filter_meta_tags(&[robots("noindex, nofollow"), author()], true);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0]["content"], "noindex, nofollow");
        assert_eq!(tags[1]["name"], "author");
    }

    #[test]
    fn substring_match() {
        assert!(has_indexing_directive(&robots("max-image-preview:noindex-like")));
        assert!(has_indexing_directive(&robots("follow,nofollowish")));
        assert!(!has_indexing_directive(&robots("index, follow")));
    }

    #[test]
    fn image_url_is_not_matched() {
        let group = MetaTagGroup::new(vec![MetaAttribute::image(
            "content",
            Some(ImageReference::with_url("https://cdn/noindex.png")),
        )]);
        assert!(!has_indexing_directive(&group));
        assert_eq!(filter_meta_tags(&[group], false).len(), 1);
    }

    #[test]
    fn image_attribute_with_stale_string_matches() {
        let group: MetaTagGroup = serde_json::from_value(serde_json::json!({
            "metaAttributes": [
                {"attributeKey": "name", "attributeValueString": "robots"},
                {
                    "attributeType": "image",
                    "attributeKey": "content",
                    "attributeValueString": "noindex, nofollow",
                    "attributeValueImage": {"asset": {"url": "https://cdn/x.png"}}
                }
            ]
        }))
        .unwrap();
        assert!(has_indexing_directive(&group));
        assert!(filter_meta_tags(std::slice::from_ref(&group), false).is_empty());

        let kept = filter_meta_tags(&[group], true);
        assert_eq!(kept[0]["content"], "https://cdn/x.png");
    }

    #[test]
    fn absent_attribute_list_contributes_nothing() {
        let empty = MetaTagGroup::default();
        let tags = filter_meta_tags(&[empty, author()], false);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0]["name"], "author");
    }

    #[test]
    fn preserves_order() {
        let viewport = MetaTagGroup::new(vec![
            MetaAttribute::text("name", "viewport"),
            MetaAttribute::text("content", "width=device-width"),
        ]);
        let tags = filter_meta_tags(&[viewport, robots("nofollow"), author()], false);
        let names: Vec<_> = tags.iter().map(|t| t["name"].as_str()).collect();
        assert_eq!(names, ["viewport", "author"]);
    }

    #[test]
    fn no_groups() {
        assert!(filter_meta_tags(&[], false).is_empty());
    }
}
