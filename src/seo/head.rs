//! Resolved metadata -> `<head>` markup.
//!
//! Emits one tag per line in a fixed order: title, robots, description,
//! Twitter card, Open Graph, canonical link, then the additional meta tags.

use super::assemble::ResolvedMetadata;
use crate::utils::html::{text_element, void_element};

/// Render metadata as newline-separated head tags.
pub fn render_head(meta: &ResolvedMetadata) -> String {
    let mut tags = Vec::new();

    if !meta.title.is_empty() {
        tags.push(text_element("title", &meta.title));
    }

    let robots = robots_content(meta);
    tags.push(meta_name("robots", &robots));

    if !meta.description.is_empty() {
        tags.push(meta_name("description", &meta.description));
    }

    let twitter = &meta.twitter;
    let twitter_tags = [
        ("twitter:card", &twitter.card_type),
        ("twitter:site", &twitter.site),
        ("twitter:creator", &twitter.handle),
    ];
    for (name, value) in twitter_tags {
        if let Some(value) = value {
            tags.push(meta_name(name, value));
        }
    }

    if let Some(og) = &meta.open_graph {
        let og_tags = [
            ("og:url", og.url.as_deref()),
            ("og:title", og.title.as_deref()),
            ("og:description", og.description.as_deref()),
            ("og:image", Some(og.image().url.as_str())),
            ("og:site_name", og.site_name.as_deref()),
        ];
        for (property, value) in og_tags {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                tags.push(void_element(
                    "meta",
                    [("property", property), ("content", value)],
                ));
            }
        }
    }

    if !meta.canonical_url.is_empty() {
        tags.push(void_element(
            "link",
            [("rel", "canonical"), ("href", meta.canonical_url.as_str())],
        ));
    }

    for tag in meta.meta_tags.iter().filter(|tag| !tag.is_empty()) {
        tags.push(void_element(
            "meta",
            tag.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ));
    }

    tags.join("\n")
}

/// `index,follow`, with each token flipped by its flag.
fn robots_content(meta: &ResolvedMetadata) -> String {
    let index = if meta.noindex { "noindex" } else { "index" };
    let follow = if meta.nofollow { "nofollow" } else { "follow" };
    format!("{index},{follow}")
}

fn meta_name(name: &str, content: &str) -> String {
    void_element("meta", [("name", name), ("content", content)])
}
