//! SEO metadata resolution.
//!
//! Pure functions turning a content-store [`SeoRecord`] into
//! [`ResolvedMetadata`] for the page head.
//!
//! ```text
//! SeoRecord
//!   ├── image      ImageReference -> URL
//!   ├── attribute  MetaAttribute list -> MetaTag
//!   ├── filter     MetaTagGroup list -> Vec<MetaTag> (noindex/nofollow policy)
//!   ├── og         OpenGraph/Twitter -> OpenGraphMeta/TwitterMeta
//!   ├── canonical  base URL + page path
//!   └── assemble   everything above -> ResolvedMetadata
//! ```
//!
//! `head` renders the result; it is a consumer, not part of resolution.

pub mod assemble;
pub mod attribute;
pub mod canonical;
pub mod filter;
pub mod head;
pub mod image;
pub mod og;
pub mod record;

pub use assemble::{ResolvedMetadata, assemble, keywords_tag};
pub use attribute::{MetaTag, resolve_attributes};
pub use canonical::canonical_url;
pub use filter::filter_meta_tags;
pub use head::render_head;
pub use image::resolve_image;
pub use og::{OpenGraphImage, OpenGraphMeta, TwitterMeta, resolve_open_graph, resolve_twitter};
pub use record::{
    ImageAsset, ImageReference, MetaAttribute, MetaTagGroup, OpenGraph, SeoRecord, Twitter,
};
