//! `[seo]` configuration (indexing policy).

use macros::Config;
use serde::{Deserialize, Serialize};

/// Indexing policy for resolved metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "seo")]
pub struct SeoSectionConfig {
    /// Keep additional meta tags containing `noindex`/`nofollow`.
    /// When false, such tags are dropped from the output.
    #[config(inline_doc = "Keep noindex/nofollow additional meta tags")]
    pub allow_indexing: bool,
}
