//! Resolve SEO records from a headless content store into page metadata.
//!
//! ```ignore
//! let seo: Option<SeoRecord> = serde_json::from_str(json)?;
//! let meta = seo_resolve::assemble(seo.as_ref(), "about", "https://example.com", false);
//! println!("{}", seo_resolve::render_head(&meta));
//! ```

pub mod logger;
pub mod seo;
pub mod utils;

pub use seo::{ResolvedMetadata, SeoRecord, assemble, render_head};
