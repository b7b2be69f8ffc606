//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seo.toml`:
//!
//! | Module | TOML Section | Purpose                        |
//! |--------|--------------|--------------------------------|
//! | `site` | `[site]`     | Base URL for canonical URLs    |
//! | `seo`  | `[seo]`      | Indexing policy                |

mod seo;
mod site;

pub use seo::SeoSectionConfig;
pub use site::SiteSectionConfig;
