//! `[site]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site-level settings shared by every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Base URL prefixed to page paths for canonical URLs (e.g., "https://example.com").
    /// Can be overridden with `--base-url` or `SEO_BASE_URL`.
    #[config(inline_doc = "Site URL, used as canonical URL prefix")]
    pub url: Option<String>,
}

impl SiteSectionConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with http(s) scheme and a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = self.url.as_deref().filter(|url| !url.is_empty()) else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Strip one trailing `/` so that joining with a page path
    /// never produces `//`.
    pub fn normalize_url(&mut self) {
        if let Some(url) = self.url.as_mut()
            && url.ends_with('/')
        {
            url.pop();
        }
    }
}
