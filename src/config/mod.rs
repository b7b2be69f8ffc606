//! Configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] and [seo]
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section  | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `[site]` | Base URL for canonical URLs                  |
//! | `[seo]`  | Indexing policy for additional meta tags     |
//!
//! A missing `seo.toml` is not an error: every field has a default.

pub mod section;
pub mod types;
mod util;

pub use section::{SeoSectionConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use seo_resolve::{debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path of the loaded config file; `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub seo: SeoSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file, applies CLI overrides,
    /// then validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.apply_command_options(cli);
        config.site.normalize_url();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Base URL for canonical URLs (empty when not configured).
    pub fn base_url(&self) -> &str {
        self.site.url.as_deref().unwrap_or_default()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Resolve { args } => {
                // --base-url (or SEO_BASE_URL) beats [site] url
                if let Some(ref url) = args.base_url {
                    self.site.url = Some(url.clone());
                }
                Self::update_option(&mut self.seo.allow_indexing, args.allow_indexing.as_ref());
            }
            Commands::Init { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate_field_status(&mut diag);
        self.seo.validate_field_status(&mut diag);

        self.site.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // template
    // ========================================================================

    /// Generate seo.toml content with comments.
    pub fn template() -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "# seo-resolve configuration file (v{})\n\n",
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&SiteSectionConfig::template_with_header());
        out.push('\n');
        out.push_str(&SeoSectionConfig::template_with_header());
        out
    }
}

// ============================================================================
// tests
// ============================================================================
