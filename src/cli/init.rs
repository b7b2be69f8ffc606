//! Config initialization.

use anyhow::{Result, bail};
use seo_resolve::log;
use std::{fs, path::Path};

use crate::config::SiteConfig;

/// Write the seo.toml template to `path`.
///
/// If `dry_run` is true, only prints the template to stdout.
/// An existing file is never overwritten.
pub fn write_config(path: &Path, dry_run: bool) -> Result<()> {
    let template = SiteConfig::template();

    if dry_run {
        print!("{template}");
        return Ok(());
    }

    if path.exists() {
        bail!("{} already exists, refusing to overwrite", path.display());
    }

    fs::write(path, template)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
