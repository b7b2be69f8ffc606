//! Resolve command implementation.
//!
//! Reads one SEO record (JSON) and writes the resolved metadata as JSON or
//! `<head>` markup.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use seo_resolve::{ResolvedMetadata, SeoRecord, assemble, debug, log, render_head};
use thiserror::Error;

use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::SiteConfig;

/// Errors reading the SEO record.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("`{0}` is not a valid SEO record")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, config: &SiteConfig) -> Result<()> {
    if let Some(path) = &config.config_path {
        debug!("resolve"; "using {}", path.display());
    }
    let seo = read_record(&args.input)?;
    let meta = assemble(
        seo.as_ref(),
        &args.path,
        config.base_url(),
        config.seo.allow_indexing,
    );

    let formatted = format_output(&meta, args.format, args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("resolve"; "wrote {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Read an SEO record from a file, or stdin for `-`.
///
/// A JSON `null` document yields `None`.
pub fn read_record(input: &Path) -> Result<Option<SeoRecord>, InputError> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| InputError::Io(input.to_path_buf(), err))?;
        buf
    } else {
        fs::read_to_string(input).map_err(|err| InputError::Io(input.to_path_buf(), err))?
    };
    parse_record(&content).map_err(|err| InputError::Json(input.to_path_buf(), err))
}

fn parse_record(content: &str) -> serde_json::Result<Option<SeoRecord>> {
    serde_json::from_str(content)
}

fn format_output(meta: &ResolvedMetadata, format: OutputFormat, pretty: bool) -> Result<String> {
    let formatted = match format {
        OutputFormat::Html => render_head(meta),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(meta)?,
        OutputFormat::Json => serde_json::to_string(meta)?,
    };
    Ok(formatted)
}
