//! seo-resolve - resolve content-store SEO records into page metadata.

mod cli;
mod config;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Commands::Resolve { args } = &cli.command {
        seo_resolve::logger::set_verbose(args.verbose);
    }

    match &cli.command {
        Commands::Init { dry } => cli::init::write_config(&cli.config, *dry),
        Commands::Resolve { args } => {
            let config = SiteConfig::load(&cli)?;
            cli::resolve::run_resolve(args, &config)
        }
    }
}
