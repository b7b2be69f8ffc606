//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve content-store SEO records into page metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seo.toml)
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve an SEO record (JSON) into page metadata
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Write a commented seo.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Output format of the resolve command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// ResolvedMetadata as JSON
    #[default]
    Json,
    /// `<head>` tags
    Html,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// SEO record file (JSON). Use `-` to read from stdin.
    /// A file containing `null` resolves as a page without SEO data.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Page path, joined to the base URL for the canonical URL
    #[arg(short, long, default_value = "/")]
    pub path: String,

    /// Override site URL from seo.toml
    #[arg(short, long = "base-url", env = "SEO_BASE_URL", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Keep additional meta tags containing noindex/nofollow
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub allow_indexing: Option<bool>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
}
