//! Command-line interface.
//!
//! | Module    | Purpose                               |
//! |-----------|---------------------------------------|
//! | `args`    | clap definitions                      |
//! | `resolve` | `resolve` command (record -> metadata)|
//! | `init`    | `init` command (seo.toml template)    |

pub mod args;
pub mod init;
pub mod resolve;

pub use args::{Cli, Commands};
