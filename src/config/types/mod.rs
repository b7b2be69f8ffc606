//! Configuration utility types.
//!
//! | Module  | Purpose                                  |
//! |---------|------------------------------------------|
//! | `error` | ConfigError and collected diagnostics    |
//! | `field` | Field paths generated by `#[derive(Config)]` |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
