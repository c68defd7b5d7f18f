//! windcfg-core: configuration layer for a utility-CSS generator
//!
//! This crate provides the declarative record the generator reads at startup,
//! including:
//! - The configuration schema and its JSON on-disk form
//! - Validated hex color values
//! - Content glob anchoring relative to the config file
//! - Additive theme merge and flat design-token lookup
//! - Invariant checking with a serializable report
//!
//! Scanning, class extraction, and CSS generation live in the consuming
//! generator, not here.

pub mod check;
pub mod color;
pub mod config;
pub mod content;
pub mod tokens;

// Re-export commonly used types
pub use check::{check_config, CheckFinding, CheckReport, Severity};
pub use color::{ColorError, HexColor};
pub use config::{Config, ConfigError, Theme, ThemeExtend};
pub use content::{resolve_pattern, resolve_patterns};
pub use tokens::{ColorMap, ColorScale, Token};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
