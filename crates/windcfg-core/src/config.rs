//! Configuration schema for the utility-CSS generator.
//!
//! This module defines the declarative record the generator reads once at
//! startup: which files to scan for class usage, which design tokens to add
//! on top of the built-in theme, and which plugins to load. The record itself
//! carries no behavior beyond load, save, and read access.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::HexColor;
use crate::tokens::ColorMap;

/// Main configuration record.
///
/// Immutable after load: consumers receive a shared reference and read it
/// once per build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns scanned for class usage, relative to the config file's
    /// directory. Order is preserved on round-trip; duplicates are harmless.
    #[serde(default)]
    pub content: Vec<String>,

    /// Theme customization merged over the generator's built-in defaults.
    #[serde(default)]
    pub theme: Theme,

    /// Plugin references. The canonical instance loads zero plugins.
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// Theme section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Tokens added additively; built-in defaults stay available.
    #[serde(default)]
    pub extend: ThemeExtend,
}

/// Additive theme extension, keyed by design-token category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtend {
    /// Extra color families.
    #[serde(default)]
    pub colors: ColorMap,
}

impl ThemeExtend {
    /// Merge the extension's colors additively over a base palette.
    pub fn merge_over(&self, base: &ColorMap) -> ColorMap {
        self.colors.merged_over(base)
    }
}

/// Content patterns of the canonical instance.
const DEFAULT_CONTENT: &[&str] = &[
    "../templates/**/*.html",
    "../../templates/**/*.html",
    "../../**/templates/**/*.html",
    "../../**/*.py",
];

/// Color families of the canonical instance.
const DEFAULT_COLORS: &[(&str, &[(&str, &str)])] = &[
    ("primary", &[("light", "#667eea"), ("dark", "#764ba2")]),
    ("success", &[("light", "#10b981"), ("dark", "#059669")]),
    ("danger", &[("light", "#ef4444"), ("dark", "#dc2626")]),
];

impl Default for Config {
    /// The canonical instance: 4 content globs, 3 two-shade color families,
    /// no plugins.
    fn default() -> Self {
        let colors = ColorMap(
            DEFAULT_COLORS
                .iter()
                .map(|(family, shades)| {
                    let scale = shades
                        .iter()
                        .map(|(shade, value)| ((*shade).to_string(), hex_literal(value)))
                        .collect();
                    ((*family).to_string(), scale)
                })
                .collect(),
        );

        Self {
            content: DEFAULT_CONTENT.iter().map(|s| (*s).to_string()).collect(),
            theme: Theme {
                extend: ThemeExtend { colors },
            },
            plugins: Vec::new(),
        }
    }
}

fn hex_literal(value: &str) -> HexColor {
    value.parse().expect("built-in color literal is valid hex")
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to the canonical defaults when the
    /// file is missing. A file that exists but fails to parse is still an
    /// error; it is never silently replaced.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "Config file not found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file with an atomic write.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ConfigError::Io)?;
            }
        }
        atomic_write(path, content.as_bytes()).map_err(ConfigError::Io)
    }

    /// The content patterns as authored, in order.
    pub fn content_patterns(&self) -> &[String] {
        &self.content
    }

    /// The extension color map.
    pub fn colors(&self) -> &ColorMap {
        &self.theme.extend.colors
    }
}

/// Write content atomically using temp file + fsync + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Unique temp filename from timestamp and process ID
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let pid = std::process::id();

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("file");
    let tmp_name = format!("{file_name}.{timestamp}.{pid}.tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = (|| {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        // Best-effort cleanup
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
