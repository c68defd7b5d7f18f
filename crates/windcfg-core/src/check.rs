//! Configuration checking.
//!
//! The record itself carries no error paths; this module is where the
//! documented invariants get surfaced as diagnostics. Malformed hex colors
//! never reach here: the `HexColor` type rejects them at parse time.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Result of checking a configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Findings, in the order the fields were examined.
    pub findings: Vec<CheckFinding>,
}

/// A single diagnostic finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFinding {
    /// Config field the finding refers to (e.g. `content[2]`).
    pub field: String,

    /// Whether the finding blocks consumption.
    pub severity: Severity,

    /// Human-readable description.
    pub message: String,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth surfacing, but the config is still usable.
    Warning,
    /// The config violates an invariant the consumer relies on.
    Error,
}

impl CheckReport {
    /// True when no error-severity findings were recorded.
    pub fn ok(&self) -> bool {
        self.findings.iter().all(|f| f.severity != Severity::Error)
    }

    /// Number of error findings.
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Number of warning findings.
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}

/// Check a configuration against its documented invariants.
pub fn check_config(config: &Config) -> CheckReport {
    let mut findings = Vec::new();

    let mut seen = HashSet::new();
    for (i, pattern) in config.content.iter().enumerate() {
        if pattern.trim().is_empty() {
            findings.push(CheckFinding {
                field: format!("content[{i}]"),
                severity: Severity::Error,
                message: "glob pattern must be a non-empty string".to_string(),
            });
            continue;
        }
        if Path::new(pattern).is_absolute() {
            findings.push(CheckFinding {
                field: format!("content[{i}]"),
                severity: Severity::Warning,
                message: format!(
                    "pattern {pattern:?} is absolute; patterns are interpreted relative to the config file"
                ),
            });
        }
        if !seen.insert(pattern.as_str()) {
            findings.push(CheckFinding {
                field: format!("content[{i}]"),
                severity: Severity::Warning,
                message: format!("duplicate pattern {pattern:?}"),
            });
        }
    }

    for (family, scale) in config.colors().families() {
        if scale.is_empty() {
            findings.push(CheckFinding {
                field: format!("theme.extend.colors.{family}"),
                severity: Severity::Warning,
                message: "color family has no shades and generates no tokens".to_string(),
            });
        }
    }

    if !config.plugins.is_empty() {
        findings.push(CheckFinding {
            field: "plugins".to_string(),
            severity: Severity::Warning,
            message: format!(
                "{} plugin reference(s) present; this configuration mode loads zero plugins",
                config.plugins.len()
            ),
        });
    }

    CheckReport { findings }
}
