//! Content glob handling.
//!
//! Patterns are authored relative to the config file's own directory. This
//! module anchors them there so the external scanner receives one absolute
//! pattern per entry. Matching itself (`*`/`**` semantics, enumeration of
//! real files) belongs to the scanner; zero matches is valid, not an error.

use std::path::{Component, Path, PathBuf};

use crate::config::Config;

/// Anchor every pattern at `config_dir`, preserving order.
pub fn resolve_patterns(patterns: &[String], config_dir: &Path) -> Vec<String> {
    patterns
        .iter()
        .map(|pattern| resolve_pattern(pattern, config_dir))
        .collect()
}

/// Anchor a single pattern at `config_dir`.
///
/// Leading `..` segments are collapsed lexically, so the result stays a plain
/// pattern string and never touches the filesystem. Absolute patterns pass
/// through unchanged apart from normalization. Separators come out as `/`.
pub fn resolve_pattern(pattern: &str, config_dir: &Path) -> String {
    let joined = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        config_dir.join(pattern)
    };
    let normalized = normalize_lexically(&joined);
    normalized.to_string_lossy().replace('\\', "/")
}

impl Config {
    /// Content patterns anchored at the directory the config file lives in.
    pub fn resolved_content(&self, config_dir: &Path) -> Vec<String> {
        resolve_patterns(&self.content, config_dir)
    }
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// A `..` that cannot be collapsed (at the root, or past the start of a
/// relative path) is kept as-is.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_collapses_parent_segments() {
        let dir = Path::new("/project/theme/static_src");
        assert_eq!(
            resolve_pattern("../templates/**/*.html", dir),
            "/project/theme/templates/**/*.html"
        );
        assert_eq!(
            resolve_pattern("../../templates/**/*.html", dir),
            "/project/templates/**/*.html"
        );
        assert_eq!(
            resolve_pattern("../../**/templates/**/*.html", dir),
            "/project/**/templates/**/*.html"
        );
        assert_eq!(resolve_pattern("../../**/*.py", dir), "/project/**/*.py");
    }

    #[test]
    fn test_resolve_plain_relative() {
        let dir = Path::new("/project");
        assert_eq!(resolve_pattern("src/**/*.html", dir), "/project/src/**/*.html");
    }

    #[test]
    fn test_resolve_curdir_segments() {
        let dir = Path::new("/project");
        assert_eq!(resolve_pattern("./src/./*.py", dir), "/project/src/*.py");
    }

    #[test]
    fn test_resolve_absolute_passes_through() {
        let dir = Path::new("/project");
        assert_eq!(resolve_pattern("/other/**/*.html", dir), "/other/**/*.html");
    }

    #[test]
    fn test_resolve_parent_at_root_is_kept() {
        let dir = Path::new("/");
        assert_eq!(resolve_pattern("../x.py", dir), "/../x.py");
    }

    #[test]
    fn test_resolve_patterns_preserves_order() {
        let dir = Path::new("/project/theme/static_src");
        let patterns: Vec<String> = vec![
            "../templates/**/*.html".into(),
            "../../templates/**/*.html".into(),
            "../../**/templates/**/*.html".into(),
            "../../**/*.py".into(),
        ];

        let resolved = resolve_patterns(&patterns, dir);
        assert_eq!(
            resolved,
            vec![
                "/project/theme/templates/**/*.html",
                "/project/templates/**/*.html",
                "/project/**/templates/**/*.html",
                "/project/**/*.py",
            ]
        );
    }

    #[test]
    fn test_resolved_content_on_config() {
        let config = crate::config::Config::default();
        let resolved = config.resolved_content(Path::new("/site/theme/static_src"));

        assert_eq!(resolved.len(), 4);
        assert_eq!(resolved[0], "/site/theme/templates/**/*.html");
        assert_eq!(resolved[3], "/site/**/*.py");
    }
}
