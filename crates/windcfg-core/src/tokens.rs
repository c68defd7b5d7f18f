//! Design-token resolution.
//!
//! This module defines the two-level color map (`family` -> `shade` -> value)
//! and the operations the consuming generator relies on: additive merge over a
//! base palette and flat `family-shade` token lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::HexColor;

/// Shades within a single color family, keyed by shade name (e.g. `"light"`).
pub type ColorScale = BTreeMap<String, HexColor>;

/// Color families keyed by family name (e.g. `"primary"`).
///
/// `BTreeMap` keeps family and shade names unique and iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMap(pub BTreeMap<String, ColorScale>);

/// A flattened design token: `family-shade` name plus its color value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub value: HexColor,
}

impl ColorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of families.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Shades for a family, if present.
    pub fn get(&self, family: &str) -> Option<&ColorScale> {
        self.0.get(family)
    }

    /// Iterate families in name order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &ColorScale)> {
        self.0.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    /// Merge this map additively over a base palette.
    ///
    /// Every base family and shade survives. Families only present here are
    /// added whole; where a family exists in both, shades are merged per name
    /// with this map winning on conflicts. The base is never truncated, so the
    /// merge extends rather than replaces.
    pub fn merged_over(&self, base: &ColorMap) -> ColorMap {
        let mut merged = base.clone();
        for (family, scale) in &self.0 {
            let target = merged.0.entry(family.clone()).or_default();
            for (shade, color) in scale {
                target.insert(shade.clone(), color.clone());
            }
        }
        merged
    }

    /// Flatten to `family-shade` tokens in deterministic name order.
    pub fn flatten(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (family, scale) in &self.0 {
            for (shade, color) in scale {
                tokens.push(Token {
                    name: format!("{family}-{shade}"),
                    value: color.clone(),
                });
            }
        }
        tokens
    }

    /// Resolve a flat token name (e.g. `"primary-light"`) to its color.
    ///
    /// Family names may themselves contain hyphens, so the split point is
    /// ambiguous; the longest family name that matches wins.
    pub fn resolve(&self, name: &str) -> Option<&HexColor> {
        let mut best: Option<(&str, &HexColor)> = None;
        for (family, scale) in &self.0 {
            let Some(shade) = name
                .strip_prefix(family.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                continue;
            };
            if let Some(color) = scale.get(shade) {
                let longer = best.map_or(true, |(f, _)| family.len() > f.len());
                if longer {
                    best = Some((family.as_str(), color));
                }
            }
        }
        best.map(|(_, color)| color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(shades: &[(&str, &str)]) -> ColorScale {
        shades
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.parse().unwrap()))
            .collect()
    }

    fn map(families: &[(&str, &[(&str, &str)])]) -> ColorMap {
        ColorMap(
            families
                .iter()
                .map(|(name, shades)| ((*name).to_string(), scale(shades)))
                .collect(),
        )
    }

    #[test]
    fn test_merge_adds_new_families() {
        let base = map(&[("gray", &[("light", "#f3f4f6"), ("dark", "#1f2937")])]);
        let extend = map(&[("primary", &[("light", "#667eea"), ("dark", "#764ba2")])]);

        let merged = extend.merged_over(&base);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.resolve("gray-light").unwrap().as_str(), "#f3f4f6");
        assert_eq!(merged.resolve("primary-light").unwrap().as_str(), "#667eea");
    }

    #[test]
    fn test_merge_is_deep_within_family() {
        // Extending an existing family must keep its other shades.
        let base = map(&[("primary", &[("light", "#eeeeee"), ("mid", "#888888")])]);
        let extend = map(&[("primary", &[("light", "#667eea"), ("dark", "#764ba2")])]);

        let merged = extend.merged_over(&base);
        let primary = merged.get("primary").unwrap();

        assert_eq!(primary.len(), 3);
        assert_eq!(primary["light"].as_str(), "#667eea"); // extension wins
        assert_eq!(primary["mid"].as_str(), "#888888"); // base survives
        assert_eq!(primary["dark"].as_str(), "#764ba2");
    }

    #[test]
    fn test_merge_over_empty_base() {
        let extend = map(&[("danger", &[("light", "#ef4444")])]);
        let merged = extend.merged_over(&ColorMap::default());
        assert_eq!(merged, extend);
    }

    #[test]
    fn test_flatten_names_and_order() {
        let colors = map(&[
            ("primary", &[("light", "#667eea"), ("dark", "#764ba2")]),
            ("danger", &[("light", "#ef4444"), ("dark", "#dc2626")]),
        ]);

        let names: Vec<_> = colors.flatten().into_iter().map(|t| t.name).collect();
        // BTreeMap order: families and shades alphabetical.
        assert_eq!(
            names,
            vec!["danger-dark", "danger-light", "primary-dark", "primary-light"]
        );
    }

    #[test]
    fn test_resolve_simple() {
        let colors = map(&[("primary", &[("light", "#667eea"), ("dark", "#764ba2")])]);
        assert_eq!(colors.resolve("primary-light").unwrap().as_str(), "#667eea");
        assert_eq!(colors.resolve("primary-dark").unwrap().as_str(), "#764ba2");
    }

    #[test]
    fn test_resolve_unknown() {
        let colors = map(&[("primary", &[("light", "#667eea")])]);
        assert!(colors.resolve("primary-mid").is_none());
        assert!(colors.resolve("accent-light").is_none());
        assert!(colors.resolve("primary").is_none());
        assert!(colors.resolve("primarylight").is_none());
    }

    #[test]
    fn test_resolve_prefers_longest_family() {
        // "brand-alt-light" could split as brand / alt-light or brand-alt / light.
        let colors = map(&[
            ("brand", &[("alt-light", "#111111")]),
            ("brand-alt", &[("light", "#222222")]),
        ]);
        assert_eq!(colors.resolve("brand-alt-light").unwrap().as_str(), "#222222");
    }

    #[test]
    fn test_resolve_falls_back_to_shorter_family() {
        let colors = map(&[
            ("brand", &[("alt-light", "#111111")]),
            ("brand-alt", &[("dark", "#222222")]),
        ]);
        // brand-alt has no "light" shade, so the shorter split must win.
        assert_eq!(colors.resolve("brand-alt-light").unwrap().as_str(), "#111111");
    }

    #[test]
    fn test_serde_shape_is_plain_nested_object() {
        let colors = map(&[("success", &[("light", "#10b981"), ("dark", "#059669")])]);
        let json = serde_json::to_value(&colors).unwrap();
        assert_eq!(json["success"]["light"], "#10b981");
        assert_eq!(json["success"]["dark"], "#059669");
    }
}
