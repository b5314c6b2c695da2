//! Theme merging
//!
//! Deep merge of design-token maps plus accumulation of named palette
//! sets. Merging is right-biased at leaf granularity: a later source
//! overrides an earlier one only at the key paths it actually mentions;
//! sibling keys under a shared prefix survive untouched. Lists are
//! opaque terminals and replace wholesale.

use super::{PaletteSet, ThemeMap, ThemeValue};
use crate::error::WeftError;
use crate::result::Result;
use std::collections::HashMap;

/// Deep-merge `overlay` onto `base`, returning a new map.
///
/// Where both sides hold nested mappings the merge recurses; any other
/// shape combination takes the overlay's value outright, including a
/// terminal replacing a mapping (the later source's shape wins). Neither
/// input is mutated.
pub fn merge_tokens(base: &ThemeMap, overlay: &ThemeMap) -> ThemeMap {
    let mut merged = base.clone();
    for (key, overlay_value) in overlay {
        match (merged.get_mut(key), overlay_value) {
            (Some(ThemeValue::Map(base_map)), ThemeValue::Map(overlay_map)) => {
                *base_map = merge_tokens(base_map, overlay_map);
            }
            _ => {
                merged.insert(key.clone(), overlay_value.clone());
            }
        }
    }
    merged
}

/// Folds palette sets from successive sources, rejecting duplicate names.
///
/// Palette names are case-sensitive; a name arriving twice is a
/// validation failure naming both contributing sources, never a silent
/// overwrite. Distinct names accumulate in declaration order.
#[derive(Debug, Default)]
pub struct PaletteAccumulator {
    palettes: Vec<PaletteSet>,
    sources: HashMap<String, String>,
}

impl PaletteAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one source's palette sets, labelled for error reporting
    /// (e.g. `theme.palettes` or `plugin 'branding'`)
    pub fn extend(
        &mut self,
        palettes: impl IntoIterator<Item = PaletteSet>,
        source: &str,
    ) -> Result<()> {
        for palette in palettes {
            if let Some(first_source) = self.sources.get(&palette.name) {
                return Err(WeftError::duplicate_palette(
                    &palette.name,
                    first_source,
                    source,
                ));
            }
            self.sources
                .insert(palette.name.clone(), source.to_string());
            self.palettes.push(palette);
        }
        Ok(())
    }

    /// Palette sets accumulated so far, in declaration order
    pub fn as_slice(&self) -> &[PaletteSet] {
        &self.palettes
    }

    pub fn into_palettes(self) -> Vec<PaletteSet> {
        self.palettes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{lookup, map_from_json};
    use serde_json::json;

    fn tokens(value: serde_json::Value) -> ThemeMap {
        map_from_json(value.as_object().unwrap(), "test").unwrap()
    }

    #[test]
    fn sibling_keys_survive_a_deep_merge() {
        let base = tokens(json!({ "colors": { "primary": "#000" } }));
        let extend = tokens(json!({ "colors": { "secondary": "#fff" } }));

        let merged = merge_tokens(&base, &extend);

        assert_eq!(
            lookup(&merged, "colors.primary"),
            Some(&ThemeValue::Str("#000".into()))
        );
        assert_eq!(
            lookup(&merged, "colors.secondary"),
            Some(&ThemeValue::Str("#fff".into()))
        );
    }

    #[test]
    fn untouched_base_leaves_are_preserved_exactly() {
        let base = tokens(json!({
            "colors": { "gray": { "500": "#6b7280", "900": "#111827" } },
            "spacing": { "4": "1rem" },
        }));
        let extend = tokens(json!({ "colors": { "gray": { "500": "#808080" } } }));

        let merged = merge_tokens(&base, &extend);

        assert_eq!(
            lookup(&merged, "colors.gray.500"),
            Some(&ThemeValue::Str("#808080".into()))
        );
        assert_eq!(
            lookup(&merged, "colors.gray.900"),
            Some(&ThemeValue::Str("#111827".into()))
        );
        assert_eq!(
            lookup(&merged, "spacing.4"),
            Some(&ThemeValue::Str("1rem".into()))
        );
    }

    #[test]
    fn lists_replace_rather_than_concatenate() {
        let base = tokens(json!({ "fontFamily": { "sans": ["system-ui"] } }));
        let extend = tokens(json!({ "fontFamily": { "sans": ["poppins", "sans-serif"] } }));

        let merged = merge_tokens(&base, &extend);

        assert_eq!(
            lookup(&merged, "fontFamily.sans"),
            Some(&ThemeValue::List(vec![
                ThemeValue::Str("poppins".into()),
                ThemeValue::Str("sans-serif".into()),
            ]))
        );
    }

    #[test]
    fn later_shape_wins_over_earlier_shape() {
        // terminal replaces mapping
        let base = tokens(json!({ "colors": { "primary": { "500": "#000" } } }));
        let extend = tokens(json!({ "colors": { "primary": "#123456" } }));
        let merged = merge_tokens(&base, &extend);
        assert_eq!(
            lookup(&merged, "colors.primary"),
            Some(&ThemeValue::Str("#123456".into()))
        );

        // mapping replaces terminal, recursion does not apply
        let merged_back = merge_tokens(&merged, &base);
        assert_eq!(
            lookup(&merged_back, "colors.primary.500"),
            Some(&ThemeValue::Str("#000".into()))
        );
    }

    #[test]
    fn merge_never_mutates_its_inputs() {
        let base = tokens(json!({ "colors": { "primary": "#000" } }));
        let extend = tokens(json!({ "colors": { "primary": "#fff" } }));
        let base_before = base.clone();
        let extend_before = extend.clone();

        let _ = merge_tokens(&base, &extend);

        assert_eq!(base, base_before);
        assert_eq!(extend, extend_before);
    }

    #[test]
    fn palette_names_accumulate_in_declaration_order() {
        let mut acc = PaletteAccumulator::new();
        acc.extend(
            [PaletteSet::new("corporate", true, ThemeMap::new())],
            "theme.palettes",
        )
        .unwrap();
        acc.extend(
            [
                PaletteSet::new("night", true, ThemeMap::new()),
                PaletteSet::new("paper", false, ThemeMap::new()),
            ],
            "plugin 'palettes'",
        )
        .unwrap();

        let names: Vec<&str> = acc.as_slice().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["corporate", "night", "paper"]);
    }

    #[test]
    fn duplicate_palette_names_fail_with_both_sources() {
        let mut acc = PaletteAccumulator::new();
        acc.extend(
            [PaletteSet::new("listenup", true, ThemeMap::new())],
            "plugin 'branding'",
        )
        .unwrap();
        let err = acc
            .extend(
                [PaletteSet::new("listenup", false, ThemeMap::new())],
                "plugin 'skins'",
            )
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("listenup"));
        assert!(message.contains("plugin 'branding'"));
        assert!(message.contains("plugin 'skins'"));
    }

    #[test]
    fn palette_names_are_case_sensitive() {
        let mut acc = PaletteAccumulator::new();
        acc.extend(
            [
                PaletteSet::new("Night", true, ThemeMap::new()),
                PaletteSet::new("night", true, ThemeMap::new()),
            ],
            "theme.palettes",
        )
        .unwrap();
        assert_eq!(acc.as_slice().len(), 2);
    }
}
