//! Configuration assembly
//!
//! The façade over pattern resolution, theme merging, and the plugin
//! registry. `assemble` is all-or-nothing: any violated invariant aborts
//! the load and no partially populated result ever escapes. Given the
//! same raw input and an unchanged file tree, re-assembly yields a
//! structurally equal result.

use crate::discovery::ContentResolver;
use crate::error::WeftError;
use crate::pattern::ContentPattern;
use crate::plugin::{PluginDescriptor, PluginRegistry};
use crate::result::Result;
use crate::theme::merge::{PaletteAccumulator, merge_tokens};
use crate::theme::{PaletteSet, Theme, ThemeMap, ThemeValue, default_theme, map_from_json};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The immutable output of configuration assembly.
///
/// Produced once per configuration load; nothing mutates it afterwards.
/// The rule-generation engine consumes it as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Deduplicated, ordered content file list
    pub content: Vec<PathBuf>,
    /// Final merged theme, palette sets included
    pub theme: Theme,
    /// Plugin identifiers in application order
    pub plugins: Vec<String>,
    /// Whether default class-name styling applies
    pub styled: bool,
}

/// Drives one configuration load end to end
pub struct Assembler<'a> {
    resolver: ContentResolver,
    registry: &'a PluginRegistry,
}

impl<'a> Assembler<'a> {
    /// Create an assembler for a project root and a plugin catalog
    pub fn new(root: impl Into<PathBuf>, registry: &'a PluginRegistry) -> Self {
        Self {
            resolver: ContentResolver::new(root),
            registry,
        }
    }

    /// Validate the raw configuration object and produce a
    /// [`ResolvedConfig`].
    pub fn assemble(&self, raw: &Value) -> Result<ResolvedConfig> {
        let object = raw
            .as_object()
            .ok_or_else(|| WeftError::validation("$", "configuration must be a mapping"))?;

        for key in object.keys() {
            if !matches!(key.as_str(), "content" | "theme" | "plugins" | "styled") {
                warn!(field = %key, "ignoring unrecognized configuration field");
            }
        }

        let patterns = validate_content(object)?;
        let content = self.resolver.resolve(&patterns)?;

        let (extend, theme_palettes) = validate_theme(object)?;
        let plugins = validate_plugins(object, self.registry)?;
        let styled = validate_styled(object)?;

        // Fold the theme: base <- extend, then each plugin fragment in
        // declaration order, every producer seeing the theme merged so far.
        let mut tokens = merge_tokens(&default_theme(), &extend);
        let mut palettes = PaletteAccumulator::new();
        palettes.extend(theme_palettes, "theme.palettes")?;

        for descriptor in &plugins {
            let snapshot = Theme {
                tokens: tokens.clone(),
                palettes: palettes.as_slice().to_vec(),
            };
            let fragment = descriptor.fragment(&snapshot)?;
            tokens = merge_tokens(&tokens, &fragment.tokens);
            palettes.extend(
                fragment.palettes,
                &format!("plugin '{}'", descriptor.id()),
            )?;
        }

        let resolved = ResolvedConfig {
            content,
            theme: Theme {
                tokens,
                palettes: palettes.into_palettes(),
            },
            plugins: plugins.iter().map(|p| p.id().to_string()).collect(),
            styled,
        };
        debug!(
            files = resolved.content.len(),
            plugins = resolved.plugins.len(),
            palettes = resolved.theme.palettes.len(),
            "configuration assembled"
        );
        Ok(resolved)
    }
}

fn validate_content(object: &serde_json::Map<String, Value>) -> Result<Vec<ContentPattern>> {
    let content = object
        .get("content")
        .ok_or_else(|| WeftError::validation("content", "required field is missing"))?;
    let items = content
        .as_array()
        .ok_or_else(|| WeftError::validation("content", "must be an array of pattern strings"))?;
    if items.is_empty() {
        return Err(WeftError::validation(
            "content",
            "must list at least one content pattern",
        ));
    }

    let mut patterns = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let text = item.as_str().ok_or_else(|| {
            WeftError::validation(format!("content[{idx}]"), "must be a string")
        })?;
        patterns.push(ContentPattern::compile(text)?);
    }
    Ok(patterns)
}

fn validate_theme(
    object: &serde_json::Map<String, Value>,
) -> Result<(ThemeMap, Vec<PaletteSet>)> {
    let Some(theme) = object.get("theme") else {
        return Ok((ThemeMap::new(), Vec::new()));
    };
    let sections = theme
        .as_object()
        .ok_or_else(|| WeftError::validation("theme", "must be a mapping"))?;

    let mut extend = ThemeMap::new();
    let mut palettes = Vec::new();
    for (key, value) in sections {
        match key.as_str() {
            "extend" => {
                let entries = value.as_object().ok_or_else(|| {
                    WeftError::validation("theme.extend", "must be a mapping of theme tokens")
                })?;
                extend = map_from_json(entries, "theme.extend")?;
            }
            "palettes" => {
                palettes = validate_palettes(value)?;
            }
            other => {
                // Divergent legacy shapes are an explicit migration, not
                // a silent coercion.
                return Err(WeftError::validation(
                    format!("theme.{other}"),
                    "unknown theme section; supported sections are 'extend' and 'palettes'",
                ));
            }
        }
    }
    Ok((extend, palettes))
}

fn validate_palettes(value: &Value) -> Result<Vec<PaletteSet>> {
    let entries = value.as_object().ok_or_else(|| {
        WeftError::validation("theme.palettes", "must map palette names to mappings")
    })?;

    let mut palettes = Vec::with_capacity(entries.len());
    for (name, body) in entries {
        let path = format!("theme.palettes.{name}");
        let fields = body
            .as_object()
            .ok_or_else(|| WeftError::validation(&path, "palette must be a mapping"))?;

        let mut styled = true;
        let mut tokens = ThemeMap::new();
        for (key, field) in fields {
            if key == "styled" {
                styled = field.as_bool().ok_or_else(|| {
                    WeftError::validation(format!("{path}.styled"), "must be a boolean")
                })?;
            } else {
                tokens.insert(
                    key.clone(),
                    ThemeValue::from_json(field, &format!("{path}.{key}"))?,
                );
            }
        }
        palettes.push(PaletteSet::new(name.clone(), styled, tokens));
    }
    Ok(palettes)
}

fn validate_plugins<'a>(
    object: &serde_json::Map<String, Value>,
    registry: &'a PluginRegistry,
) -> Result<Vec<&'a PluginDescriptor>> {
    let Some(value) = object.get("plugins") else {
        return Ok(Vec::new());
    };
    let items = value.as_array().ok_or_else(|| {
        WeftError::validation("plugins", "must be an array of plugin identifiers")
    })?;

    let mut plugins = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let path = format!("plugins[{idx}]");
        let id = item
            .as_str()
            .ok_or_else(|| WeftError::validation(&path, "must be a plugin identifier string"))?;
        let descriptor = registry.get(id).ok_or_else(|| {
            WeftError::validation(&path, format!("unknown plugin '{id}'"))
        })?;
        plugins.push(descriptor);
    }
    Ok(plugins)
}

fn validate_styled(object: &serde_json::Map<String, Value>) -> Result<bool> {
    match object.get("styled") {
        None => Ok(true),
        Some(value) => value
            .as_bool()
            .ok_or_else(|| WeftError::validation("styled", "must be a boolean")),
    }
}
