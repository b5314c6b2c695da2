//! Theme model
//!
//! Design tokens are plain nested data: a token is addressed by a
//! hierarchical key path (`colors.primary.500`) and holds either a
//! terminal value or a nested mapping of further tokens. The tagged
//! [`ThemeValue`] representation makes the merge rules exhaustive at
//! compile time. Maps preserve declaration order.

pub mod default;
pub mod merge;

pub use default::default_theme;

use crate::error::WeftError;
use crate::result::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of key segment to theme value
pub type ThemeMap = IndexMap<String, ThemeValue>;

/// A design-token value: terminal, list, or nested mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Bool(bool),
    Number(f64),
    Str(String),
    /// Ordered terminal list (e.g. a font stack); merged as an opaque
    /// value, never element-wise
    List(Vec<ThemeValue>),
    Map(ThemeMap),
}

impl ThemeValue {
    /// Convert an untyped configuration value, tracking the field path
    /// for error reporting. `null` is rejected: a token either exists
    /// with a value or is absent.
    pub fn from_json(value: &serde_json::Value, path: &str) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(WeftError::validation(
                path,
                "null is not a valid theme value",
            )),
            serde_json::Value::Bool(b) => Ok(ThemeValue::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(ThemeValue::Number).ok_or_else(|| {
                WeftError::validation(path, "number is out of range for a theme value")
            }),
            serde_json::Value::String(s) => Ok(ThemeValue::Str(s.clone())),
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    list.push(Self::from_json(item, &format!("{path}[{idx}]"))?);
                }
                Ok(ThemeValue::List(list))
            }
            serde_json::Value::Object(entries) => {
                let mut map = ThemeMap::new();
                for (key, item) in entries {
                    map.insert(key.clone(), Self::from_json(item, &format!("{path}.{key}"))?);
                }
                Ok(ThemeValue::Map(map))
            }
        }
    }

    /// True for terminal values and lists; false for nested mappings
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ThemeValue::Map(_))
    }
}

/// Convert a whole untyped mapping into a [`ThemeMap`]
pub fn map_from_json(object: &serde_json::Map<String, serde_json::Value>, path: &str) -> Result<ThemeMap> {
    let mut map = ThemeMap::new();
    for (key, value) in object {
        map.insert(
            key.clone(),
            ThemeValue::from_json(value, &format!("{path}.{key}"))?,
        );
    }
    Ok(map)
}

/// Look up a token by dot-separated key path
pub fn lookup<'a>(tokens: &'a ThemeMap, key_path: &str) -> Option<&'a ThemeValue> {
    let mut segments = key_path.split('.');
    let mut current = tokens.get(segments.next()?)?;
    for segment in segments {
        match current {
            ThemeValue::Map(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// A named collection of semantic color-role tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSet {
    /// Case-sensitive unique name
    pub name: String,
    /// Whether default class-name styling applies to this palette
    pub styled: bool,
    /// Role tokens (`primary`, `secondary`, `accent`, `base-100`, ...)
    /// plus any extra metadata the palette carries
    pub tokens: ThemeMap,
}

impl PaletteSet {
    pub fn new(name: impl Into<String>, styled: bool, tokens: ThemeMap) -> Self {
        Self {
            name: name.into(),
            styled,
            tokens,
        }
    }
}

/// A resolved theme: merged tokens plus accumulated palette sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub tokens: ThemeMap,
    pub palettes: Vec<PaletteSet>,
}

impl Theme {
    /// Look up a token by dot-separated key path
    pub fn token(&self, key_path: &str) -> Option<&ThemeValue> {
        lookup(&self.tokens, key_path)
    }

    /// Find a palette set by name
    pub fn palette(&self, name: &str) -> Option<&PaletteSet> {
        self.palettes.iter().find(|p| p.name == name)
    }
}
