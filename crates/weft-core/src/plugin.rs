//! Plugin registry
//!
//! A plugin, to this engine, is only a theme-fragment producer: a pure
//! function from an immutable snapshot of the theme merged so far to a
//! new fragment. What capability a plugin adds beyond its theme
//! contribution is opaque here. Registration order is preserved and is
//! the sole tie-breaker for merge precedence.

use crate::error::WeftError;
use crate::result::Result;
use crate::theme::{PaletteSet, Theme, ThemeMap};
use std::fmt;

/// Error type a fragment producer may fail with
pub type PluginFailure = Box<dyn std::error::Error + Send + Sync>;

/// A plugin's partial theme contribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeFragment {
    pub tokens: ThemeMap,
    pub palettes: Vec<PaletteSet>,
}

impl ThemeFragment {
    pub fn with_tokens(tokens: ThemeMap) -> Self {
        Self {
            tokens,
            palettes: Vec::new(),
        }
    }

    pub fn with_palettes(palettes: Vec<PaletteSet>) -> Self {
        Self {
            tokens: ThemeMap::new(),
            palettes,
        }
    }
}

type FragmentProducer =
    Box<dyn Fn(&Theme) -> std::result::Result<ThemeFragment, PluginFailure> + Send + Sync>;

/// An opaque plugin: an identifier plus a fragment producer
pub struct PluginDescriptor {
    id: String,
    produce: FragmentProducer,
}

impl PluginDescriptor {
    pub fn new<F>(id: impl Into<String>, produce: F) -> Self
    where
        F: Fn(&Theme) -> std::result::Result<ThemeFragment, PluginFailure> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            produce: Box::new(produce),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Invoke the producer over a theme snapshot. A failure is wrapped
    /// with the plugin's identifier and aborts the surrounding load.
    pub fn fragment(&self, snapshot: &Theme) -> Result<ThemeFragment> {
        (self.produce)(snapshot).map_err(|source| WeftError::plugin(&self.id, source))
    }
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Ordered catalog of available plugins
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin; registration order is preserved
    pub fn register(&mut self, descriptor: PluginDescriptor) -> &mut Self {
        self.plugins.push(descriptor);
        self
    }

    /// Resolve a plugin reference by identifier
    pub fn get(&self, id: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.id == id)
    }

    /// Registered plugin identifiers, in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeValue;

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = PluginRegistry::new();
        registry
            .register(PluginDescriptor::new("typography", |_| {
                Ok(ThemeFragment::default())
            }))
            .register(PluginDescriptor::new("forms", |_| {
                Ok(ThemeFragment::default())
            }));

        assert_eq!(registry.ids(), vec!["typography", "forms"]);
        assert!(registry.get("forms").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn producer_reads_the_snapshot_passed_in() {
        let plugin = PluginDescriptor::new("echo", |snapshot: &Theme| {
            let mut tokens = ThemeMap::new();
            let count = snapshot.tokens.len() as f64;
            tokens.insert("seenSections".to_string(), ThemeValue::Number(count));
            Ok(ThemeFragment::with_tokens(tokens))
        });

        let mut snapshot = Theme::default();
        snapshot
            .tokens
            .insert("colors".to_string(), ThemeValue::Map(ThemeMap::new()));

        let fragment = plugin.fragment(&snapshot).unwrap();
        assert_eq!(
            fragment.tokens.get("seenSections"),
            Some(&ThemeValue::Number(1.0))
        );
    }

    #[test]
    fn producer_failure_is_wrapped_with_the_plugin_id() {
        let plugin = PluginDescriptor::new("broken", |_: &Theme| {
            Err("palette file missing".to_string().into())
        });

        let err = plugin.fragment(&Theme::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken"));
        assert!(err.to_string().contains("palette file missing"));
    }
}
