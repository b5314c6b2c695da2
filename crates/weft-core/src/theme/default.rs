//! Built-in base theme
//!
//! The stock design tokens every configuration starts from. User
//! `theme.extend` entries and plugin fragments merge on top of these.

use super::{ThemeMap, ThemeValue};

fn s(value: &str) -> ThemeValue {
    ThemeValue::Str(value.to_string())
}

fn list(values: &[&str]) -> ThemeValue {
    ThemeValue::List(values.iter().map(|v| s(v)).collect())
}

fn map(entries: &[(&str, ThemeValue)]) -> ThemeValue {
    ThemeValue::Map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

fn scale(entries: &[(&str, &str)]) -> ThemeValue {
    ThemeValue::Map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), s(v)))
            .collect(),
    )
}

/// The base design-token theme
pub fn default_theme() -> ThemeMap {
    let mut tokens = ThemeMap::new();

    tokens.insert(
        "colors".to_string(),
        map(&[
            ("inherit", s("inherit")),
            ("current", s("currentColor")),
            ("transparent", s("transparent")),
            ("black", s("#000000")),
            ("white", s("#ffffff")),
            (
                "gray",
                scale(&[
                    ("50", "#f9fafb"),
                    ("100", "#f3f4f6"),
                    ("200", "#e5e7eb"),
                    ("300", "#d1d5db"),
                    ("400", "#9ca3af"),
                    ("500", "#6b7280"),
                    ("600", "#4b5563"),
                    ("700", "#374151"),
                    ("800", "#1f2937"),
                    ("900", "#111827"),
                ]),
            ),
            (
                "indigo",
                scale(&[
                    ("50", "#eef2ff"),
                    ("100", "#e0e7ff"),
                    ("200", "#c7d2fe"),
                    ("300", "#a5b4fc"),
                    ("400", "#818cf8"),
                    ("500", "#6366f1"),
                    ("600", "#4f46e5"),
                    ("700", "#4338ca"),
                    ("800", "#3730a3"),
                    ("900", "#312e81"),
                ]),
            ),
        ]),
    );

    tokens.insert(
        "fontFamily".to_string(),
        map(&[
            (
                "sans",
                list(&["ui-sans-serif", "system-ui", "sans-serif"]),
            ),
            ("serif", list(&["ui-serif", "Georgia", "serif"])),
            (
                "mono",
                list(&["ui-monospace", "SFMono-Regular", "monospace"]),
            ),
        ]),
    );

    tokens.insert(
        "spacing".to_string(),
        scale(&[
            ("0", "0px"),
            ("px", "1px"),
            ("1", "0.25rem"),
            ("2", "0.5rem"),
            ("3", "0.75rem"),
            ("4", "1rem"),
            ("6", "1.5rem"),
            ("8", "2rem"),
            ("12", "3rem"),
            ("16", "4rem"),
            ("24", "6rem"),
        ]),
    );

    tokens.insert(
        "borderRadius".to_string(),
        scale(&[
            ("none", "0px"),
            ("sm", "0.125rem"),
            ("DEFAULT", "0.25rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("full", "9999px"),
        ]),
    );

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::lookup;

    #[test]
    fn base_theme_has_the_stock_sections() {
        let theme = default_theme();
        assert!(lookup(&theme, "colors.gray.500").is_some());
        assert!(lookup(&theme, "fontFamily.sans").is_some());
        assert!(lookup(&theme, "spacing.4").is_some());
        assert!(lookup(&theme, "borderRadius.DEFAULT").is_some());
    }

    #[test]
    fn font_stacks_are_lists() {
        let theme = default_theme();
        assert!(matches!(
            lookup(&theme, "fontFamily.mono"),
            Some(ThemeValue::List(_))
        ));
    }
}
