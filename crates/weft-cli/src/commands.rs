//! Command handlers: resolve, files, init

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::info;
use weft_core::{
    Assembler, ConfigLoader, PaletteSet, PluginDescriptor, PluginRegistry, ResolvedConfig,
    ThemeFragment, ThemeMap, ThemeValue,
};

const STARTER_CONFIG: &str = r#"{
    "content": [
        "view/**/*.templ",
        "view/**/*.go"
    ],
    "theme": {
        "extend": {}
    },
    "plugins": []
}
"#;

/// Built-in plugins available to every project.
///
/// `palettes` contributes the stock styled palette sets; user configs
/// opt in by listing it under `plugins`.
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(PluginDescriptor::new("palettes", |_| {
        Ok(ThemeFragment::with_palettes(vec![
            stock_palette(
                "weft-light",
                &[
                    ("primary", "#6366f1"),
                    ("secondary", "#7b92b2"),
                    ("accent", "#f000b8"),
                    ("neutral", "#3d4451"),
                    ("base-100", "#ffffff"),
                ],
            ),
            stock_palette(
                "weft-dark",
                &[
                    ("primary", "#818cf8"),
                    ("secondary", "#94a3b8"),
                    ("accent", "#ff79c6"),
                    ("neutral", "#191d24"),
                    ("base-100", "#1f2937"),
                ],
            ),
        ]))
    }));
    registry
}

fn stock_palette(name: &str, roles: &[(&str, &str)]) -> PaletteSet {
    let tokens: ThemeMap = roles
        .iter()
        .map(|(role, hex)| (role.to_string(), ThemeValue::Str(hex.to_string())))
        .collect();
    PaletteSet::new(name, true, tokens)
}

fn load_and_assemble(config: Option<&Path>, project: Option<&Path>) -> Result<ResolvedConfig> {
    let (config_path, raw) =
        ConfigLoader::load(config, project).context("failed to load configuration")?;
    info!("Using config: {}", config_path.display());

    let root = match project {
        Some(path) => path.to_path_buf(),
        None => config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let registry = builtin_registry();
    let resolved = Assembler::new(root, &registry).assemble(&raw)?;
    Ok(resolved)
}

/// `weft resolve` — print the full resolved configuration as JSON
pub fn resolve(config: Option<&Path>, project: Option<&Path>) -> Result<()> {
    let resolved = load_and_assemble(config, project)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

/// `weft files` — print only the resolved content file list
pub fn files(config: Option<&Path>, project: Option<&Path>) -> Result<()> {
    let resolved = load_and_assemble(config, project)?;
    for file in &resolved.content {
        println!("{}", file.display());
    }
    Ok(())
}

/// `weft init` — write a starter config, refusing to overwrite
pub fn init(path: Option<&Path>) -> Result<()> {
    let dir = path.unwrap_or_else(|| Path::new("."));
    let target = dir.join("weft.config.json");
    if target.exists() {
        bail!("{} already exists", target.display());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    std::fs::write(&target, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", target.display()))?;
    println!("Created {}", target.display());
    Ok(())
}
