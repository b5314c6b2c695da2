//! Configuration file discovery and loading
//!
//! The loader only finds and parses configuration files; the parsed
//! object stays untyped (`serde_json::Value`) until the assembler
//! validates it.

use crate::error::WeftError;
use crate::result::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Config file names probed during auto-discovery, in priority order
const CONFIG_FILE_NAMES: &[&str] = &[
    "weft.config.json",
    "weft.config.yaml",
    "weft.config.yml",
    ".weftrc.json",
];

/// Discovers and loads configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a config file by traversing upward from `start_path`
    /// until one is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| WeftError::io(start_path, e))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load the raw configuration object from a specific file.
    ///
    /// JSON and YAML are supported, chosen by file extension.
    pub fn load_from_file(path: &Path) -> Result<Value> {
        let content = std::fs::read_to_string(path).map_err(|e| WeftError::io(path, e))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                WeftError::validation(path.display().to_string(), format!("invalid YAML: {e}"))
            })
        } else {
            serde_json::from_str(&content).map_err(|e| {
                WeftError::validation(path.display().to_string(), format!("invalid JSON: {e}"))
            })
        }
    }

    /// Load from an explicit path or auto-discover from `start_dir`.
    ///
    /// Returns the path the config was read from alongside the raw
    /// object; the parent directory is the project's search root.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<(PathBuf, Value)> {
        let config_path = match custom_path {
            Some(path) => {
                if !path.exists() {
                    return Err(WeftError::validation(
                        path.display().to_string(),
                        "config file not found",
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
                Self::auto_discover(search_dir)?.ok_or_else(|| {
                    WeftError::validation(
                        search_dir.display().to_string(),
                        "no config file found (weft.config.json, weft.config.yaml, or .weftrc.json); run 'weft init' to create one",
                    )
                })?
            }
        };

        let raw = Self::load_from_file(&config_path)?;
        Ok((config_path, raw))
    }
}
