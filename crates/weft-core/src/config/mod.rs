//! Configuration system
//!
//! This module turns a raw, untyped configuration object into one
//! immutable [`ResolvedConfig`]:
//!
//! - [`loader`] discovers and parses `weft.config.json` /
//!   `weft.config.yaml` files into an untyped `serde_json::Value`
//! - [`assembler`] validates the shape, expands content patterns,
//!   folds the theme (base ← extend ← plugin fragments), and emits
//!   the final result
//!
//! ## Example configuration (weft.config.json)
//!
//! ```json
//! {
//!   "content": [
//!     "view/**/*.templ",
//!     "view/**/*.go"
//!   ],
//!   "theme": {
//!     "extend": {
//!       "colors": { "primary": "#6366f1" }
//!     },
//!     "palettes": {
//!       "corporate": { "styled": true, "primary": "#4b6bfb" }
//!     }
//!   },
//!   "plugins": ["palettes"],
//!   "styled": true
//! }
//! ```

mod assembler;
mod loader;

pub use assembler::{Assembler, ResolvedConfig};
pub use loader::ConfigLoader;
