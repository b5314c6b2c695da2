//! Weft Core
//!
//! Configuration-resolution and content-scanning engine for the weft
//! utility-first CSS tool. This crate merges the base design-token theme
//! with user extensions and plugin fragments into one immutable resolved
//! theme, and expands content-glob patterns into the ordered list of
//! source files to scan for class-name usage. Scanning file contents and
//! emitting CSS are collaborators' jobs, not this crate's.

pub mod config;
pub mod discovery;
pub mod error;
pub mod pattern;
pub mod plugin;
pub mod result;
pub mod theme;

// Re-export commonly used types
pub use config::{Assembler, ConfigLoader, ResolvedConfig};
pub use discovery::ContentResolver;
pub use error::{ErrorKind, WeftError};
pub use pattern::{ContentPattern, Segment};
pub use plugin::{PluginDescriptor, PluginRegistry, ThemeFragment};
pub use result::Result;
pub use theme::{PaletteSet, Theme, ThemeMap, ThemeValue, default_theme};

/// Initialize the tracing subscriber for logging.
///
/// `default_filter` applies when `RUST_LOG` is unset
/// (e.g. `"weft_core=info"`).
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
