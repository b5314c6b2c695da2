//! Result type alias for configuration resolution

use crate::error::WeftError;

/// Standard Result type for configuration resolution operations
pub type Result<T> = std::result::Result<T, WeftError>;
