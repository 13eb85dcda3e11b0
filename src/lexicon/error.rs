//! Lexicon loading and validation errors.

use thiserror::Error;

use crate::style::Property;
use crate::theme::ColorMode;

/// Error returned when a lexicon cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to parse lexicon YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A breakpoint name that could never be matched by a `<bp>:<class>` token.
    #[error("invalid breakpoint name '{name}': {reason}")]
    InvalidBreakpoint { name: String, reason: &'static str },

    /// A breakpoint name equal to an output property key, whose nested
    /// mapping would overwrite that property.
    #[error("breakpoint name '{name}' collides with the '{property}' style property")]
    ReservedBreakpoint { name: String, property: Property },

    #[error("{mode} theme preset has an empty {field}")]
    EmptyThemeColor {
        mode: ColorMode,
        field: &'static str,
    },
}
