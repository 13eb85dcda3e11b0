//! # Tailstyle - utility classes to style mappings
//!
//! Tailstyle turns a whitespace-separated list of utility classes
//! (Tailwind-like syntax) into a mapping of style properties that a UI
//! rendering layer can consume directly.
//!
//! ```rust
//! use tailstyle::{parse, Property};
//!
//! let styles = parse("flex flex-row justify-between items-center p-2 rounded-xl");
//!
//! assert_eq!(styles.get_str(Property::Display), Some("flex"));
//! assert_eq!(styles.get_str(Property::JustifyContent), Some("space-between"));
//! assert_eq!(styles.get_str(Property::Padding), Some("8px"));
//! assert_eq!(styles.get_number(Property::BorderRadius), Some(12.0));
//! ```
//!
//! ## Core concepts
//!
//! - [`StyleEngine`]: applies the class rules to a string
//! - [`StyleMapping`]: the result; scalar values plus nested breakpoint mappings
//! - [`Lexicon`]: the lookup tables (palette, spacing, fonts, breakpoints, ...)
//! - [`ThemeChoice`]: light, dark, or adaptive seed colors
//!
//! ## Behavior
//!
//! Parsing is total: unknown classes are ignored, and values that cannot be
//! resolved are left out rather than filled with placeholders. Every result
//! starts with `backgroundColor` and `color` from the theme preset; later
//! classes overwrite earlier ones key by key.
//!
//! Breakpoint classes (`sm:`, `md:`, `lg:`) apply their remainder into a
//! nested mapping under the breakpoint name:
//!
//! ```rust
//! use tailstyle::{parse, Property};
//!
//! let styles = parse("flex sm:flex-col md:p-4");
//! assert_eq!(
//!     styles.breakpoint("sm").unwrap().get_str(Property::FlexDirection),
//!     Some("column")
//! );
//! assert_eq!(
//!     styles.breakpoint("md").unwrap().get_str(Property::Padding),
//!     Some("24px")
//! );
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use tailstyle::{parse_with_theme, Property};
//!
//! let dark = parse_with_theme("p-1", "dark");
//! assert_eq!(dark.get_str(Property::BackgroundColor), Some("#212529"));
//!
//! // Any other name falls back to light.
//! let light = parse_with_theme("p-1", "sepia");
//! assert_eq!(light.get_str(Property::BackgroundColor), Some("#ffffff"));
//! ```
//!
//! [`ThemeChoice::Adaptive`] follows the OS color mode, or whatever detector
//! was installed with [`set_theme_detector`].
//!
//! ## Hosts and render targets
//!
//! The parser is never installed globally. Template hosts opt in with
//! [`render::register`]; terminal output can use [`render::term_style`].

pub mod engine;
pub mod lexicon;
pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use engine::StyleEngine;
pub use lexicon::{ColorLookup, Lexicon, LexiconError, ThemePreset, ThemePresets};
pub use style::{Property, StyleMapping, StyleValue};
pub use theme::{reset_theme_detector, set_theme_detector, ColorMode, ThemeChoice};
pub use util::{parse_hex_color, parse_number, rgb_to_ansi256, ColorParseError};

/// Parses a class string with the light theme.
pub fn parse(class_names: &str) -> StyleMapping {
    parse_with_theme(class_names, ThemeChoice::Light)
}

/// Parses a class string with the given theme (`"dark"`, `"light"`, a
/// [`ThemeChoice`], or `None`).
pub fn parse_with_theme(class_names: &str, theme: impl Into<ThemeChoice>) -> StyleMapping {
    StyleEngine::shared().parse(class_names, theme)
}

/// Parses a list of class strings as if joined by spaces.
///
/// ```rust
/// use tailstyle::{parse_list, Property};
///
/// let styles = parse_list(["bg-primary", "mx-3"], None::<&str>);
/// assert_eq!(styles.get_str(Property::MarginLeft), Some("16px"));
/// ```
pub fn parse_list<I, S>(classes: I, theme: impl Into<ThemeChoice>) -> StyleMapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    StyleEngine::shared().parse_list(classes, theme)
}

/// Short alias of [`parse`].
pub fn tw(class_names: &str) -> StyleMapping {
    parse(class_names)
}

/// Alias of [`parse`] for native rendering targets.
pub fn rn_style(class_names: &str) -> StyleMapping {
    parse(class_names)
}

/// Alias of [`parse`] for web rendering targets.
pub fn web_style(class_names: &str) -> StyleMapping {
    parse(class_names)
}
