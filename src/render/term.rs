//! Terminal rendering target.
//!
//! Converts a [`StyleMapping`] into a [`console::Style`] so the same class
//! strings can style CLI output. Only the properties a terminal can show are
//! used: text and background colors (mapped to the nearest ANSI-256 entry)
//! and font weight (bold or dim).

use console::Style;

use crate::engine::StyleEngine;
use crate::style::{Property, StyleMapping};
use crate::theme::ThemeChoice;
use crate::util::{parse_hex_color, rgb_to_ansi256};

/// Builds a terminal style from a mapping.
///
/// Colors that are not `#rgb`/`#rrggbb` (e.g. a literal `tomato`) are skipped.
pub fn console_style(styles: &StyleMapping) -> Style {
    let mut style = Style::new();

    if let Some(rgb) = hex_color(styles, Property::Color) {
        style = style.color256(rgb_to_ansi256(rgb));
    }
    if let Some(rgb) = hex_color(styles, Property::BackgroundColor) {
        style = style.on_color256(rgb_to_ansi256(rgb));
    }

    let weight = styles
        .get_str(Property::FontWeight)
        .and_then(|w| w.parse::<u16>().ok());
    match weight {
        Some(w) if w >= 600 => style = style.bold(),
        Some(w) if w <= 300 => style = style.dim(),
        _ => {}
    }
    style
}

/// Parses a class string with the shared engine and converts the result.
///
/// ```rust
/// use tailstyle::render::term_style;
///
/// let style = term_style("font-bold text-blue-500", "light").force_styling(true);
/// let out = style.apply_to("ok").to_string();
/// assert!(out.contains("\x1b[1m"));
/// ```
pub fn term_style(class_names: &str, theme: impl Into<ThemeChoice>) -> Style {
    console_style(&StyleEngine::shared().parse(class_names, theme))
}

fn hex_color(styles: &StyleMapping, property: Property) -> Option<(u8, u8, u8)> {
    let value = styles.get_str(property)?;
    match parse_hex_color(value) {
        Ok(rgb) => Some(rgb),
        Err(err) => {
            log::debug!("skipping {} for terminal output: {}", property, err);
            None
        }
    }
}
