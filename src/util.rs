//! Numeric and color helpers shared by the rules and render targets.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").expect("BUG: invalid NUMBER_RE regex literal")
});

/// Parses a numeric class segment.
///
/// Returns `None` for anything that is not a finite number, so callers can
/// tell "zero" apart from "unparseable" and simply set nothing.
///
/// ```rust
/// use tailstyle::parse_number;
///
/// assert_eq!(parse_number("16"), Some(16.0));
/// assert_eq!(parse_number("0"), Some(0.0));
/// assert_eq!(parse_number("lg"), None);
/// assert_eq!(parse_number("NaN"), None);
/// assert_eq!(parse_number("1e3"), None);
/// ```
pub fn parse_number(segment: &str) -> Option<f64> {
    // plain decimal digits only; f64::from_str would also take "1e3" or "inf"
    if !NUMBER_RE.is_match(segment) {
        return None;
    }
    segment.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Error returned for color strings that are not `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}'")]
pub struct ColorParseError(pub String);

/// Parses `#rgb` or `#rrggbb` (case-insensitive) into an RGB triplet.
///
/// ```rust
/// use tailstyle::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#3B82F6"), Ok((59, 130, 246)));
/// assert_eq!(parse_hex_color("#fff"), Ok((255, 255, 255)));
/// assert!(parse_hex_color("red").is_err());
/// ```
pub fn parse_hex_color(value: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let err = || ColorParseError(value.to_string());
    let hex = value.strip_prefix('#').ok_or_else(err)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..=i].repeat(2));
            Ok((expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => Err(err()),
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use tailstyle::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
