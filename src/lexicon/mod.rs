//! Lookup tables consulted by the class rules.
//!
//! A [`Lexicon`] bundles every table the engine reads: the flat color
//! palette, the shaded palette (`blue-500`), the spacing scale, font
//! families, sizes and weights, breakpoints, flex keywords, corner radii and
//! the light/dark theme presets.
//!
//! The built-in tables are available through [`Lexicon::builtin`]. Hosts can
//! load their own from YAML or JSON; any table left out of the document keeps
//! its built-in contents:
//!
//! ```rust
//! use tailstyle::Lexicon;
//!
//! let lexicon = Lexicon::from_yaml(r##"
//! colors:
//!   brand: "#ff6600"
//! breakpoints:
//!   sm: 480px
//!   xl: 1280px
//! "##).unwrap();
//!
//! assert_eq!(lexicon.color("brand"), Some("#ff6600"));
//! assert_eq!(lexicon.color("primary"), None);
//! assert!(lexicon.is_breakpoint("xl"));
//! assert_eq!(lexicon.spacing("1"), Some("4px"));
//! ```
//!
//! A lexicon has no mutation API; build a new one to change it.

mod builtin;
mod error;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::style::Property;
use crate::theme::ColorMode;

pub use error::LexiconError;

/// Key of the font family used when a `font-<key>` token names no known family.
pub const FALLBACK_FONT: &str = "sans";

/// Key of the radius used by a bare `rounded` or an unknown size.
pub const DEFAULT_RADIUS: &str = "md";

type Table = BTreeMap<String, String>;

/// Background and text color seeded into every mapping before any token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreset {
    pub background_color: String,
    pub color: String,
}

impl ThemePreset {
    fn from_pair((background_color, color): (&str, &str)) -> Self {
        Self {
            background_color: background_color.to_string(),
            color: color.to_string(),
        }
    }
}

/// The light and dark presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePresets {
    pub light: ThemePreset,
    pub dark: ThemePreset,
}

impl Default for ThemePresets {
    fn default() -> Self {
        Self {
            light: ThemePreset::from_pair(builtin::LIGHT_THEME),
            dark: ThemePreset::from_pair(builtin::DARK_THEME),
        }
    }
}

/// Outcome of resolving a color key against the palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLookup<'a> {
    /// The key names a palette entry.
    Found(&'a str),
    /// The key is `<color>-<shade>` for a shaded color, but that shade is absent.
    MissingShade,
    /// The key is not in any palette.
    Unknown,
}

/// The full set of lookup tables.
///
/// `Default` yields the built-in data. Prefer [`Lexicon::builtin`] for the
/// shared instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    colors: Table,
    palette: BTreeMap<String, Table>,
    spacing: Table,
    fonts: Table,
    font_sizes: Table,
    font_weights: Table,
    breakpoints: Table,
    flex_justify: Table,
    flex_align: Table,
    radii: BTreeMap<String, f64>,
    themes: ThemePresets,
}

fn table(entries: &[(&str, &str)]) -> Table {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        let palette: BTreeMap<String, Table> = builtin::PALETTE
            .iter()
            .map(|(name, shades)| {
                let shades: Table = builtin::shade_entries(shades)
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (name.to_string(), shades)
            })
            .collect();

        Self {
            colors: table(builtin::COLORS),
            palette,
            spacing: table(builtin::SPACING),
            fonts: table(builtin::FONTS),
            font_sizes: table(builtin::FONT_SIZES),
            font_weights: table(builtin::FONT_WEIGHTS),
            breakpoints: table(builtin::BREAKPOINTS),
            flex_justify: table(builtin::FLEX_JUSTIFY),
            flex_align: table(builtin::FLEX_ALIGN),
            radii: builtin::RADII
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            themes: ThemePresets::default(),
        }
    }
}

static BUILTIN: Lazy<Lexicon> = Lazy::new(Lexicon::default);

impl Lexicon {
    /// The shared built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Loads a lexicon from YAML. Missing tables keep their built-in contents.
    pub fn from_yaml(source: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_yaml::from_str(source)?;
        lexicon.validate()?;
        log::debug!(
            "loaded lexicon from YAML ({} breakpoints, {} colors)",
            lexicon.breakpoints.len(),
            lexicon.colors.len()
        );
        Ok(lexicon)
    }

    /// Loads a lexicon from JSON. Missing tables keep their built-in contents.
    pub fn from_json(source: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(source)?;
        lexicon.validate()?;
        log::debug!(
            "loaded lexicon from JSON ({} breakpoints, {} colors)",
            lexicon.breakpoints.len(),
            lexicon.colors.len()
        );
        Ok(lexicon)
    }

    /// Checks that every breakpoint name can appear in a `<bp>:<class>`
    /// token without shadowing a style property, and that both theme presets
    /// are complete.
    ///
    /// Called by the loaders; only needed directly for lexicons built by
    /// other means (e.g. deserialized through a host's own config format).
    pub fn validate(&self) -> Result<(), LexiconError> {
        for name in self.breakpoints.keys() {
            let reason = if name.is_empty() {
                Some("is empty")
            } else if name.contains(':') {
                Some("contains ':'")
            } else if name.chars().any(char::is_whitespace) {
                Some("contains whitespace")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(LexiconError::InvalidBreakpoint {
                    name: name.clone(),
                    reason,
                });
            }
            if let Some(property) = Property::from_key(name) {
                return Err(LexiconError::ReservedBreakpoint {
                    name: name.clone(),
                    property,
                });
            }
        }

        for mode in [ColorMode::Light, ColorMode::Dark] {
            let preset = self.theme(mode);
            if preset.background_color.is_empty() {
                return Err(LexiconError::EmptyThemeColor {
                    mode,
                    field: "background_color",
                });
            }
            if preset.color.is_empty() {
                return Err(LexiconError::EmptyThemeColor {
                    mode,
                    field: "color",
                });
            }
        }
        Ok(())
    }

    /// Flat palette entry (`primary`, `white`, ...).
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Shaded palette entry, e.g. `shade("blue", "500")`.
    pub fn shade(&self, color: &str, shade: &str) -> Option<&str> {
        self.palette
            .get(color)
            .and_then(|shades| shades.get(shade))
            .map(String::as_str)
    }

    /// Resolves a color key through the flat palette, then the shaded one.
    ///
    /// `blue-500` splits on its last `-`; when `blue` is a shaded color the
    /// answer is decided by the shade table alone.
    pub fn resolve_color(&self, key: &str) -> ColorLookup<'_> {
        if let Some(value) = self.color(key) {
            return ColorLookup::Found(value);
        }
        if let Some((root, shade)) = key.rsplit_once('-') {
            if let Some(shades) = self.palette.get(root) {
                return match shades.get(shade) {
                    Some(value) => ColorLookup::Found(value),
                    None => ColorLookup::MissingShade,
                };
            }
        }
        if self.palette.contains_key(key) {
            return ColorLookup::MissingShade;
        }
        ColorLookup::Unknown
    }

    /// Spacing scale entry keyed by its literal digits (`"1"` → `"4px"`).
    pub fn spacing(&self, key: &str) -> Option<&str> {
        self.spacing.get(key).map(String::as_str)
    }

    pub fn font(&self, key: &str) -> Option<&str> {
        self.fonts.get(key).map(String::as_str)
    }

    pub fn font_size(&self, key: &str) -> Option<&str> {
        self.font_sizes.get(key).map(String::as_str)
    }

    pub fn font_weight(&self, key: &str) -> Option<&str> {
        self.font_weights.get(key).map(String::as_str)
    }

    /// Minimum width of a breakpoint (`"768px"` for `md`).
    pub fn breakpoint(&self, name: &str) -> Option<&str> {
        self.breakpoints.get(name).map(String::as_str)
    }

    pub fn is_breakpoint(&self, name: &str) -> bool {
        self.breakpoints.contains_key(name)
    }

    pub fn breakpoint_names(&self) -> impl Iterator<Item = &str> {
        self.breakpoints.keys().map(String::as_str)
    }

    pub fn justify(&self, key: &str) -> Option<&str> {
        self.flex_justify.get(key).map(String::as_str)
    }

    pub fn align(&self, key: &str) -> Option<&str> {
        self.flex_align.get(key).map(String::as_str)
    }

    /// Corner radius in pixels.
    pub fn radius(&self, key: &str) -> Option<f64> {
        self.radii.get(key).copied()
    }

    pub fn theme(&self, mode: ColorMode) -> &ThemePreset {
        match mode {
            ColorMode::Light => &self.themes.light,
            ColorMode::Dark => &self.themes.dark,
        }
    }
}
