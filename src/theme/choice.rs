//! Theme selection for a parse.

use super::adaptive::{detect_color_mode, ColorMode};

/// Which theme preset seeds `backgroundColor` and `color`.
///
/// Strings convert the same way everywhere: exactly `"dark"` selects
/// [`ThemeChoice::Dark`], every other string selects [`ThemeChoice::Light`].
/// [`ThemeChoice::Adaptive`] is only reachable explicitly.
///
/// ```rust
/// use tailstyle::ThemeChoice;
///
/// assert_eq!(ThemeChoice::from("dark"), ThemeChoice::Dark);
/// assert_eq!(ThemeChoice::from("midnight"), ThemeChoice::Light);
/// assert_eq!(ThemeChoice::from(None::<&str>), ThemeChoice::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
    /// Follows the detected color mode (the OS setting unless overridden
    /// with [`set_theme_detector`](super::set_theme_detector)).
    Adaptive,
}

impl ThemeChoice {
    /// Resolves to a concrete color mode, running detection for `Adaptive`.
    pub fn resolve(self) -> ColorMode {
        match self {
            ThemeChoice::Light => ColorMode::Light,
            ThemeChoice::Dark => ColorMode::Dark,
            ThemeChoice::Adaptive => detect_color_mode(),
        }
    }
}

impl From<ColorMode> for ThemeChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemeChoice::Light,
            ColorMode::Dark => ThemeChoice::Dark,
        }
    }
}

impl From<&str> for ThemeChoice {
    fn from(name: &str) -> Self {
        ColorMode::from_name(name).into()
    }
}

impl From<&String> for ThemeChoice {
    fn from(name: &String) -> Self {
        name.as_str().into()
    }
}

impl<T: Into<ThemeChoice>> From<Option<T>> for ThemeChoice {
    fn from(choice: Option<T>) -> Self {
        choice.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{reset_theme_detector, set_theme_detector};
    use serial_test::serial;

    #[test]
    fn test_from_str() {
        assert_eq!(ThemeChoice::from("dark"), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from("light"), ThemeChoice::Light);
        assert_eq!(ThemeChoice::from("DARK"), ThemeChoice::Light);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ThemeChoice::from(Some("dark")), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from(None::<&str>), ThemeChoice::Light);
        assert_eq!(ThemeChoice::from(Some(ColorMode::Dark)), ThemeChoice::Dark);
    }

    #[test]
    fn test_fixed_choices_resolve_without_detection() {
        assert_eq!(ThemeChoice::Light.resolve(), ColorMode::Light);
        assert_eq!(ThemeChoice::Dark.resolve(), ColorMode::Dark);
    }

    #[test]
    #[serial]
    fn test_adaptive_uses_detector() {
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(ThemeChoice::Adaptive.resolve(), ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(ThemeChoice::Adaptive.resolve(), ColorMode::Light);

        reset_theme_detector();
    }
}
