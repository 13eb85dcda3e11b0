//! Theme selection.
//!
//! - [`ColorMode`]: light or dark
//! - [`ThemeChoice`]: what a caller asks for (`Light`, `Dark`, or `Adaptive`)
//! - [`set_theme_detector`]: override how `Adaptive` detects the mode
//!
//! The presets themselves (seed colors) live in the [`Lexicon`](crate::Lexicon).

mod adaptive;
mod choice;

pub use adaptive::{reset_theme_detector, set_theme_detector, ColorMode};
pub use choice::ThemeChoice;
