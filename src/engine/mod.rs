//! The rule engine: class string in, style mapping out.
//!
//! Parsing happens in two phases:
//!
//! 1. **Seed**: `backgroundColor` and `color` are set from the theme preset.
//! 2. **Rules**: each whitespace-separated token is offered to every rule in
//!    the rule table, in order. Rules write into the mapping; a later token
//!    overwrites an earlier one key by key.
//!
//! Breakpoint tokens (`md:flex`) re-enter phase 2 for their remainder,
//! writing into a nested mapping keyed by the breakpoint name. Seeding is
//! not repeated for nested mappings.
//!
//! The engine holds no mutable state, so one instance can serve any number
//! of callers concurrently.

mod rules;

use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::lexicon::Lexicon;
use crate::style::{Property, StyleMapping};
use crate::theme::ThemeChoice;

static DEFAULT_ENGINE: Lazy<StyleEngine> = Lazy::new(StyleEngine::new);

/// Translates utility-class strings into [`StyleMapping`]s.
///
/// # Example
///
/// ```rust
/// use tailstyle::{Property, StyleEngine};
///
/// let engine = StyleEngine::new();
/// let styles = engine.parse("flex justify-between p-2 md:flex-col", "dark");
///
/// assert_eq!(styles.get_str(Property::BackgroundColor), Some("#212529"));
/// assert_eq!(styles.get_str(Property::JustifyContent), Some("space-between"));
/// assert_eq!(styles.get_str(Property::Padding), Some("8px"));
///
/// let md = styles.breakpoint("md").unwrap();
/// assert_eq!(md.get_str(Property::FlexDirection), Some("column"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleEngine {
    lexicon: Cow<'static, Lexicon>,
}

impl StyleEngine {
    /// How many breakpoint prefixes one token may stack before it is ignored.
    pub const MAX_BREAKPOINT_DEPTH: usize = rules::MAX_BREAKPOINT_DEPTH;

    /// Creates an engine over the built-in lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Cow::Borrowed(Lexicon::builtin()),
        }
    }

    /// Creates an engine over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Cow::Owned(lexicon),
        }
    }

    /// The shared engine used by the crate-level functions.
    pub fn shared() -> &'static StyleEngine {
        &DEFAULT_ENGINE
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Parses a class string.
    ///
    /// Never fails: unrecognized tokens are skipped, and the result always
    /// holds at least the two theme-seeded keys.
    pub fn parse(&self, class_names: &str, theme: impl Into<ThemeChoice>) -> StyleMapping {
        let mode = theme.into().resolve();
        let preset = self.lexicon.theme(mode);

        let mut styles = StyleMapping::new();
        styles.set(Property::BackgroundColor, preset.background_color.as_str());
        styles.set(Property::Color, preset.color.as_str());

        self.apply_classes(class_names, &mut styles);
        styles
    }

    /// Parses a list of class strings as if they were joined by spaces.
    pub fn parse_list<I, S>(&self, classes: I, theme: impl Into<ThemeChoice>) -> StyleMapping
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = classes
            .into_iter()
            .map(|class| class.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.parse(&joined, theme)
    }

    pub(crate) fn apply_classes(&self, class_names: &str, styles: &mut StyleMapping) {
        for token in class_names.split_whitespace() {
            self.apply_token(token, styles);
        }
    }

    fn apply_token(&self, token: &str, styles: &mut StyleMapping) {
        let mut matched = false;
        for rule in rules::RULES {
            if (rule.apply)(self, token, styles) {
                log::trace!("class '{}' handled by {} rule", token, rule.name);
                matched = true;
            }
        }
        if !matched {
            log::trace!("ignoring unrecognized class '{}'", token);
        }
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}
