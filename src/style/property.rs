//! Typed names for the style properties the engine can emit.

use std::fmt;

/// A style property written by one of the class rules.
///
/// Output mappings are keyed by strings (so breakpoint names can share the
/// same namespace), but every key the rules set comes from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    BackgroundColor,
    Color,
    FontFamily,
    FontWeight,
    FontSize,
    Padding,
    PaddingTop,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    Margin,
    MarginTop,
    MarginBottom,
    MarginLeft,
    MarginRight,
    Width,
    Height,
    Gap,
    ColumnGap,
    RowGap,
    Display,
    FlexDirection,
    JustifyContent,
    AlignItems,
    BorderWidth,
    BorderStyle,
    BorderColor,
    BorderRadius,
    ResizeMode,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 29] = [
        Property::BackgroundColor,
        Property::Color,
        Property::FontFamily,
        Property::FontWeight,
        Property::FontSize,
        Property::Padding,
        Property::PaddingTop,
        Property::PaddingBottom,
        Property::PaddingLeft,
        Property::PaddingRight,
        Property::Margin,
        Property::MarginTop,
        Property::MarginBottom,
        Property::MarginLeft,
        Property::MarginRight,
        Property::Width,
        Property::Height,
        Property::Gap,
        Property::ColumnGap,
        Property::RowGap,
        Property::Display,
        Property::FlexDirection,
        Property::JustifyContent,
        Property::AlignItems,
        Property::BorderWidth,
        Property::BorderStyle,
        Property::BorderColor,
        Property::BorderRadius,
        Property::ResizeMode,
    ];

    /// The property whose output key is `key`, if any.
    pub fn from_key(key: &str) -> Option<Property> {
        Property::ALL.into_iter().find(|property| property.as_str() == key)
    }

    /// The camelCase key used in the output mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::BackgroundColor => "backgroundColor",
            Property::Color => "color",
            Property::FontFamily => "fontFamily",
            Property::FontWeight => "fontWeight",
            Property::FontSize => "fontSize",
            Property::Padding => "padding",
            Property::PaddingTop => "paddingTop",
            Property::PaddingBottom => "paddingBottom",
            Property::PaddingLeft => "paddingLeft",
            Property::PaddingRight => "paddingRight",
            Property::Margin => "margin",
            Property::MarginTop => "marginTop",
            Property::MarginBottom => "marginBottom",
            Property::MarginLeft => "marginLeft",
            Property::MarginRight => "marginRight",
            Property::Width => "width",
            Property::Height => "height",
            Property::Gap => "gap",
            Property::ColumnGap => "columnGap",
            Property::RowGap => "rowGap",
            Property::Display => "display",
            Property::FlexDirection => "flexDirection",
            Property::JustifyContent => "justifyContent",
            Property::AlignItems => "alignItems",
            Property::BorderWidth => "borderWidth",
            Property::BorderStyle => "borderStyle",
            Property::BorderColor => "borderColor",
            Property::BorderRadius => "borderRadius",
            Property::ResizeMode => "resizeMode",
        }
    }

    /// Maps a spacing side letter (`t`, `b`, `l`, `r`, `x`, `y`) to the
    /// properties it sets. `None` means the uniform property.
    pub(crate) fn spacing_sides(margin: bool, side: Option<char>) -> &'static [Property] {
        use Property::*;
        match (margin, side) {
            (true, None) => &[Margin],
            (true, Some('t')) => &[MarginTop],
            (true, Some('b')) => &[MarginBottom],
            (true, Some('l')) => &[MarginLeft],
            (true, Some('r')) => &[MarginRight],
            (true, Some('x')) => &[MarginLeft, MarginRight],
            (true, Some('y')) => &[MarginTop, MarginBottom],
            (false, None) => &[Padding],
            (false, Some('t')) => &[PaddingTop],
            (false, Some('b')) => &[PaddingBottom],
            (false, Some('l')) => &[PaddingLeft],
            (false, Some('r')) => &[PaddingRight],
            (false, Some('x')) => &[PaddingLeft, PaddingRight],
            (false, Some('y')) => &[PaddingTop, PaddingBottom],
            _ => &[],
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Property {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Property> for String {
    fn from(property: Property) -> Self {
        property.as_str().to_string()
    }
}
