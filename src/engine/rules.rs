//! The class rules, in evaluation order.
//!
//! Every token is offered to every rule. A rule returns `true` when it wrote
//! at least one entry; rules never fail and never write placeholder values.

use once_cell::sync::Lazy;
use regex::Regex;

use super::StyleEngine;
use crate::lexicon::{ColorLookup, Lexicon, DEFAULT_RADIUS, FALLBACK_FONT};
use crate::style::{Property, StyleMapping, StyleValue};
use crate::util::parse_number;

/// Breakpoint prefixes a single token may stack (`sm:md:flex` is two).
/// Tokens nested deeper are ignored.
pub(crate) const MAX_BREAKPOINT_DEPTH: usize = 8;

type ApplyFn = fn(&StyleEngine, &str, &mut StyleMapping) -> bool;

/// A named class rule.
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) apply: ApplyFn,
}

pub(crate) const RULES: &[Rule] = &[
    Rule { name: "font", apply: font },
    Rule { name: "text", apply: text },
    Rule { name: "background", apply: background },
    Rule { name: "spacing", apply: spacing },
    Rule { name: "size", apply: size },
    Rule { name: "gap", apply: gap },
    Rule { name: "flex", apply: flex },
    Rule { name: "justify", apply: justify },
    Rule { name: "items", apply: items },
    Rule { name: "border", apply: border },
    Rule { name: "rounded", apply: rounded },
    Rule { name: "object", apply: object_fit },
    Rule { name: "breakpoint", apply: breakpoint },
];

static SPACING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(m|p)([trblxy])?-(\d+)$").expect("BUG: invalid SPACING_RE regex literal")
});

static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(w|h)-(\d+)$").expect("BUG: invalid SIZE_RE regex literal"));

static GAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^gap(?:-(x|y))?-(\d+)$").expect("BUG: invalid GAP_RE regex literal")
});

static JUSTIFY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^justify-(start|center|end|between|around)$")
        .expect("BUG: invalid JUSTIFY_RE regex literal")
});

static ITEMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^items-(start|center|end)$").expect("BUG: invalid ITEMS_RE regex literal")
});

static BORDER_WIDTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^border-(\d+)$").expect("BUG: invalid BORDER_WIDTH_RE regex literal")
});

static BORDER_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^border-(solid|dashed|dotted)$")
        .expect("BUG: invalid BORDER_STYLE_RE regex literal")
});

static ROUNDED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rounded(?:-(.*))?$").expect("BUG: invalid ROUNDED_RE regex literal")
});

static OBJECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^object-(cover|contain|fill|center|top|bottom)$")
        .expect("BUG: invalid OBJECT_RE regex literal")
});

/// Suffix after `prefix`, if the token has it and the suffix is non-empty.
fn suffix<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    token.strip_prefix(prefix).filter(|key| !key.is_empty())
}

/// Spacing scale first, then the segment as a plain number.
fn spacing_value(lexicon: &Lexicon, segment: &str) -> Option<StyleValue> {
    lexicon
        .spacing(segment)
        .map(StyleValue::from)
        .or_else(|| parse_number(segment).map(StyleValue::from))
}

/// Color for `text-`/`bg-`: palette entry, or the literal key when the
/// palettes know nothing about it.
fn loose_color(lexicon: &Lexicon, key: &str) -> Option<String> {
    match lexicon.resolve_color(key) {
        ColorLookup::Found(value) => Some(value.to_string()),
        ColorLookup::MissingShade => None,
        ColorLookup::Unknown => Some(key.to_string()),
    }
}

fn set_all(styles: &mut StyleMapping, properties: &[Property], value: StyleValue) -> bool {
    for property in properties {
        styles.set(*property, value.clone());
    }
    !properties.is_empty()
}

/// `font-<weight>` sets the weight; any other `font-<key>` sets the family,
/// falling back to the sans-serif entry.
fn font(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(key) = suffix(token, "font-") else {
        return false;
    };
    let lexicon = engine.lexicon();

    if let Some(weight) = lexicon.font_weight(key) {
        styles.set(Property::FontWeight, weight);
        return true;
    }
    match lexicon.font(key).or_else(|| lexicon.font(FALLBACK_FONT)) {
        Some(family) => {
            styles.set(Property::FontFamily, family);
            true
        }
        None => false,
    }
}

/// `text-<key>` is a font size when the key is a size or a number, and a
/// text color otherwise. Exactly one of the two is written.
fn text(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(key) = suffix(token, "text-") else {
        return false;
    };
    let lexicon = engine.lexicon();

    if let Some(size) = lexicon.font_size(key) {
        styles.set(Property::FontSize, size);
        return true;
    }
    if let Some(size) = parse_number(key) {
        styles.set(Property::FontSize, size);
        return true;
    }
    match loose_color(lexicon, key) {
        Some(color) => {
            styles.set(Property::Color, color);
            true
        }
        None => false,
    }
}

fn background(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(key) = suffix(token, "bg-") else {
        return false;
    };
    match loose_color(engine.lexicon(), key) {
        Some(color) => {
            styles.set(Property::BackgroundColor, color);
            true
        }
        None => false,
    }
}

/// `p-<n>`, `m-<n>` and the directional forms `{m,p}{t,b,l,r,x,y}-<n>`.
fn spacing(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(caps) = SPACING_RE.captures(token) else {
        return false;
    };
    let is_margin = &caps[1] == "m";
    let side = caps.get(2).and_then(|m| m.as_str().chars().next());

    match spacing_value(engine.lexicon(), &caps[3]) {
        Some(value) => set_all(styles, Property::spacing_sides(is_margin, side), value),
        None => false,
    }
}

fn size(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(caps) = SIZE_RE.captures(token) else {
        return false;
    };
    let property = if &caps[1] == "w" {
        Property::Width
    } else {
        Property::Height
    };
    match spacing_value(engine.lexicon(), &caps[2]) {
        Some(value) => set_all(styles, &[property], value),
        None => false,
    }
}

/// `gap-<n>`, `gap-x-<n>` (column gap), `gap-y-<n>` (row gap).
fn gap(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(caps) = GAP_RE.captures(token) else {
        return false;
    };
    let property = match caps.get(1).map(|m| m.as_str()) {
        Some("x") => Property::ColumnGap,
        Some("y") => Property::RowGap,
        _ => Property::Gap,
    };
    match spacing_value(engine.lexicon(), &caps[2]) {
        Some(value) => set_all(styles, &[property], value),
        None => false,
    }
}

fn flex(_engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let (property, value) = match token {
        "flex" => (Property::Display, "flex"),
        "flex-row" => (Property::FlexDirection, "row"),
        "flex-col" => (Property::FlexDirection, "column"),
        _ => return false,
    };
    styles.set(property, value);
    true
}

fn justify(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(key) = suffix(token, "justify-") else {
        return false;
    };
    if let Some(value) = engine.lexicon().justify(key) {
        styles.set(Property::JustifyContent, value);
        return true;
    }

    let Some(caps) = JUSTIFY_RE.captures(token) else {
        return false;
    };
    let value = match &caps[1] {
        "start" => "flex-start",
        "end" => "flex-end",
        "between" => "space-between",
        "around" => "space-around",
        _ => "center",
    };
    styles.set(Property::JustifyContent, value);
    true
}

fn items(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(key) = suffix(token, "items-") else {
        return false;
    };
    if let Some(value) = engine.lexicon().align(key) {
        styles.set(Property::AlignItems, value);
        return true;
    }

    let Some(caps) = ITEMS_RE.captures(token) else {
        return false;
    };
    let value = match &caps[1] {
        "start" => "flex-start",
        "end" => "flex-end",
        _ => "center",
    };
    styles.set(Property::AlignItems, value);
    true
}

/// `border-<digits>` is a width, `border-<style>` a style, and anything else
/// a palette color. Unknown colors set nothing.
fn border(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    if let Some(caps) = BORDER_WIDTH_RE.captures(token) {
        return match parse_number(&caps[1]) {
            Some(width) => {
                styles.set(Property::BorderWidth, width);
                true
            }
            None => false,
        };
    }
    if let Some(caps) = BORDER_STYLE_RE.captures(token) {
        styles.set(Property::BorderStyle, &caps[1]);
        return true;
    }

    let Some(key) = suffix(token, "border-") else {
        return false;
    };
    match engine.lexicon().resolve_color(key) {
        ColorLookup::Found(color) => {
            styles.set(Property::BorderColor, color);
            true
        }
        ColorLookup::MissingShade | ColorLookup::Unknown => false,
    }
}

/// `rounded` or `rounded-<size>`; empty or unknown sizes use the default
/// radius.
fn rounded(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(caps) = ROUNDED_RE.captures(token) else {
        return false;
    };
    let lexicon = engine.lexicon();
    let key = caps.get(1).map_or(DEFAULT_RADIUS, |m| m.as_str());

    match lexicon.radius(key).or_else(|| lexicon.radius(DEFAULT_RADIUS)) {
        Some(radius) => {
            styles.set(Property::BorderRadius, radius);
            true
        }
        None => false,
    }
}

fn object_fit(_engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let Some(caps) = OBJECT_RE.captures(token) else {
        return false;
    };
    let mode = match &caps[1] {
        "center" => "contain",
        other => other,
    };
    styles.set(Property::ResizeMode, mode);
    true
}

/// `<bp>:<class>` applies the remainder through every rule into the nested
/// mapping for `<bp>`. Stacked prefixes (`sm:md:<class>`) are peeled in one
/// pass, up to [`MAX_BREAKPOINT_DEPTH`] of them.
fn breakpoint(engine: &StyleEngine, token: &str, styles: &mut StyleMapping) -> bool {
    let lexicon = engine.lexicon();
    let mut names = Vec::new();
    let mut rest = token;

    while let Some((name, remainder)) = rest.split_once(':') {
        if remainder.is_empty() || !lexicon.is_breakpoint(name) {
            break;
        }
        if names.len() == MAX_BREAKPOINT_DEPTH {
            log::trace!(
                "ignoring class nested under more than {} breakpoints",
                MAX_BREAKPOINT_DEPTH
            );
            return false;
        }
        names.push(name);
        rest = remainder;
    }
    if names.is_empty() {
        return false;
    }

    let target = names
        .into_iter()
        .fold(styles, |target, name| target.breakpoint_mut(name));
    engine.apply_token(rest, target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(classes: &str) -> StyleMapping {
        let mut styles = StyleMapping::new();
        StyleEngine::new().apply_classes(classes, &mut styles);
        styles
    }

    fn rule_names_matching(token: &str) -> Vec<&'static str> {
        let engine = StyleEngine::new();
        RULES
            .iter()
            .filter(|rule| (rule.apply)(&engine, token, &mut StyleMapping::new()))
            .map(|rule| rule.name)
            .collect()
    }

    #[test]
    fn test_font_family_and_fallback() {
        let styles = apply("font-serif");
        assert_eq!(styles.get_str(Property::FontFamily), Some("Georgia, serif"));

        let styles = apply("font-comic");
        assert_eq!(
            styles.get_str(Property::FontFamily),
            Some("Helvetica, Arial, sans-serif")
        );
    }

    #[test]
    fn test_font_weight_does_not_touch_family() {
        let styles = apply("font-bold");
        assert_eq!(styles.get_str(Property::FontWeight), Some("700"));
        assert!(!styles.contains_key(Property::FontFamily));

        assert_eq!(apply("font-light").get_str(Property::FontWeight), Some("300"));
        assert_eq!(apply("font-normal").get_str(Property::FontWeight), Some("400"));
        assert_eq!(apply("font-medium").get_str(Property::FontWeight), Some("500"));
    }

    #[test]
    fn test_bare_font_prefix_is_ignored() {
        assert!(apply("font-").is_empty());
    }

    #[test]
    fn test_text_size_from_lexicon() {
        let styles = apply("text-lg");
        assert_eq!(styles.get_str(Property::FontSize), Some("24px"));
        assert!(!styles.contains_key(Property::Color));
    }

    #[test]
    fn test_text_size_from_number() {
        let styles = apply("text-18");
        assert_eq!(styles.get_number(Property::FontSize), Some(18.0));
        assert!(!styles.contains_key(Property::Color));
    }

    #[test]
    fn test_text_exponent_is_not_a_size() {
        let styles = apply("text-1e3");
        assert!(!styles.contains_key(Property::FontSize));
        assert_eq!(styles.get_str(Property::Color), Some("1e3"));
    }

    #[test]
    fn test_text_color_from_palettes() {
        let styles = apply("text-primary");
        assert_eq!(styles.get_str(Property::Color), Some("#007bff"));
        assert!(!styles.contains_key(Property::FontSize));

        let styles = apply("text-green-500");
        assert_eq!(styles.get_str(Property::Color), Some("#22C55E"));
    }

    #[test]
    fn test_text_color_literal_fallback() {
        let styles = apply("text-tomato");
        assert_eq!(styles.get_str(Property::Color), Some("tomato"));
    }

    #[test]
    fn test_text_missing_shade_sets_nothing() {
        assert!(apply("text-blue-555").is_empty());
        assert!(apply("text-blue").is_empty());
    }

    #[test]
    fn test_background_color() {
        assert_eq!(
            apply("bg-secondary").get_str(Property::BackgroundColor),
            Some("#6c757d")
        );
        assert_eq!(
            apply("bg-gray-200").get_str(Property::BackgroundColor),
            Some("#E5E7EB")
        );
        assert_eq!(
            apply("bg-transparent").get_str(Property::BackgroundColor),
            Some("transparent")
        );
    }

    #[test]
    fn test_uniform_spacing() {
        let styles = apply("p-2 m-0");
        assert_eq!(styles.get_str(Property::Padding), Some("8px"));
        assert_eq!(styles.get_str(Property::Margin), Some("0px"));
    }

    #[test]
    fn test_spacing_numeric_fallback() {
        let styles = apply("p-12");
        assert_eq!(styles.get_number(Property::Padding), Some(12.0));
    }

    #[test]
    fn test_directional_spacing() {
        let styles = apply("pt-1 pb-2 pl-3 pr-4");
        assert_eq!(styles.get_str(Property::PaddingTop), Some("4px"));
        assert_eq!(styles.get_str(Property::PaddingBottom), Some("8px"));
        assert_eq!(styles.get_str(Property::PaddingLeft), Some("16px"));
        assert_eq!(styles.get_str(Property::PaddingRight), Some("24px"));
        assert!(!styles.contains_key(Property::Padding));
    }

    #[test]
    fn test_axis_spacing() {
        let styles = apply("py-5");
        assert_eq!(styles.get_str(Property::PaddingTop), Some("32px"));
        assert_eq!(styles.get_str(Property::PaddingBottom), Some("32px"));
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_spacing_rejects_non_digits() {
        assert!(apply("p-auto").is_empty());
        assert!(apply("mz-2").is_empty());
        assert!(apply("p-").is_empty());
    }

    #[test]
    fn test_width_and_height() {
        let styles = apply("w-4 h-100");
        assert_eq!(styles.get_str(Property::Width), Some("24px"));
        assert_eq!(styles.get_number(Property::Height), Some(100.0));
    }

    #[test]
    fn test_gap_variants() {
        let styles = apply("gap-2 gap-x-3 gap-y-40");
        assert_eq!(styles.get_str(Property::Gap), Some("8px"));
        assert_eq!(styles.get_str(Property::ColumnGap), Some("16px"));
        assert_eq!(styles.get_number(Property::RowGap), Some(40.0));
    }

    #[test]
    fn test_gap_rejects_unknown_axis() {
        assert!(apply("gap-z-2").is_empty());
    }

    #[test]
    fn test_flex_exact_tokens() {
        let styles = apply("flex flex-col");
        assert_eq!(styles.get_str(Property::Display), Some("flex"));
        assert_eq!(styles.get_str(Property::FlexDirection), Some("column"));
        assert!(apply("flex-wrap").is_empty());
    }

    #[test]
    fn test_justify_lexicon_and_extended() {
        assert_eq!(
            apply("justify-end").get_str(Property::JustifyContent),
            Some("flex-end")
        );
        assert_eq!(
            apply("justify-between").get_str(Property::JustifyContent),
            Some("space-between")
        );
        assert_eq!(
            apply("justify-around").get_str(Property::JustifyContent),
            Some("space-around")
        );
        assert!(apply("justify-evenly").is_empty());
    }

    #[test]
    fn test_items() {
        assert_eq!(
            apply("items-start").get_str(Property::AlignItems),
            Some("flex-start")
        );
        assert!(apply("items-between").is_empty());
    }

    #[test]
    fn test_justify_extended_path_without_lexicon_entries() {
        let lexicon = Lexicon::from_json(r#"{"flex_justify": {}, "flex_align": {}}"#).unwrap();
        let engine = StyleEngine::with_lexicon(lexicon);
        let mut styles = StyleMapping::new();
        engine.apply_classes("justify-start items-end", &mut styles);
        assert_eq!(styles.get_str(Property::JustifyContent), Some("flex-start"));
        assert_eq!(styles.get_str(Property::AlignItems), Some("flex-end"));
    }

    #[test]
    fn test_border_width_style_color() {
        let styles = apply("border-2 border-dashed border-red-500");
        assert_eq!(styles.get_number(Property::BorderWidth), Some(2.0));
        assert_eq!(styles.get_str(Property::BorderStyle), Some("dashed"));
        assert_eq!(styles.get_str(Property::BorderColor), Some("#EF4444"));
    }

    #[test]
    fn test_border_patterns_are_exclusive() {
        assert_eq!(rule_names_matching("border-4"), ["border"]);
        let styles = apply("border-4");
        assert!(!styles.contains_key(Property::BorderColor));

        let styles = apply("border-dotted");
        assert!(!styles.contains_key(Property::BorderColor));
    }

    #[test]
    fn test_border_unknown_color_sets_nothing() {
        assert!(apply("border-chartreuse").is_empty());
        assert!(apply("border-blue-555").is_empty());
        assert!(apply("border-").is_empty());
    }

    #[test]
    fn test_border_flat_color() {
        assert_eq!(
            apply("border-black").get_str(Property::BorderColor),
            Some("#000000")
        );
    }

    #[test]
    fn test_rounded_sizes() {
        assert_eq!(apply("rounded").get_number(Property::BorderRadius), Some(4.0));
        assert_eq!(apply("rounded-sm").get_number(Property::BorderRadius), Some(2.0));
        assert_eq!(apply("rounded-lg").get_number(Property::BorderRadius), Some(8.0));
        assert_eq!(apply("rounded-xl").get_number(Property::BorderRadius), Some(12.0));
        assert_eq!(
            apply("rounded-full").get_number(Property::BorderRadius),
            Some(9999.0)
        );
        assert_eq!(
            apply("rounded-huge").get_number(Property::BorderRadius),
            Some(4.0)
        );
        assert!(apply("roundedx").is_empty());
    }

    #[test]
    fn test_rounded_empty_suffix_uses_default() {
        assert_eq!(apply("rounded-").get_number(Property::BorderRadius), Some(4.0));
    }

    #[test]
    fn test_object_fit() {
        assert_eq!(apply("object-cover").get_str(Property::ResizeMode), Some("cover"));
        assert_eq!(apply("object-fill").get_str(Property::ResizeMode), Some("fill"));
        assert_eq!(apply("object-top").get_str(Property::ResizeMode), Some("top"));
        assert_eq!(
            apply("object-center").get_str(Property::ResizeMode),
            Some("contain")
        );
        assert!(apply("object-none").is_empty());
    }

    #[test]
    fn test_breakpoint_applies_rules_into_nested_mapping() {
        let styles = apply("md:p-2");
        let md = styles.breakpoint("md").unwrap();
        assert_eq!(md.get_str(Property::Padding), Some("8px"));
        assert!(!styles.contains_key(Property::Padding));
    }

    #[test]
    fn test_breakpoint_requires_known_name_and_remainder() {
        assert!(apply("xl:flex").is_empty());
        assert!(apply("sm:").is_empty());
        assert!(apply(":flex").is_empty());
    }

    #[test]
    fn test_breakpoint_nests_again() {
        let styles = apply("sm:md:flex");
        let inner = styles.breakpoint("sm").unwrap().breakpoint("md").unwrap();
        assert_eq!(inner.get_str(Property::Display), Some("flex"));
    }

    #[test]
    fn test_breakpoint_chain_up_to_max_depth() {
        let token = format!("{}flex", "sm:".repeat(MAX_BREAKPOINT_DEPTH));
        let styles = apply(&token);

        let mut level = &styles;
        for _ in 0..MAX_BREAKPOINT_DEPTH {
            level = level.breakpoint("sm").unwrap();
        }
        assert_eq!(level.get_str(Property::Display), Some("flex"));
        assert_eq!(level.len(), 1);
    }

    #[test]
    fn test_breakpoint_chain_past_max_depth_is_ignored() {
        let token = format!("{}flex", "sm:".repeat(MAX_BREAKPOINT_DEPTH + 1));
        assert!(apply(&token).is_empty());
        assert!(rule_names_matching(&token).is_empty());
    }

    #[test]
    fn test_very_long_breakpoint_chain_is_ignored() {
        let token = "sm:".repeat(100_000) + "flex";
        let styles = apply(&format!("{token} p-1"));
        assert!(!styles.contains_key("sm"));
        assert_eq!(styles.get_str(Property::Padding), Some("4px"));
    }

    #[test]
    fn test_breakpoint_chain_stops_at_unknown_prefix() {
        let styles = apply("sm:hover:flex");
        assert!(styles.breakpoint("sm").unwrap().is_empty());
    }

    #[test]
    fn test_breakpoint_token_matches_only_breakpoint_rule() {
        assert_eq!(rule_names_matching("lg:text-sm"), ["breakpoint"]);
    }

    #[test]
    fn test_unrecognized_token_matches_no_rule() {
        assert!(rule_names_matching("shadow-md").is_empty());
    }
}
