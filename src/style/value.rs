//! Values stored in a style mapping.

use serde::{Deserialize, Serialize, Serializer};

use super::mapping::StyleMapping;

/// A single style value: a display-ready string, a number, a flag, or a
/// nested mapping (only ever used for breakpoint variants).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Str(String),
    Map(StyleMapping),
}

impl StyleValue {
    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the flag value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this is a breakpoint sub-mapping.
    pub fn as_map(&self) -> Option<&StyleMapping> {
        match self {
            StyleValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, StyleValue::Map(_))
    }
}

// Integral numbers go out as integers so `12` reaches the renderer as `12`
// rather than `12.0`.
impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Bool(b) => serializer.serialize_bool(*b),
            StyleValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            StyleValue::Str(s) => serializer.serialize_str(s),
            StyleValue::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<StyleMapping> for StyleValue {
    fn from(map: StyleMapping) -> Self {
        StyleValue::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_number_serializes_as_integer() {
        let json = serde_json::to_string(&StyleValue::Number(12.0)).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn test_fractional_number_serializes_as_float() {
        let json = serde_json::to_string(&StyleValue::Number(1.5)).unwrap();
        assert_eq!(json, "1.5");
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: StyleValue = serde_json::from_str("\"4px\"").unwrap();
        assert_eq!(value.as_str(), Some("4px"));

        let value: StyleValue = serde_json::from_str("9999").unwrap();
        assert_eq!(value.as_number(), Some(9999.0));

        let value: StyleValue = serde_json::from_str("true").unwrap();
        assert_eq!(value.as_bool(), Some(true));

        let value: StyleValue = serde_json::from_str(r#"{"display":"flex"}"#).unwrap();
        assert!(value.is_map());
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let value = StyleValue::from("flex");
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_bool(), None);
        assert!(value.as_map().is_none());
    }
}
