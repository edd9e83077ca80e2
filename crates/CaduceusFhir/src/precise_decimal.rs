//! Lexically faithful FHIR `decimal` values.
//!
//! FHIR distinguishes `1`, `1.0` and `1.00`: the number of significant digits
//! is part of the value. [`PreciseDecimal`] keeps the parsed
//! [`rust_decimal::Decimal`] for arithmetic and comparison next to the text it
//! was read from, and writes that text back verbatim.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A decimal number that remembers its original lexical form.
///
/// Equality, ordering and hashing use the numeric value, so `1.0 == 1.00`,
/// while serialization reproduces whichever form was parsed.
///
/// ```rust
/// use caduceus_fhir::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let a = PreciseDecimal::from_parts(Some(Decimal::new(10, 1)), "1.0".to_string());
/// let b = PreciseDecimal::from_parts(Some(Decimal::new(100, 2)), "1.00".to_string());
/// assert_eq!(a, b);
/// assert_eq!(a.original_string(), "1.0");
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    value: Option<Decimal>,
    original_string: Arc<str>,
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for PreciseDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.map(|value| value.normalize()).hash(state);
    }
}

impl PreciseDecimal {
    /// Builds a decimal from an already parsed value and its source text.
    ///
    /// `value` is `None` when the text is outside the range `Decimal` can
    /// represent; the text is still kept and re-emitted.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        Self {
            value,
            original_string: Arc::from(original_string),
        }
    }

    /// Parses `text`, accepting plain and scientific notation (`1.5e3`, `1E-2`).
    pub fn parse(text: &str) -> Self {
        Self::from_parts(Self::parse_decimal_string(text), text.to_string())
    }

    fn parse_decimal_string(s: &str) -> Option<Decimal> {
        let normalized = s.replace('E', "e");
        if normalized.contains('e') {
            Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse::<Decimal>().ok()
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            value: Some(value),
            original_string: Arc::from(value.to_string()),
        }
    }
}

impl std::fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // RawValue emits the stored text as a JSON number without reformatting.
        match serde_json::value::RawValue::from_string(self.original_string.to_string()) {
            Ok(raw_value) => raw_value.serialize(serializer),
            Err(e) => Err(serde::ser::Error::custom(format!(
                "invalid decimal literal '{}': {}",
                self.original_string, e
            ))),
        }
    }
}

fn unexpected(value: &serde_json::Value) -> de::Unexpected<'_> {
    match value {
        serde_json::Value::Null => de::Unexpected::Unit,
        serde_json::Value::Bool(b) => de::Unexpected::Bool(*b),
        serde_json::Value::Array(_) => de::Unexpected::Seq,
        serde_json::Value::Object(_) => de::Unexpected::Map,
        _ => de::Unexpected::Other("JSON value"),
    }
}

impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Going through Value keeps the literal text of the number intact.
        let json_value = serde_json::Value::deserialize(deserializer)?;
        match json_value {
            serde_json::Value::Number(n) => Ok(PreciseDecimal::parse(&n.to_string())),
            serde_json::Value::String(s) => {
                let parsed = Self::parse_decimal_string(&s);
                if parsed.is_none() {
                    return Err(de::Error::invalid_value(
                        de::Unexpected::Str(&s),
                        &"a decimal number",
                    ));
                }
                Ok(PreciseDecimal::from_parts(parsed, s))
            }
            serde_json::Value::Object(map) => match map.get("value") {
                Some(serde_json::Value::Number(n)) => Ok(PreciseDecimal::parse(&n.to_string())),
                Some(serde_json::Value::String(s)) => Ok(PreciseDecimal::parse(s)),
                Some(other) => Err(de::Error::invalid_type(
                    unexpected(other),
                    &"a number or string for decimal value",
                )),
                None => Err(de::Error::missing_field("value")),
            },
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a number, string, or object with a 'value' field",
            )),
        }
    }
}

/// The `decimal` counterpart of [`crate::Element`].
///
/// Kept separate so that decimals always pass through [`PreciseDecimal`] and
/// never through `f64`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DecimalElement<E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
    pub value: Option<PreciseDecimal>,
}

impl<E> Default for DecimalElement<E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<E> DecimalElement<E> {
    pub fn new(value: Decimal) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(PreciseDecimal::from(value)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }
}

impl<E> From<PreciseDecimal> for DecimalElement<E> {
    fn from(value: PreciseDecimal) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(value),
        }
    }
}

impl<E> Hash for DecimalElement<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<'de, E> Deserialize<'de> for DecimalElement<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = serde_json::Value::deserialize(deserializer)?;
        match json_value {
            serde_json::Value::Number(_) | serde_json::Value::String(_) => {
                let value = PreciseDecimal::deserialize(json_value).map_err(de::Error::custom)?;
                Ok(DecimalElement::from(value))
            }
            serde_json::Value::Object(map) => {
                let mut element = DecimalElement::default();
                for (key, value) in map {
                    match key.as_str() {
                        "id" => {
                            element.id = Deserialize::deserialize(value).map_err(de::Error::custom)?;
                        }
                        "extension" => {
                            element.extension =
                                Deserialize::deserialize(value).map_err(de::Error::custom)?;
                        }
                        "value" if !value.is_null() => {
                            element.value = Some(
                                PreciseDecimal::deserialize(value).map_err(de::Error::custom)?,
                            );
                        }
                        _ => {}
                    }
                }
                Ok(element)
            }
            serde_json::Value::Null => Ok(DecimalElement::default()),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a decimal number, string, object, or null",
            )),
        }
    }
}

impl<E> Serialize for DecimalElement<E>
where
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.id.is_none() && self.extension.is_none() {
            return match &self.value {
                Some(value) => value.serialize(serializer),
                None => serializer.serialize_none(),
            };
        }

        let len = usize::from(self.id.is_some())
            + usize::from(self.extension.is_some())
            + usize::from(self.value.is_some());
        let mut state = serializer.serialize_struct("DecimalElement", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        if let Some(extension) = &self.extension {
            state.serialize_field("extension", extension)?;
        }
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trailing_zeros_survive_round_trip() {
        let decimal: PreciseDecimal = serde_json::from_str("\"1.50\"").unwrap();
        assert_eq!(decimal.value(), Some(dec!(1.5)));
        assert_eq!(decimal.original_string(), "1.50");
        assert_eq!(serde_json::to_string(&decimal).unwrap(), "1.50");
    }

    #[test]
    fn test_scientific_notation() {
        let decimal = PreciseDecimal::parse("1.5E3");
        assert_eq!(decimal.value(), Some(dec!(1500)));
        assert_eq!(decimal.original_string(), "1.5E3");
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(PreciseDecimal::parse("2"), PreciseDecimal::parse("2.000"));
        assert!(PreciseDecimal::parse("2.1") > PreciseDecimal::parse("2.01"));
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        assert!(serde_json::from_str::<PreciseDecimal>("\"abc\"").is_err());
        assert!(serde_json::from_str::<PreciseDecimal>("true").is_err());
    }

    #[test]
    fn test_decimal_element_object_form() {
        let element: DecimalElement<serde_json::Value> =
            serde_json::from_str(r#"{"id":"d1","value":"3.0"}"#).unwrap();
        assert_eq!(element.id.as_deref(), Some("d1"));
        assert_eq!(element.value.as_ref().map(|v| v.original_string()), Some("3.0"));
        assert_eq!(
            serde_json::to_string(&element).unwrap(),
            r#"{"id":"d1","value":3.0}"#
        );
    }

    #[test]
    fn test_decimal_element_null_is_empty() {
        let element: DecimalElement<serde_json::Value> = serde_json::from_str("null").unwrap();
        assert!(element.is_empty());
    }
}
