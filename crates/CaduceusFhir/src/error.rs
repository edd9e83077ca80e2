//! Error types for the temporal codecs and the JSON codec.

use std::fmt;

use thiserror::Error;

/// The FHIR temporal type a literal was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Date,
    Time,
    TimeZone,
    DateTime,
    Instant,
}

impl TemporalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::TimeZone => "time zone",
            TemporalKind::DateTime => "dateTime",
            TemporalKind::Instant => "instant",
        }
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A temporal literal or value that does not satisfy the FHIR grammar.
///
/// Parsing never returns a partial value: any of these errors means nothing
/// was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The literal does not match the lexical grammar of `kind`.
    #[error("invalid FHIR {kind} literal: {input:?}")]
    Grammar { kind: TemporalKind, input: String },

    /// The literal is well formed but names a day that does not exist.
    #[error("{input:?} is not a calendar date")]
    InvalidCalendarDate { input: String },

    #[error("a time zone requires a time of day")]
    ZoneWithoutTime,

    #[error("a time of day requires a full date")]
    TimeWithoutFullDate,

    #[error("a day requires a month")]
    DayWithoutMonth,
}

impl FormatError {
    pub(crate) fn grammar(kind: TemporalKind, input: &str) -> Self {
        FormatError::Grammar {
            kind,
            input: input.to_string(),
        }
    }
}

/// Failure to turn JSON into a typed resource.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not JSON at all.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a resource must be a JSON object")]
    NotAnObject,

    #[error("missing resourceType")]
    MissingResourceType,

    /// The discriminator names no type known to the registry in use.
    #[error("unknown resourceType: {0}")]
    UnknownResourceType(String),

    #[error("resourceType mismatch: expected {expected}, found {found}")]
    ResourceTypeMismatch { expected: String, found: String },

    /// A mandatory field is absent. `path` locates the object that lacks it.
    #[error("missing required field `{field}` at {path}")]
    MissingField { path: String, field: String },

    #[error("invalid value at {path}: {message}")]
    InvalidField { path: String, message: String },
}

impl DecodeError {
    /// Classifies a serde failure, keeping the JSON path it occurred at.
    ///
    /// Resources nested in `Bundle.entry.resource` or `contained` are decoded
    /// by the registry and report their `DecodeError` through serde as text;
    /// those messages are turned back into the matching variant, with the
    /// inner path appended to the outer one.
    pub(crate) fn from_path_error(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = match error.path().to_string() {
            path if path == "." => "$".to_string(),
            path => path,
        };
        let message = error.into_inner().to_string();
        Self::classify(path, message)
    }

    fn classify(path: String, message: String) -> Self {
        if let Some(field) = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
        {
            return DecodeError::MissingField {
                path,
                field: field.to_string(),
            };
        }
        if let Some(rest) = message.strip_prefix("missing required field `")
            && let Some((field, inner)) = rest.split_once("` at ")
        {
            return DecodeError::MissingField {
                path: join_path(&path, inner),
                field: field.to_string(),
            };
        }
        if let Some(rest) = message.strip_prefix("invalid value at ")
            && let Some((inner, inner_message)) = rest.split_once(": ")
        {
            return DecodeError::InvalidField {
                path: join_path(&path, inner),
                message: inner_message.to_string(),
            };
        }
        if let Some(name) = message.strip_prefix("unknown resourceType: ") {
            return DecodeError::UnknownResourceType(name.to_string());
        }
        if let Some(rest) = message.strip_prefix("resourceType mismatch: expected ")
            && let Some((expected, found)) = rest.split_once(", found ")
        {
            return DecodeError::ResourceTypeMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            };
        }
        match message.as_str() {
            "missing resourceType" => DecodeError::MissingResourceType,
            "a resource must be a JSON object" => DecodeError::NotAnObject,
            _ => DecodeError::InvalidField { path, message },
        }
    }
}

/// Appends a path reported relative to a nested resource to the path of
/// that resource.
fn join_path(outer: &str, inner: &str) -> String {
    match (outer, inner) {
        (_, "$") => outer.to_string(),
        ("$", _) => inner.to_string(),
        (_, inner) if inner.starts_with('[') => format!("{outer}{inner}"),
        _ => format!("{outer}.{inner}"),
    }
}

/// Failure to turn a typed value into JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_message() {
        let error = FormatError::grammar(TemporalKind::Date, "2017-13");
        assert_eq!(error.to_string(), "invalid FHIR date literal: \"2017-13\"");
    }

    #[test]
    fn test_missing_field_is_classified() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Outer {
            inner: Inner,
        }
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Inner {
            status: String,
        }

        let value = serde_json::json!({ "inner": {} });
        let error = serde_path_to_error::deserialize::<_, Outer>(value).unwrap_err();
        match DecodeError::from_path_error(error) {
            DecodeError::MissingField { path, field } => {
                assert_eq!(path, "inner");
                assert_eq!(field, "status");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_value_keeps_path() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Holder {
            items: Vec<u32>,
        }

        let value = serde_json::json!({ "items": [1, "two"] });
        let error = serde_path_to_error::deserialize::<_, Holder>(value).unwrap_err();
        assert!(matches!(
            DecodeError::from_path_error(error),
            DecodeError::InvalidField { ref path, .. } if path == "items[1]"
        ));
    }

    #[test]
    fn test_nested_resource_errors_are_reclassified() {
        let error = DecodeError::classify(
            "entry[0].resource".to_string(),
            "missing required field `status` at $".to_string(),
        );
        assert!(matches!(
            error,
            DecodeError::MissingField { ref path, ref field }
                if path == "entry[0].resource" && field == "status"
        ));

        let error = DecodeError::classify(
            "contained[1]".to_string(),
            "invalid value at code.coding[0]: expected a string".to_string(),
        );
        assert!(matches!(
            error,
            DecodeError::InvalidField { ref path, ref message }
                if path == "contained[1].code.coding[0]" && message == "expected a string"
        ));

        assert!(matches!(
            DecodeError::classify("contained[0]".to_string(), "missing resourceType".to_string()),
            DecodeError::MissingResourceType
        ));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("entry[0].resource", "$"), "entry[0].resource");
        assert_eq!(join_path("$", "status"), "status");
        assert_eq!(join_path("contained", "[2]"), "contained[2]");
        assert_eq!(join_path("entry[0].resource", "code"), "entry[0].resource.code");
    }
}
