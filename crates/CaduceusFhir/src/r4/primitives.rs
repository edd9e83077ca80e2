//! R4 primitive data types.
//!
//! Every primitive is an [`Element`] so that it can carry an element `id` and
//! extensions next to its value. `decimal` keeps its literal text through
//! [`DecimalElement`].

use crate::date_time::{XsDate, XsDateTime, XsInstant, XsTime};
use crate::element::Element;
use crate::precise_decimal::DecimalElement;

use super::Extension;

/// FHIR primitive type for base64-encoded binary data
pub type Base64Binary = Element<std::string::String, Extension>;

/// FHIR primitive type for boolean values (true/false)
pub type Boolean = Element<bool, Extension>;

/// FHIR primitive type for canonical URLs that reference FHIR resources
pub type Canonical = Element<std::string::String, Extension>;

/// FHIR primitive type for coded values drawn from a defined set
///
/// Bound to a closed code system the value type is that system's enum, e.g.
/// `Code<NarrativeStatus>`.
pub type Code<T = std::string::String> = Element<T, Extension>;

/// FHIR primitive type for date values (year, month, day)
pub type Date = Element<XsDate, Extension>;

/// FHIR primitive type for date and time values
pub type DateTime = Element<XsDateTime, Extension>;

/// FHIR primitive type for decimal numbers with arbitrary precision
pub type Decimal = DecimalElement<Extension>;

/// FHIR primitive type for logical IDs within FHIR resources
pub type Id = Element<std::string::String, Extension>;

/// FHIR primitive type for instant in time values (to millisecond precision)
pub type Instant = Element<XsInstant, Extension>;

/// FHIR primitive type for whole number values
pub type Integer = Element<i32, Extension>;

/// FHIR primitive type for markdown-formatted text
pub type Markdown = Element<std::string::String, Extension>;

/// FHIR primitive type for Object Identifiers (OIDs)
pub type Oid = Element<std::string::String, Extension>;

/// FHIR primitive type for positive whole number values (> 0)
pub type PositiveInt = Element<u32, Extension>;

/// FHIR primitive type for character sequences
pub type String = Element<std::string::String, Extension>;

/// FHIR primitive type for time of day values
pub type Time = Element<XsTime, Extension>;

/// FHIR primitive type for non-negative whole number values (>= 0)
pub type UnsignedInt = Element<u32, Extension>;

/// FHIR primitive type for Uniform Resource Identifiers (RFC 3986)
pub type Uri = Element<std::string::String, Extension>;

/// FHIR primitive type for Uniform Resource Locators
pub type Url = Element<std::string::String, Extension>;

/// FHIR primitive type for Universally Unique Identifiers (UUIDs)
pub type Uuid = Element<std::string::String, Extension>;

/// FHIR primitive type for XHTML-formatted text with limited subset
pub type Xhtml = Element<std::string::String, Extension>;
