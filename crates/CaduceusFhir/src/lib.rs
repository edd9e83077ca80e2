//! # Caduceus FHIR
//!
//! Typed FHIR STU3 and R4 records with a JSON codec that follows the FHIR
//! JSON representation: primitive `_field` sidecars, `value[x]` choice keys,
//! decimals that keep their literal text and `resourceType` dispatch through
//! an injectable [`ResourceRegistry`].
//!
//! ```rust
//! use caduceus_fhir::FhirJsonParser;
//! use caduceus_fhir::r4::MedicationStatement;
//!
//! let json = r#"{
//!     "resourceType": "MedicationStatement",
//!     "status": "active",
//!     "medicationCodeableConcept": {"text": "Tylenol"},
//!     "subject": {"reference": "Patient/pat1"}
//! }"#;
//! let parser = FhirJsonParser::r4();
//! let statement: MedicationStatement = parser.decode(json).unwrap();
//! assert_eq!(statement.subject.reference.as_ref().and_then(|r| r.value.as_deref()), Some("Patient/pat1"));
//! ```
//!
//! Version support is feature-gated (`R4`, `STU3`), both on by default.

pub mod code_system;
pub mod date_time;
pub mod element;
pub mod error;
pub mod fhir_version;
pub mod precise_decimal;
pub mod registry;
pub mod resource;

#[cfg(feature = "R4")]
pub mod r4;
#[cfg(feature = "STU3")]
pub mod stu3;

pub use date_time::{
    DatePrecision, XsDate, XsDateTime, XsInstant, XsTime, XsTimeZone, parse_date, parse_date_time,
    parse_instant, parse_time, parse_time_zone,
};
pub use element::Element;
pub use error::{DecodeError, EncodeError, FormatError, TemporalKind};
pub use fhir_version::{FhirResource, FhirVersion, decode_any, decode_any_value};
pub use precise_decimal::{DecimalElement, PreciseDecimal};
pub use registry::{FhirJsonParser, ResourceDecoder, ResourceRegistry, ResourceRegistryBuilder};
pub use resource::TypedResource;
