use caduceus_macros::FhirSerde;

use crate::r4::*;

/// A time period defined by a start and end date and optionally time.
///
/// See: [Period](http://hl7.org/fhir/R4/datatypes.html#Period)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Period {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Starting time with inclusive boundary
    pub start: Option<DateTime>,
    /// End time with inclusive boundary, if not ongoing
    pub end: Option<DateTime>,
}
