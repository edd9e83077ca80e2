use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A set of ordered Quantities defined by a low and high limit.
///
/// See: [Range](http://hl7.org/fhir/STU3/datatypes.html#Range)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Range {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Low limit
    pub low: Option<Quantity>,
    /// High limit
    pub high: Option<Quantity>,
}
