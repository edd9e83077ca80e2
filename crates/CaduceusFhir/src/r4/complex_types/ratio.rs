use caduceus_macros::FhirSerde;

use crate::r4::*;

/// A relationship of two Quantity values - expressed as a numerator and a denominator.
///
/// See: [Ratio](http://hl7.org/fhir/R4/datatypes.html#Ratio)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Ratio {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Numerator value
    pub numerator: Option<Quantity>,
    /// Denominator value
    pub denominator: Option<Quantity>,
}
