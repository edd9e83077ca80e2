use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A concept that may be defined by a formal reference to a terminology or ontology or may be provided by text.
///
/// See: [CodeableConcept](http://hl7.org/fhir/STU3/datatypes.html#CodeableConcept)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct CodeableConcept {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Code defined by a terminology system
    pub coding: Option<Vec<Coding>>,
    /// Plain text representation of the concept
    pub text: Option<String>,
}
