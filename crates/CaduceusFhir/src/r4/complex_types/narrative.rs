use caduceus_macros::FhirSerde;

use crate::r4::*;

/// A human-readable summary of the resource conveying the essential clinical and business information for the resource.
///
/// See: [Narrative](http://hl7.org/fhir/R4/narrative.html#Narrative)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Narrative {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// generated | extensions | additional | empty
    #[fhir_serde(required)]
    pub status: Code<NarrativeStatus>,
    /// Limited xhtml content
    #[fhir_serde(required)]
    pub div: Xhtml,
}
