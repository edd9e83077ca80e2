use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A human-readable formatted text, including images.
///
/// See: [Narrative](http://hl7.org/fhir/STU3/narrative.html#Narrative)
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
