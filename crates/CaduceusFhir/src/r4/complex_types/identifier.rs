use caduceus_macros::FhirSerde;

use crate::r4::*;

/// An identifier - identifies some entity uniquely and unambiguously.
///
/// See: [Identifier](http://hl7.org/fhir/R4/datatypes.html#Identifier)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Identifier {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | secondary | old (If known)
    pub r#use: Option<Code<IdentifierUse>>,
    /// Description of identifier
    pub r#type: Option<CodeableConcept>,
    /// The namespace for the identifier value
    pub system: Option<Uri>,
    /// The value that is unique
    pub value: Option<String>,
    /// Time period when id is/was valid for use
    pub period: Option<Period>,
    /// Organization that issued id (may be just text)
    pub assigner: Option<Box<Reference>>,
}
