use caduceus_macros::FhirSerde;

use crate::r4::*;

/// A reference from one resource to another.
///
/// See: [Reference](http://hl7.org/fhir/R4/references.html#Reference)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Reference {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Literal reference, Relative, internal or absolute URL
    pub reference: Option<String>,
    /// Type the reference refers to (e.g. "Patient")
    pub r#type: Option<Uri>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Identifier>,
    /// Text alternative for the resource
    pub display: Option<String>,
}
