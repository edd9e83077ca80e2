use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A reference from one resource to another.
///
/// See: [Reference](http://hl7.org/fhir/STU3/references.html#Reference)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Reference {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Literal reference, Relative, internal or absolute URL
    pub reference: Option<String>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Identifier>,
    /// Text alternative for the resource
    pub display: Option<String>,
}
