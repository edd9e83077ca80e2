use caduceus_macros::FhirSerde;

use crate::r4::*;

/// A text note which also contains information about who made the statement and when.
///
/// See: [Annotation](http://hl7.org/fhir/R4/datatypes.html#Annotation)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Annotation {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Individual responsible for the annotation
    #[fhir_serde(flatten)]
    pub author: Option<AnnotationAuthor>,
    /// When the annotation was made
    pub time: Option<DateTime>,
    /// The annotation - text content (as markdown)
    #[fhir_serde(required)]
    pub text: Markdown,
}

/// Choice of types for the author\[x\] field in Annotation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum AnnotationAuthor {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "authorReference")]
    Reference(Reference),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "authorString")]
    String(String),
}
