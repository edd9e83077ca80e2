use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A human's name with the ability to identify parts and usage.
///
/// See: [HumanName](http://hl7.org/fhir/STU3/datatypes.html#HumanName)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct HumanName {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | nickname | anonymous | old | maiden
    pub r#use: Option<Code<NameUse>>,
    /// Text representation of the full name
    pub text: Option<String>,
    /// Family name (often called 'Surname')
    pub family: Option<String>,
    /// Given names (not always 'first'). Includes middle names
    pub given: Option<Vec<String>>,
    /// Parts that come before the name
    pub prefix: Option<Vec<String>>,
    /// Parts that come after the name
    pub suffix: Option<Vec<String>>,
    /// Time period when name was/is in use
    pub period: Option<Period>,
}
