use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// Details for all kinds of technology mediated contact points for a person or organization, including telephone, email, etc.
///
/// See: [ContactPoint](http://hl7.org/fhir/STU3/datatypes.html#ContactPoint)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct ContactPoint {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// phone | fax | email | pager | url | sms | other
    pub system: Option<Code<ContactPointSystem>>,
    /// The actual contact point details
    pub value: Option<String>,
    /// home | work | temp | old | mobile - purpose of this contact point
    pub r#use: Option<Code<ContactPointUse>>,
    /// Specify preferred order of use (1 = highest)
    pub rank: Option<PositiveInt>,
    /// Time period when the contact point was/is in use
    pub period: Option<Period>,
}
