use caduceus_macros::FhirSerde;

use crate::stu3::*;

/// A reference to a code defined by a terminology system.
///
/// See: [Coding](http://hl7.org/fhir/STU3/datatypes.html#Coding)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Coding {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Identity of the terminology system
    pub system: Option<Uri>,
    /// Version of the system - if relevant
    pub version: Option<String>,
    /// Symbol in syntax defined by the system
    pub code: Option<Code>,
    /// Representation defined by the system
    pub display: Option<String>,
    /// If this coding was chosen directly by the user
    #[fhir_serde(rename = "userSelected")]
    pub user_selected: Option<Boolean>,
}
