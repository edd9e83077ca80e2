use caduceus_macros::FhirSerde;

use crate::r4::*;

/// An address expressed using postal conventions (as opposed to GPS or other location definition formats).
///
/// See: [Address](http://hl7.org/fhir/R4/datatypes.html#Address)
#[derive(Debug, Clone, PartialEq, FhirSerde, Default)]
pub struct Address {
    /// Unique id for inter-element referencing
    pub id: Option<std::string::String>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// home | work | temp | old | billing - purpose of this address
    pub r#use: Option<Code<AddressUse>>,
    /// postal | physical | both
    pub r#type: Option<Code<AddressType>>,
    /// Text representation of the address
    pub text: Option<String>,
    /// Street name, number, direction & P.O. Box etc.
    pub line: Option<Vec<String>>,
    /// Name of city, town etc.
    pub city: Option<String>,
    /// District name (aka county)
    pub district: Option<String>,
    /// Sub-unit of country (abbreviations ok)
    pub state: Option<String>,
    /// Postal code for area
    #[fhir_serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    /// Country (e.g. can be ISO 3166 2 or 3 letter code)
    pub country: Option<String>,
    /// Time period when address was/is in use
    pub period: Option<Period>,
}
