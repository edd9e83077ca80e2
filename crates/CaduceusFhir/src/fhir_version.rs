//! FHIR version selection and a version-agnostic resource container.

use serde_json::Value;

use crate::error::DecodeError;
#[cfg(feature = "R4")]
use crate::r4;
#[cfg(feature = "STU3")]
use crate::stu3;

/// A decoded resource of any supported FHIR version.
///
/// ```rust
/// use caduceus_fhir::{decode_any, FhirResource, FhirVersion};
///
/// let json = r#"{"resourceType": "Patient", "id": "p1"}"#;
/// let resource = decode_any(FhirVersion::Stu3, json).unwrap();
/// assert_eq!(resource.version(), FhirVersion::Stu3);
/// assert_eq!(resource.resource_type(), "Patient");
/// assert!(matches!(resource, FhirResource::Stu3(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FhirResource {
    #[cfg(feature = "STU3")]
    Stu3(Box<stu3::Resource>),
    #[cfg(feature = "R4")]
    R4(Box<r4::Resource>),
}

impl FhirResource {
    pub fn version(&self) -> FhirVersion {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(_) => FhirVersion::Stu3,
            #[cfg(feature = "R4")]
            FhirResource::R4(_) => FhirVersion::R4,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(resource) => resource.resource_type(),
            #[cfg(feature = "R4")]
            FhirResource::R4(resource) => resource.resource_type(),
        }
    }

    pub fn to_json_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            #[cfg(feature = "STU3")]
            FhirResource::Stu3(resource) => serde_json::to_value(resource),
            #[cfg(feature = "R4")]
            FhirResource::R4(resource) => serde_json::to_value(resource),
        }
    }
}

/// Decodes `json` with the default registry of `version`.
pub fn decode_any(version: FhirVersion, json: &str) -> Result<FhirResource, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode_any_value(version, value)
}

pub fn decode_any_value(version: FhirVersion, value: Value) -> Result<FhirResource, DecodeError> {
    match version {
        #[cfg(feature = "STU3")]
        FhirVersion::Stu3 => Ok(FhirResource::Stu3(Box::new(stu3::registry().decode(value)?))),
        #[cfg(feature = "R4")]
        FhirVersion::R4 => Ok(FhirResource::R4(Box::new(r4::registry().decode(value)?))),
    }
}

/// The FHIR releases this crate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirVersion {
    #[cfg(feature = "STU3")]
    Stu3,
    #[cfg(feature = "R4")]
    R4,
}

impl FhirVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "STU3")]
            FhirVersion::Stu3 => "STU3",
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "R4",
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "R4")]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::R4
    }
}

impl std::str::FromStr for FhirVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            #[cfg(feature = "STU3")]
            "STU3" => Ok(FhirVersion::Stu3),
            #[cfg(feature = "R4")]
            "R4" => Ok(FhirVersion::R4),
            _ => Err(format!("unsupported FHIR version: {s}")),
        }
    }
}

impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            #[cfg(feature = "STU3")]
            FhirVersion::Stu3,
            #[cfg(feature = "R4")]
            FhirVersion::R4,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[cfg(all(test, feature = "R4", feature = "STU3"))]
mod tests {
    use super::*;

    #[test]
    fn test_version_names() {
        assert_eq!(FhirVersion::R4.to_string(), "R4");
        assert_eq!(FhirVersion::Stu3.as_str(), "STU3");
        assert_eq!("stu3".parse::<FhirVersion>(), Ok(FhirVersion::Stu3));
        assert!("R5".parse::<FhirVersion>().is_err());
        assert_eq!(FhirVersion::default(), FhirVersion::R4);
    }

    #[test]
    fn test_decode_any_unknown_type() {
        let error = decode_any(FhirVersion::R4, r#"{"resourceType": "Nope"}"#).unwrap_err();
        assert!(matches!(error, DecodeError::UnknownResourceType(ref name) if name == "Nope"));
    }

    #[test]
    fn test_decode_any_r4() {
        let resource = decode_any(
            FhirVersion::R4,
            r#"{"resourceType": "Observation", "status": "final", "code": {"text": "x"}}"#,
        )
        .unwrap();
        assert_eq!(resource.version(), FhirVersion::R4);
        assert_eq!(resource.resource_type(), "Observation");
    }
}
