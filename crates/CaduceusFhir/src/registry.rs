//! `resourceType` dispatch and the JSON codec built on it.
//!
//! A [`ResourceRegistry`] maps discriminator names to decoder functions. It is
//! built once and only read afterwards, so one registry can serve any number
//! of threads. Each FHIR version module offers a lazily built default
//! (`r4::registry()`, `stu3::registry()`); callers wanting a reduced or
//! extended catalogue build their own and hand it to [`FhirJsonParser`].
//!
//! ```rust
//! use caduceus_fhir::FhirJsonParser;
//! use caduceus_fhir::r4::{Patient, Resource};
//!
//! let parser = FhirJsonParser::r4();
//! let json = r#"{"resourceType": "Patient", "id": "pat1", "active": true}"#;
//!
//! let patient: Patient = parser.decode(json).unwrap();
//! assert_eq!(patient.id.as_deref(), Some("pat1"));
//!
//! let any = parser.decode_resource(json).unwrap();
//! assert!(matches!(any, Resource::Patient(_)));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{DecodeError, EncodeError};
use crate::fhir_version::FhirVersion;
use crate::resource::TypedResource;

/// Turns a JSON object already known to carry a given `resourceType` into `R`.
pub type ResourceDecoder<R> = fn(Value) -> Result<R, DecodeError>;

/// Deserializes `value` as `T`, reporting failures with their JSON path.
pub fn decode_typed<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize(value).map_err(DecodeError::from_path_error)
}

fn decode_into<T, R>(value: Value) -> Result<R, DecodeError>
where
    T: DeserializeOwned + Into<R>,
{
    decode_typed::<T>(value).map(Into::into)
}

/// Reads the `resourceType` of a payload without decoding anything else.
pub fn resource_type_of(value: &Value) -> Result<&str, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
    object
        .get("resourceType")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingResourceType)
}

/// An immutable `resourceType` to decoder mapping for one FHIR version.
pub struct ResourceRegistry<R> {
    version: FhirVersion,
    decoders: HashMap<&'static str, ResourceDecoder<R>>,
}

impl<R> ResourceRegistry<R> {
    pub fn builder(version: FhirVersion) -> ResourceRegistryBuilder<R> {
        ResourceRegistryBuilder {
            version,
            decoders: HashMap::new(),
        }
    }

    pub fn version(&self) -> FhirVersion {
        self.version
    }

    pub fn contains(&self, resource_type: &str) -> bool {
        self.decoders.contains_key(resource_type)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered discriminators in alphabetical order.
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.decoders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Decodes any registered resource, selected by its `resourceType`.
    pub fn decode(&self, value: Value) -> Result<R, DecodeError> {
        let resource_type = resource_type_of(&value)?;
        let Some(decoder) = self.decoders.get(resource_type) else {
            warn!(resource_type, version = %self.version, "Unknown resourceType");
            return Err(DecodeError::UnknownResourceType(resource_type.to_string()));
        };
        debug!(resource_type, version = %self.version, "Dispatching resource");
        decoder(value)
    }
}

impl<R> std::fmt::Debug for ResourceRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("version", &self.version)
            .field("resource_types", &self.resource_types())
            .finish()
    }
}

pub struct ResourceRegistryBuilder<R> {
    version: FhirVersion,
    decoders: HashMap<&'static str, ResourceDecoder<R>>,
}

impl<R> ResourceRegistryBuilder<R> {
    /// Registers `T` under its own `resourceType`.
    pub fn register<T>(self) -> Self
    where
        T: TypedResource + DeserializeOwned + Into<R>,
    {
        self.register_with(T::RESOURCE_TYPE, decode_into::<T, R>)
    }

    /// Registers a custom decoder, replacing any earlier one for the same name.
    pub fn register_with(mut self, resource_type: &'static str, decoder: ResourceDecoder<R>) -> Self {
        self.decoders.insert(resource_type, decoder);
        self
    }

    /// Drops a discriminator, e.g. to build a reduced registry from a default one.
    pub fn unregister(mut self, resource_type: &str) -> Self {
        self.decoders.remove(resource_type);
        self
    }

    pub fn build(self) -> ResourceRegistry<R> {
        debug!(
            version = %self.version,
            resource_types = self.decoders.len(),
            "Built resource registry"
        );
        ResourceRegistry {
            version: self.version,
            decoders: self.decoders,
        }
    }
}

/// JSON codec bound to one registry.
pub struct FhirJsonParser<R> {
    registry: Arc<ResourceRegistry<R>>,
}

impl<R> Clone for FhirJsonParser<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

#[cfg(feature = "R4")]
impl FhirJsonParser<crate::r4::Resource> {
    /// A parser over the default R4 registry.
    pub fn r4() -> Self {
        Self::with_registry(crate::r4::registry())
    }
}

#[cfg(feature = "STU3")]
impl FhirJsonParser<crate::stu3::Resource> {
    /// A parser over the default STU3 registry.
    pub fn stu3() -> Self {
        Self::with_registry(crate::stu3::registry())
    }
}

impl<R> FhirJsonParser<R> {
    pub fn with_registry(registry: Arc<ResourceRegistry<R>>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ResourceRegistry<R> {
        &self.registry
    }

    /// Decodes a payload that must be a `T`.
    ///
    /// A payload naming a different registered type fails with
    /// [`DecodeError::ResourceTypeMismatch`]; one naming an unregistered type
    /// with [`DecodeError::UnknownResourceType`].
    pub fn decode<T>(&self, json: &str) -> Result<T, DecodeError>
    where
        T: TypedResource + DeserializeOwned,
    {
        let value: Value = serde_json::from_str(json)?;
        self.decode_value(value)
    }

    pub fn decode_value<T>(&self, value: Value) -> Result<T, DecodeError>
    where
        T: TypedResource + DeserializeOwned,
    {
        let found = resource_type_of(&value)?;
        if found != T::RESOURCE_TYPE {
            if !self.registry.contains(found) {
                warn!(resource_type = found, version = %self.registry.version(), "Unknown resourceType");
                return Err(DecodeError::UnknownResourceType(found.to_string()));
            }
            warn!(expected = T::RESOURCE_TYPE, found, "resourceType mismatch");
            return Err(DecodeError::ResourceTypeMismatch {
                expected: T::RESOURCE_TYPE.to_string(),
                found: found.to_string(),
            });
        }
        debug!(resource_type = found, "Decoding typed resource");
        decode_typed(value)
    }

    /// Decodes whichever registered resource the payload names.
    pub fn decode_resource(&self, json: &str) -> Result<R, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        self.registry.decode(value)
    }

    pub fn decode_resource_value(&self, value: Value) -> Result<R, DecodeError> {
        self.registry.decode(value)
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(value)?)
    }

    pub fn encode_pretty<T: Serialize>(&self, value: &T) -> Result<String, EncodeError> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    pub fn encode_value<T: Serialize>(&self, value: &T) -> Result<Value, EncodeError> {
        Ok(serde_json::to_value(value)?)
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::r4::{self, Observation, Patient, Resource};
    use serde_json::json;

    #[test]
    fn test_default_registry_knows_catalog() {
        let registry = r4::registry();
        assert_eq!(registry.version(), FhirVersion::R4);
        assert!(registry.contains("MedicationStatement"));
        assert!(registry.contains("Bundle"));
        assert!(!registry.contains("Basic"));
    }

    #[test]
    fn test_reduced_registry_rejects_removed_type() {
        let registry = Arc::new(r4::registry_builder().unregister("Observation").build());
        let parser = FhirJsonParser::with_registry(registry);
        let error = parser
            .decode_resource(r#"{"resourceType": "Observation", "status": "final"}"#)
            .unwrap_err();
        assert!(matches!(error, DecodeError::UnknownResourceType(ref name) if name == "Observation"));
    }

    #[test]
    fn test_custom_decoder() {
        fn always_patient(_: Value) -> Result<Resource, DecodeError> {
            Ok(Resource::from(Patient::default()))
        }
        let registry = ResourceRegistry::builder(FhirVersion::R4)
            .register_with("Legacy", always_patient)
            .build();
        let resource = registry.decode(json!({"resourceType": "Legacy"})).unwrap();
        assert_eq!(resource.resource_type(), "Patient");
    }

    #[test]
    fn test_typed_decode_mismatch() {
        let parser = FhirJsonParser::r4();
        let error = parser
            .decode::<Observation>(r#"{"resourceType": "Patient"}"#)
            .unwrap_err();
        assert!(matches!(
            error,
            DecodeError::ResourceTypeMismatch { ref expected, ref found }
                if expected == "Observation" && found == "Patient"
        ));
    }

    #[test]
    fn test_not_an_object() {
        let parser = FhirJsonParser::r4();
        assert!(matches!(parser.decode_resource("[1, 2]"), Err(DecodeError::NotAnObject)));
        assert!(matches!(
            parser.decode_resource(r#"{"id": "x"}"#),
            Err(DecodeError::MissingResourceType)
        ));
    }
}
