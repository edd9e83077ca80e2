//! Top-level resource plumbing shared by the FHIR versions.

/// A record that appears at the top level of a FHIR payload, tagged with
/// `resourceType`.
///
/// Implemented by `#[derive(FhirSerde)]` for structs carrying
/// `#[fhir_serde(resource_type = "...")]`.
pub trait TypedResource {
    /// The `resourceType` discriminator of this record.
    const RESOURCE_TYPE: &'static str;

    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }
}

/// Declares a version's `Resource` enum, its conversions and its default
/// registry.
///
/// Decoding a `Resource` (for example inside `Bundle.entry.resource`) goes
/// through the version's process-wide registry, so nested payloads are
/// dispatched exactly like top-level ones.
macro_rules! fhir_resource_enum {
    ($version:expr; $($name:ident),+ $(,)?) => {
        /// Any resource of this FHIR version.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($name(Box<$name>),)+
        }

        impl Resource {
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $(Resource::$name(_) => <$name as $crate::resource::TypedResource>::RESOURCE_TYPE,)+
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }
        )+

        impl serde::Serialize for Resource {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    $(Resource::$name(resource) => serde::Serialize::serialize(&**resource, serializer),)+
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for Resource {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                // The message is reclassified by `DecodeError::from_path_error`.
                registry().decode(value).map_err(serde::de::Error::custom)
            }
        }

        /// Builds a registry holding every resource type of this version.
        pub fn registry_builder() -> $crate::registry::ResourceRegistryBuilder<Resource> {
            $crate::registry::ResourceRegistry::builder($version)
                $(.register::<$name>())+
        }

        static REGISTRY: once_cell::sync::Lazy<std::sync::Arc<$crate::registry::ResourceRegistry<Resource>>> =
            once_cell::sync::Lazy::new(|| std::sync::Arc::new(registry_builder().build()));

        /// The process-wide registry of this version, built on first use.
        pub fn registry() -> std::sync::Arc<$crate::registry::ResourceRegistry<Resource>> {
            std::sync::Arc::clone(&REGISTRY)
        }
    };
}

pub(crate) use fhir_resource_enum;
