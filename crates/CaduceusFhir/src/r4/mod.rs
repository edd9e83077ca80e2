//! FHIR R4 (4.0.1) model.
//!
//! ```rust
//! use caduceus_fhir::r4::{self, Resource};
//!
//! let json = serde_json::json!({"resourceType": "Patient", "gender": "female"});
//! let resource = r4::registry().decode(json).unwrap();
//! let Resource::Patient(patient) = resource else { panic!("not a patient") };
//! assert_eq!(patient.gender.as_ref().and_then(|g| g.value), Some(r4::AdministrativeGender::Female));
//! ```

pub mod codes;
pub mod complex_types;
pub mod primitives;
pub mod resources;

pub use codes::*;
pub use complex_types::*;
pub use primitives::*;
pub use resources::*;

crate::resource::fhir_resource_enum!(
    crate::fhir_version::FhirVersion::R4;
    Bundle,
    CareTeam,
    Condition,
    MedicationStatement,
    Observation,
    Patient,
);
