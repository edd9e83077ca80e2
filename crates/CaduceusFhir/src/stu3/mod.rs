//! FHIR STU3 (3.0.1) model.
//!
//! STU3 differs from R4 in places that matter on the wire: `Dosage` carries
//! `dose[x]` and `rate[x]` directly, `MedicationStatement.taken` is mandatory
//! and `Reference` has no `type`.

pub mod codes;
pub mod complex_types;
pub mod primitives;
pub mod resources;

pub use codes::*;
pub use complex_types::*;
pub use primitives::*;
pub use resources::*;

crate::resource::fhir_resource_enum!(
    crate::fhir_version::FhirVersion::Stu3;
    Bundle,
    MedicationStatement,
    Observation,
    Patient,
);
