//! # Caduceus Macros
//!
//! Procedural macros behind the FHIR model types of `caduceus-fhir`.
//!
//! `#[derive(FhirSerde)]` produces `serde::Serialize`, `serde::Deserialize`
//! and an inherent `is_empty` for records and choice-type enums, following
//! the FHIR JSON representation rather than serde's defaults.
//!
//! ## FHIR Serialization Patterns
//!
//! ### Primitive sidecars
//!
//! Primitives may carry an `id` and extensions in a parallel `_field` object:
//!
//! ```json
//! {
//!   "status": "active",
//!   "_status": { "id": "status-1", "extension": [] }
//! }
//! ```
//!
//! ### Arrays of primitives
//!
//! Split into a value array and an index-aligned sidecar array:
//!
//! ```json
//! {
//!   "given": ["John", "Michael", null],
//!   "_given": [null, { "id": "name-2" }, { "id": "name-3" }]
//! }
//! ```
//!
//! ### Choice types
//!
//! `value[x]` fields become one suffixed key:
//!
//! ```json
//! { "valueQuantity": { "value": 1 } }
//! { "valueString": "text" }
//! ```
//!
//! ### Resources
//!
//! `#[fhir_serde(resource_type = "Patient")]` writes the `resourceType`
//! discriminator first and rejects payloads naming another type. It also
//! implements `crate::resource::TypedResource` for the struct.
//!
//! ## Usage
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
//! #[fhir_serde(resource_type = "Patient")]
//! pub struct Patient {
//!     pub id: Option<std::string::String>,
//!     #[fhir_serde(rename = "implicitRules")]
//!     pub implicit_rules: Option<Uri>,
//!     pub active: Option<Boolean>,
//!     #[fhir_serde(flatten)]
//!     pub deceased: Option<PatientDeceased>,
//! }
//! ```
//!
//! Generated code refers to `Extension` unqualified, to `serde_json`, and to
//! `crate::precise_decimal` / `crate::resource`, so the derive is meant for
//! use inside `caduceus-fhir`'s version modules.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::deserialize_impl::{generate_choice_keys_impl, generate_deserialize_impl};
use crate::field_helpers::parse_fhir_serde_options;
use crate::serialize_is_empty_impl::{generate_is_empty_impl, generate_serialize_impl};

pub(crate) mod deserialize_impl;
pub(crate) mod field_helpers;
pub(crate) mod serialize_is_empty_impl;
pub(crate) mod type_helpers;

/// Derives FHIR-shaped `serde::Serialize` and `serde::Deserialize`.
///
/// # Supported Attributes
///
/// - `#[fhir_serde(rename = "name")]` on fields and choice variants
/// - `#[fhir_serde(flatten)]` on choice-type fields
/// - `#[fhir_serde(required)]` on mandatory fields
/// - `#[fhir_serde(resource_type = "Name")]` on resource structs
///
/// # Error Handling
///
/// Absent required fields fail with serde's `missing field` error, a
/// conflicting `resourceType` fails with a `resourceType mismatch` message,
/// and unknown keys are ignored.
#[proc_macro_derive(FhirSerde, attributes(fhir_serde))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "FhirSerde does not support generic types")
            .to_compile_error()
            .into();
    }

    let resource_type = parse_fhir_serde_options(&input.attrs).resource_type;
    let resource_type = resource_type.as_deref();

    let serialize_impl = generate_serialize_impl(&input.data, &name, resource_type);
    let deserialize_impl = generate_deserialize_impl(&input.data, &name, resource_type);
    let is_empty_impl = generate_is_empty_impl(&input.data, &name).unwrap_or_default();
    let choice_keys_impl = generate_choice_keys_impl(&input.data, &name).unwrap_or_default();
    let resource_impl = match resource_type {
        Some(resource_type) => quote! {
            impl crate::resource::TypedResource for #name {
                const RESOURCE_TYPE: &'static str = #resource_type;
            }
        },
        None => quote! {},
    };

    let expanded = quote! {
        impl serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                #serialize_impl
            }
        }

        impl<'de> serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                #deserialize_impl
            }
        }

        #is_empty_impl

        #choice_keys_impl

        #resource_impl
    };

    TokenStream::from(expanded)
}
