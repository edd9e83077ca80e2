//=============================================================================
// Attribute Helper Functions
//=============================================================================

use heck::ToLowerCamelCase;
use syn::punctuated::Punctuated;
use syn::{Attribute, Lit, Meta, token};

/// Options collected from every `#[fhir_serde(...)]` attribute on one item.
///
/// The same attribute namespace is used on structs, fields and enum variants:
///
/// - `rename = "jsonName"` on fields and variants
/// - `flatten` on choice-type fields
/// - `required` on mandatory fields
/// - `resource_type = "Patient"` on resource structs
#[derive(Default)]
pub(crate) struct FhirSerdeOptions {
    pub(crate) rename: Option<String>,
    pub(crate) flatten: bool,
    pub(crate) required: bool,
    pub(crate) resource_type: Option<String>,
}

pub(crate) fn parse_fhir_serde_options(attrs: &[Attribute]) -> FhirSerdeOptions {
    let mut options = FhirSerdeOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("fhir_serde") {
            continue;
        }
        let Ok(list) = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)
        else {
            continue;
        };
        for meta in list {
            match meta {
                Meta::Path(path) if path.is_ident("flatten") => options.flatten = true,
                Meta::Path(path) if path.is_ident("required") => options.required = true,
                Meta::NameValue(nv) => {
                    if let syn::Expr::Lit(expr_lit) = &nv.value
                        && let Lit::Str(lit_str) = &expr_lit.lit
                    {
                        if nv.path.is_ident("rename") {
                            options.rename = Some(lit_str.value());
                        } else if nv.path.is_ident("resource_type") {
                            options.resource_type = Some(lit_str.value());
                        }
                    }
                }
                _ => {}
            }
        }
    }
    options
}

/// Determines the JSON key of a field.
///
/// `#[fhir_serde(rename = "customName")]` wins; otherwise the Rust name is
/// converted from `snake_case` to `camelCase`, with any raw identifier prefix
/// (`r#type`) stripped first.
///
/// ```rust,ignore
/// // pub implicit_rules: Option<Uri>          -> "implicitRules"
/// // #[fhir_serde(rename = "class")]
/// // pub class_: Option<Coding>               -> "class"
/// ```
pub(crate) fn get_effective_field_name(field: &syn::Field) -> String {
    if let Some(rename) = parse_fhir_serde_options(&field.attrs).rename {
        return rename;
    }
    field
        .ident
        .as_ref()
        .map(|ident| {
            let raw = ident.to_string();
            raw.trim_start_matches("r#").to_lower_camel_case()
        })
        .unwrap_or_default()
}

/// Checks for `#[fhir_serde(flatten)]`, used on choice-type (`value[x]`) fields.
pub(crate) fn is_flattened(field: &syn::Field) -> bool {
    parse_fhir_serde_options(&field.attrs).flatten
}

/// Checks for `#[fhir_serde(required)]`.
///
/// A required field is declared without `Option`; when the JSON key (and its
/// `_key` sidecar, for primitives) is absent the generated deserializer fails
/// with serde's `missing field` error.
pub(crate) fn is_required(field: &syn::Field) -> bool {
    parse_fhir_serde_options(&field.attrs).required
}

/// JSON key of an enum variant: its `rename` or the bare variant name.
pub(crate) fn get_variant_key(variant: &syn::Variant) -> String {
    parse_fhir_serde_options(&variant.attrs)
        .rename
        .unwrap_or_else(|| variant.ident.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn first_field(item: syn::ItemStruct) -> syn::Field {
        item.fields.into_iter().next().unwrap()
    }

    #[test]
    fn test_camel_case_default() {
        let field = first_field(parse_quote! {
            struct S { implicit_rules: Option<Uri> }
        });
        assert_eq!(get_effective_field_name(&field), "implicitRules");
    }

    #[test]
    fn test_raw_identifier() {
        let field = first_field(parse_quote! {
            struct S { r#type: Option<CodeableConcept> }
        });
        assert_eq!(get_effective_field_name(&field), "type");
    }

    #[test]
    fn test_combined_options() {
        let field = first_field(parse_quote! {
            struct S {
                #[fhir_serde(flatten, required)]
                medication: MedicationStatementMedication
            }
        });
        assert!(is_flattened(&field));
        assert!(is_required(&field));
    }

    #[test]
    fn test_resource_type_on_struct() {
        let item: syn::ItemStruct = parse_quote! {
            #[fhir_serde(resource_type = "Patient")]
            struct Patient { id: Option<std::string::String> }
        };
        let options = parse_fhir_serde_options(&item.attrs);
        assert_eq!(options.resource_type.as_deref(), Some("Patient"));
    }
}
