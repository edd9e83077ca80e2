//=============================================================================
// FhirSerde Implementation Generator Functions
//=============================================================================

use quote::{format_ident, quote};
use syn::{Data, DataEnum, Fields, FieldsNamed, Ident};

use crate::field_helpers::{get_effective_field_name, get_variant_key, is_flattened};
use crate::type_helpers::get_element_info;

fn id_and_extension_helper() -> proc_macro2::TokenStream {
    quote! {
        #[allow(dead_code)]
        #[derive(serde::Serialize)]
        struct IdAndExtensionHelper<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            id: &'a Option<std::string::String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            extension: &'a Option<Vec<Extension>>,
        }
    }
}

/// Generates the body of `serde::Serialize::serialize` for a FHIR type.
///
/// ## Structs
/// - `resourceType` first when the struct is a resource
/// - primitives split into `field` and `_field`
/// - arrays of primitives split into two index-aligned arrays
/// - unset and empty fields omitted
/// - `#[fhir_serde(flatten)]` choice fields merged into the parent object
///
/// ## Enums
/// A single `valueString` / `valueQuantity` style entry, plus `_valueString`
/// when the primitive carries an id or extensions.
pub(crate) fn generate_serialize_impl(
    data: &Data,
    name: &Ident,
    resource_type: Option<&str>,
) -> proc_macro2::TokenStream {
    match data {
        Data::Enum(data) => generate_enum_serialize(data),
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => generate_struct_serialize(fields, name, resource_type),
            Fields::Unnamed(_) => panic!("Tuple structs not supported by FhirSerde"),
            Fields::Unit => panic!("Unit structs not supported by FhirSerde"),
        },
        Data::Union(_) => panic!("Unions not supported by FhirSerde"),
    }
}

fn generate_enum_serialize(data: &DataEnum) -> proc_macro2::TokenStream {
    let helper = id_and_extension_helper();
    let mut match_arms = Vec::new();

    for variant in &data.variants {
        let variant_name = &variant.ident;
        let variant_key = get_variant_key(variant);
        let field_ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => panic!("FhirSerde choice enums only support newtype variants ({variant_name})"),
        };

        if get_element_info(field_ty).is_fhir_element() {
            let underscore_variant_key = format!("_{}", variant_key);
            match_arms.push(quote! {
                Self::#variant_name(value) => {
                    if let Some(inner) = value.value.as_ref() {
                        state.serialize_entry(#variant_key, inner)?;
                    }
                    if value.id.is_some() || value.extension.is_some() {
                        let extension_part = IdAndExtensionHelper {
                            id: &value.id,
                            extension: &value.extension,
                        };
                        state.serialize_entry(#underscore_variant_key, &extension_part)?;
                    }
                }
            });
        } else {
            match_arms.push(quote! {
                Self::#variant_name(value) => {
                    state.serialize_entry(#variant_key, value)?;
                }
            });
        }
    }

    quote! {
        use serde::ser::SerializeMap;
        #helper

        let mut state = serializer.serialize_map(None)?;
        match self {
            #(#match_arms)*
        }
        state.end()
    }
}

fn generate_struct_serialize(
    fields: &FieldsNamed,
    name: &Ident,
    resource_type: Option<&str>,
) -> proc_macro2::TokenStream {
    let helper = id_and_extension_helper();
    let has_flattened_fields = fields.named.iter().any(is_flattened);
    let serialize_call = if has_flattened_fields {
        quote! { state.serialize_entry }
    } else {
        quote! { state.serialize_field }
    };

    let mut field_counts = Vec::new();
    let mut field_serializers = Vec::new();

    if let Some(resource_type) = resource_type {
        field_counts.push(quote! { count += 1; });
        field_serializers.push(quote! {
            #serialize_call("resourceType", #resource_type)?;
        });
    }

    for field in &fields.named {
        let Some(field_name_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_access = quote! { self.#field_name_ident };
        let effective_field_name_str = get_effective_field_name(field);
        let underscore_field_name_str = format!("_{}", effective_field_name_str);
        let info = get_element_info(&field.ty);

        if is_flattened(field) {
            // Flattened entries go straight into the map; the count is only a hint.
            field_serializers.push(quote! {
                serde::Serialize::serialize(
                    &#field_access,
                    serde::__private::ser::FlatMapSerializer(&mut state),
                )?;
            });
            continue;
        }

        if info.is_fhir_element() && info.is_vec {
            let vec_access = if info.is_option {
                quote! { #field_access.as_ref() }
            } else {
                quote! { Some(&#field_access) }
            };
            field_counts.push(quote! {
                if let Some(vec_value) = #vec_access {
                    if vec_value.iter().any(|element| element.value.is_some()) {
                        count += 1;
                    }
                    if vec_value.iter().any(|element| element.id.is_some() || element.extension.is_some()) {
                        count += 1;
                    }
                }
            });
            field_serializers.push(quote! {
                if let Some(vec_value) = #vec_access {
                    if !vec_value.is_empty() {
                        let mut primitive_array = Vec::with_capacity(vec_value.len());
                        let mut extension_array = Vec::with_capacity(vec_value.len());
                        let mut has_values = false;
                        let mut has_extensions = false;

                        for element in vec_value.iter() {
                            match &element.value {
                                Some(value) => {
                                    has_values = true;
                                    let json_val = serde_json::to_value(value).map_err(|e| {
                                        serde::ser::Error::custom(format!("{}: {}", #effective_field_name_str, e))
                                    })?;
                                    primitive_array.push(json_val);
                                }
                                None => primitive_array.push(serde_json::Value::Null),
                            }

                            if element.id.is_some() || element.extension.is_some() {
                                has_extensions = true;
                                let extension_part = IdAndExtensionHelper {
                                    id: &element.id,
                                    extension: &element.extension,
                                };
                                let json_val = serde_json::to_value(&extension_part).map_err(|e| {
                                    serde::ser::Error::custom(format!("{}: {}", #underscore_field_name_str, e))
                                })?;
                                extension_array.push(json_val);
                            } else {
                                extension_array.push(serde_json::Value::Null);
                            }
                        }

                        if has_values {
                            #serialize_call(#effective_field_name_str, &primitive_array)?;
                        }
                        if has_extensions {
                            #serialize_call(#underscore_field_name_str, &extension_array)?;
                        }
                    }
                }
            });
        } else if info.is_fhir_element() {
            let element_access = if info.is_option {
                quote! { #field_access.as_ref() }
            } else {
                quote! { Some(&#field_access) }
            };
            field_counts.push(quote! {
                if let Some(element) = #element_access {
                    if element.value.is_some() {
                        count += 1;
                    }
                    if element.id.is_some() || element.extension.is_some() {
                        count += 1;
                    }
                }
            });
            field_serializers.push(quote! {
                if let Some(element) = #element_access {
                    if let Some(value) = element.value.as_ref() {
                        #serialize_call(#effective_field_name_str, value)?;
                    }
                    if element.id.is_some() || element.extension.is_some() {
                        let extension_part = IdAndExtensionHelper {
                            id: &element.id,
                            extension: &element.extension,
                        };
                        #serialize_call(#underscore_field_name_str, &extension_part)?;
                    }
                }
            });
        } else if info.is_option {
            field_counts.push(quote! {
                if #field_access.is_some() {
                    count += 1;
                }
            });
            field_serializers.push(quote! {
                if let Some(value) = &#field_access {
                    #serialize_call(#effective_field_name_str, value)?;
                }
            });
        } else {
            field_counts.push(quote! {
                if !#field_access.is_empty() {
                    count += 1;
                }
            });
            field_serializers.push(quote! {
                if !#field_access.is_empty() {
                    #serialize_call(#effective_field_name_str, &#field_access)?;
                }
            });
        }
    }

    if has_flattened_fields {
        quote! {
            use serde::ser::SerializeMap;
            #helper

            let mut count = 0;
            #(#field_counts)*
            let mut state = serializer.serialize_map(Some(count))?;
            #(#field_serializers)*
            state.end()
        }
    } else {
        quote! {
            use serde::ser::SerializeStruct;
            #helper

            let mut count = 0;
            #(#field_counts)*
            let mut state = serializer.serialize_struct(stringify!(#name), count)?;
            #(#field_serializers)*
            state.end()
        }
    }
}

/// Generates the inherent `is_empty` used to omit empty nested objects.
pub(crate) fn generate_is_empty_impl(data: &Data, name: &Ident) -> Option<proc_macro2::TokenStream> {
    match data {
        Data::Struct(data_struct) => {
            let Fields::Named(named) = &data_struct.fields else {
                return None;
            };

            let mut field_checks = Vec::new();
            for field in &named.named {
                let Some(field_name_ident) = field.ident.as_ref() else {
                    continue;
                };
                let info = get_element_info(&field.ty);

                let field_check = if is_flattened(field) {
                    if info.is_option {
                        let tmp = format_ident!("__fhir_flatten_opt_{}", field_name_ident);
                        quote! {
                            self.#field_name_ident
                                .as_ref()
                                .is_none_or(|#tmp| #tmp.is_empty())
                        }
                    } else {
                        quote! { self.#field_name_ident.is_empty() }
                    }
                } else if info.is_fhir_element() && info.is_vec {
                    let vec_ident = format_ident!("__fhir_vec_ref_{}", field_name_ident);
                    let element_ident = format_ident!("__fhir_vec_elem_{}", field_name_ident);
                    let vec_access = if info.is_option {
                        quote! { self.#field_name_ident.as_ref() }
                    } else {
                        quote! { Some(&self.#field_name_ident) }
                    };
                    quote! {
                        #vec_access.is_none_or(|#vec_ident| {
                            #vec_ident.iter().all(|#element_ident| #element_ident.is_empty())
                        })
                    }
                } else if info.is_fhir_element() && info.is_option {
                    let tmp = format_ident!("__fhir_element_opt_{}", field_name_ident);
                    quote! {
                        self.#field_name_ident
                            .as_ref()
                            .is_none_or(|#tmp| #tmp.is_empty())
                    }
                } else if info.is_option {
                    quote! { self.#field_name_ident.is_none() }
                } else {
                    quote! { self.#field_name_ident.is_empty() }
                };

                field_checks.push(field_check);
            }

            Some(quote! {
                impl #name {
                    #[doc(hidden)]
                    pub fn is_empty(&self) -> bool {
                        true #(&& #field_checks)*
                    }
                }
            })
        }
        Data::Enum(_) => Some(quote! {
            impl #name {
                #[doc(hidden)]
                pub fn is_empty(&self) -> bool {
                    false
                }
            }
        }),
        Data::Union(_) => None,
    }
}
