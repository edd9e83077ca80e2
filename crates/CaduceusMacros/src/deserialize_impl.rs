use quote::{format_ident, quote};
use syn::{Data, DataEnum, Fields, FieldsNamed, Ident};

use crate::field_helpers::{get_effective_field_name, get_variant_key, is_flattened, is_required};
use crate::type_helpers::{
    get_element_info, get_element_type, get_element_value_type, get_option_inner_type,
};

/// Generates the body of `serde::Deserialize::deserialize` for a FHIR type.
///
/// ## Structs
///
/// A `Temp{Name}` struct is deserialized first. It carries, for every
/// primitive field, a value slot (`field`) and a sidecar slot (`_field`)
/// holding `{ "id", "extension" }`. The constructor then reunites the two:
///
/// ```json
/// { "status": "active", "_status": { "id": "s1" } }
/// { "given": ["John", null], "_given": [null, { "id": "middle" }] }
/// ```
///
/// ## Enums (choice types)
///
/// The visitor walks the map, picks the single variant key (or its
/// underscore sidecar), ignores everything else and builds the variant.
pub(crate) fn generate_deserialize_impl(
    data: &Data,
    name: &Ident,
    resource_type: Option<&str>,
) -> proc_macro2::TokenStream {
    let id_extension_helper_def = quote! {
        #[allow(dead_code)]
        #[derive(Clone, Default, serde::Deserialize)]
        struct IdAndExtensionHelper {
            #[serde(default)]
            id: Option<std::string::String>,
            #[serde(default)]
            extension: Option<Vec<Extension>>,
        }
    };

    let body = match data {
        Data::Enum(data) => generate_enum_body(data, name),
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => generate_struct_body(fields, name, resource_type),
            Fields::Unnamed(_) => panic!("Tuple structs not supported by FhirSerde"),
            Fields::Unit => panic!("Unit structs not supported by FhirSerde"),
        },
        Data::Union(_) => panic!("Unions not supported by FhirSerde"),
    };

    quote! {
        #id_extension_helper_def
        #body
    }
}

/// Lists every JSON key a choice enum can occupy, sidecars included, so the
/// owning struct can tell an absent choice from a malformed one.
pub(crate) fn generate_choice_keys_impl(data: &Data, name: &Ident) -> Option<proc_macro2::TokenStream> {
    let Data::Enum(data) = data else {
        return None;
    };
    let keys: Vec<String> = data
        .variants
        .iter()
        .flat_map(|variant| {
            let key = get_variant_key(variant);
            [format!("_{}", key), key]
        })
        .collect();
    Some(quote! {
        impl #name {
            #[doc(hidden)]
            pub const FHIR_CHOICE_KEYS: &'static [&'static str] = &[#(#keys),*];
        }
    })
}

fn generate_enum_body(data: &DataEnum, name: &Ident) -> proc_macro2::TokenStream {
    let expecting = format!("a {} choice", name);
    let mut variant_keys = Vec::new();
    let mut underscore_keys = Vec::new();
    let mut variant_arms = Vec::new();

    for variant in &data.variants {
        let variant_name = &variant.ident;
        let variant_key = get_variant_key(variant);
        let underscore_key = format!("_{}", variant_key);

        let field = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0],
            _ => panic!("FhirSerde choice enums only support newtype variants ({variant_name})"),
        };
        let field_ty = &field.ty;
        let info = get_element_info(field_ty);

        let construction = if info.is_fhir_element() {
            let value_ty = if info.is_decimal_element {
                quote! { crate::precise_decimal::PreciseDecimal }
            } else {
                get_element_value_type(field_ty)
            };
            quote! {
                let mut element = <#field_ty as Default>::default();
                if let Some(ext_value) = extension_part {
                    let helper: IdAndExtensionHelper = serde::Deserialize::deserialize(ext_value)
                        .map_err(|e| serde::de::Error::custom(format!("{}: {}", #underscore_key, e)))?;
                    element.id = helper.id;
                    element.extension = helper.extension;
                }
                if let Some(prim_value) = value_part {
                    element.value = <Option<#value_ty> as serde::Deserialize>::deserialize(prim_value)
                        .map_err(|e| serde::de::Error::custom(format!("{}: {}", #variant_key, e)))?;
                }
                Ok(#name::#variant_name(element))
            }
        } else {
            quote! {
                let value = value_part.ok_or_else(|| serde::de::Error::missing_field(#variant_key))?;
                let inner = serde::Deserialize::deserialize(value)
                    .map_err(|e| serde::de::Error::custom(format!("{}: {}", #variant_key, e)))?;
                Ok(#name::#variant_name(inner))
            }
        };

        variant_arms.push(quote! {
            #variant_key => {
                #construction
            }
        });
        variant_keys.push(variant_key);
        underscore_keys.push(underscore_key);
    }

    quote! {
        struct EnumVisitor;

        impl<'de> serde::de::Visitor<'de> for EnumVisitor {
            type Value = #name;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(#expecting)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut found_variant_key: Option<&'static str> = None;
                let mut value_part: Option<serde_json::Value> = None;
                let mut extension_part: Option<serde_json::Value> = None;

                while let Some(key) = map.next_key::<std::string::String>()? {
                    let (base_name, is_extension): (&'static str, bool) = match key.as_str() {
                        #(#variant_keys => (#variant_keys, false),)*
                        #(#underscore_keys => (#variant_keys, true),)*
                        _ => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                            continue;
                        }
                    };
                    if let Some(existing) = found_variant_key {
                        if existing != base_name {
                            return Err(serde::de::Error::custom(format!(
                                "conflicting choice keys `{}` and `{}`",
                                existing, key
                            )));
                        }
                    }
                    found_variant_key = Some(base_name);
                    let slot = if is_extension { &mut extension_part } else { &mut value_part };
                    if slot.is_some() {
                        return Err(serde::de::Error::custom(format!("duplicate field `{}`", key)));
                    }
                    *slot = Some(map.next_value::<serde_json::Value>()?);
                }

                let Some(variant_key) = found_variant_key else {
                    return Err(serde::de::Error::custom(format!(
                        "expected one of the keys {:?}",
                        [#(#variant_keys),*]
                    )));
                };

                match variant_key {
                    #(#variant_arms)*
                    other => Err(serde::de::Error::unknown_variant(other, &[#(#variant_keys),*])),
                }
            }
        }

        deserializer.deserialize_map(EnumVisitor)
    }
}

fn generate_struct_body(
    fields: &FieldsNamed,
    name: &Ident,
    resource_type: Option<&str>,
) -> proc_macro2::TokenStream {
    let struct_name = format_ident!("Temp{}", name);
    let mut temp_struct_attributes = Vec::new();
    let mut constructor_attributes = Vec::new();
    let mut required_checks = Vec::new();
    let mut has_choice_fields = false;

    for field in &fields.named {
        let Some(field_name_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name_ident_ext = format_ident!("{}_ext", field_name_ident);
        let field_ty = &field.ty;
        let effective_field_name_str = get_effective_field_name(field);
        let underscore_field_name_str = format!("_{}", effective_field_name_str);
        let info = get_element_info(field_ty);
        let required = is_required(field);

        if info.is_fhir_element() {
            let primitive_type = if info.is_decimal_element {
                quote! { serde_json::Value }
            } else {
                get_element_value_type(field_ty)
            };
            let (temp_value_type, temp_extension_type) = if info.is_vec {
                (
                    quote! { Option<Vec<Option<#primitive_type>>> },
                    quote! { Option<Vec<Option<IdAndExtensionHelper>>> },
                )
            } else {
                (
                    quote! { Option<#primitive_type> },
                    quote! { Option<IdAndExtensionHelper> },
                )
            };
            temp_struct_attributes.push(quote! {
                #[serde(default, rename = #effective_field_name_str)]
                #field_name_ident: #temp_value_type,
                #[serde(default, rename = #underscore_field_name_str)]
                #field_name_ident_ext: #temp_extension_type,
            });

            let to_value = if info.is_decimal_element {
                quote! {
                    |json_val: Option<serde_json::Value>| -> Result<Option<crate::precise_decimal::PreciseDecimal>, D::Error> {
                        match json_val {
                            Some(json_val) if !json_val.is_null() => {
                                <crate::precise_decimal::PreciseDecimal as serde::Deserialize>::deserialize(json_val)
                                    .map(Some)
                                    .map_err(|e| serde::de::Error::custom(format!("{}: {}", #effective_field_name_str, e)))
                            }
                            _ => Ok(None),
                        }
                    }
                }
            } else {
                quote! {
                    |value: Option<#primitive_type>| -> Result<Option<#primitive_type>, D::Error> { Ok(value) }
                }
            };

            if info.is_vec {
                let element_type = get_element_type(field_ty);
                let construction = quote! {{
                    let to_value = #to_value;
                    let primitives = temp_struct.#field_name_ident.unwrap_or_default();
                    let extensions = temp_struct.#field_name_ident_ext.unwrap_or_default();
                    let len = primitives.len().max(extensions.len());
                    let mut primitives = primitives.into_iter();
                    let mut extensions = extensions.into_iter();
                    let mut result_vec: Vec<#element_type> = Vec::with_capacity(len);
                    for _ in 0..len {
                        let prim_val_opt = to_value(primitives.next().flatten())?;
                        let ext_helper_opt = extensions.next().flatten();
                        if prim_val_opt.is_some() || ext_helper_opt.is_some() {
                            let ext_helper = ext_helper_opt.unwrap_or_default();
                            let mut element = <#element_type as Default>::default();
                            element.value = prim_val_opt;
                            element.id = ext_helper.id;
                            element.extension = ext_helper.extension;
                            result_vec.push(element);
                        }
                    }
                    result_vec
                }};
                if info.is_option {
                    constructor_attributes.push(quote! {
                        #field_name_ident: if temp_struct.#field_name_ident.is_some() || temp_struct.#field_name_ident_ext.is_some() {
                            Some(#construction)
                        } else {
                            None
                        },
                    });
                } else {
                    constructor_attributes.push(quote! {
                        #field_name_ident: #construction,
                    });
                    if required {
                        required_checks.push(quote! {
                            if result.#field_name_ident.is_empty() {
                                return Err(serde::de::Error::missing_field(#effective_field_name_str));
                            }
                        });
                    }
                }
            } else {
                let element_type = get_element_type(field_ty);
                let construction = quote! {{
                    let to_value = #to_value;
                    let ext_helper = temp_struct.#field_name_ident_ext.unwrap_or_default();
                    let mut element = <#element_type as Default>::default();
                    element.value = to_value(temp_struct.#field_name_ident)?;
                    element.id = ext_helper.id;
                    element.extension = ext_helper.extension;
                    element
                }};
                if info.is_option {
                    constructor_attributes.push(quote! {
                        #field_name_ident: if temp_struct.#field_name_ident.is_some() || temp_struct.#field_name_ident_ext.is_some() {
                            Some(#construction)
                        } else {
                            None
                        },
                    });
                } else {
                    constructor_attributes.push(quote! {
                        #field_name_ident: #construction,
                    });
                    if required {
                        required_checks.push(quote! {
                            if result.#field_name_ident.is_empty() {
                                return Err(serde::de::Error::missing_field(#effective_field_name_str));
                            }
                        });
                    }
                }
            }
        } else if is_flattened(field) {
            // Choice fields are picked out of the captured leftover entries so
            // that a malformed `valueX` is reported instead of read as absent.
            has_choice_fields = true;
            let choice_ty = if info.is_option {
                get_option_inner_type(field_ty).unwrap_or(field_ty)
            } else {
                field_ty
            };
            let missing_name = format!("{}[x]", effective_field_name_str);
            let choice = quote! {{
                let keys = <#choice_ty>::FHIR_CHOICE_KEYS;
                let entries: serde_json::Map<std::string::String, serde_json::Value> = temp_struct
                    .__fhir_choice_entries
                    .iter()
                    .filter(|(key, _)| keys.contains(&key.as_str()))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(
                        <#choice_ty as serde::Deserialize>::deserialize(serde_json::Value::Object(entries))
                            .map_err(|e| serde::de::Error::custom(e.to_string()))?,
                    )
                }
            }};
            if info.is_option {
                constructor_attributes.push(quote! {
                    #field_name_ident: #choice,
                });
                if required {
                    required_checks.push(quote! {
                        if result.#field_name_ident.is_none() {
                            return Err(serde::de::Error::missing_field(#missing_name));
                        }
                    });
                }
            } else {
                constructor_attributes.push(quote! {
                    #field_name_ident: match #choice {
                        Some(value) => value,
                        None => return Err(serde::de::Error::missing_field(#missing_name)),
                    },
                });
            }
        } else {
            if required && !info.is_option {
                temp_struct_attributes.push(quote! {
                    #[serde(default, rename = #effective_field_name_str)]
                    #field_name_ident: Option<#field_ty>,
                });
                constructor_attributes.push(quote! {
                    #field_name_ident: match temp_struct.#field_name_ident {
                        Some(value) => value,
                        None => return Err(serde::de::Error::missing_field(#effective_field_name_str)),
                    },
                });
            } else {
                temp_struct_attributes.push(quote! {
                    #[serde(default, rename = #effective_field_name_str)]
                    #field_name_ident: #field_ty,
                });
                constructor_attributes.push(quote! {
                    #field_name_ident: temp_struct.#field_name_ident,
                });
                if required && info.is_option {
                    required_checks.push(quote! {
                        if result.#field_name_ident.is_none() {
                            return Err(serde::de::Error::missing_field(#effective_field_name_str));
                        }
                    });
                }
            }
        }
    }

    if has_choice_fields {
        temp_struct_attributes.push(quote! {
            #[serde(flatten)]
            __fhir_choice_entries: serde_json::Map<std::string::String, serde_json::Value>,
        });
    }

    let resource_type_check = match resource_type {
        Some(expected) => {
            temp_struct_attributes.push(quote! {
                #[serde(default, rename = "resourceType")]
                __resource_type: Option<std::string::String>,
            });
            quote! {
                if let Some(found) = temp_struct.__resource_type.as_deref() {
                    if found != #expected {
                        return Err(serde::de::Error::custom(format!(
                            "resourceType mismatch: expected {}, found {}",
                            #expected, found
                        )));
                    }
                }
            }
        }
        None => quote! {},
    };

    quote! {
        #[derive(serde::Deserialize)]
        struct #struct_name {
            #(#temp_struct_attributes)*
        }

        let temp_struct = <#struct_name as serde::Deserialize>::deserialize(deserializer)?;
        #resource_type_check

        let result = #name {
            #(#constructor_attributes)*
        };
        #(#required_checks)*
        Ok(result)
    }
}
