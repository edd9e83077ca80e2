//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use quote::quote;
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// FHIR primitive aliases that wrap `Element<V, Extension>`.
///
/// Base Rust types (`std::string::String`, `bool`, `i32`) must not appear here;
/// a field typed with them is an ordinary scalar, not an extensible primitive.
const KNOWN_ELEMENT_ALIASES: &[&str] = &[
    "Base64Binary",
    "Boolean",
    "Canonical",
    "Code",
    "Date",
    "DateTime",
    "Id",
    "Instant",
    "Integer",
    "Markdown",
    "Oid",
    "PositiveInt",
    "String",
    "Time",
    "UnsignedInt",
    "Uri",
    "Url",
    "Uuid",
    "Xhtml",
];
const KNOWN_DECIMAL_ELEMENT_ALIAS: &str = "Decimal";

/// Returns `T` when `ty` is `<wrapper><T>` (e.g. `Option<T>`), matching on the
/// last path segment only.
fn get_wrapped_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath { path, .. }) = ty
        && let Some(segment) = path.segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Extracts `T` from `Option<T>`.
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Option")
}

/// Extracts `T` from `Vec<T>`.
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Vec")
}

/// Extracts `T` from `Box<T>`. Boxes break cycles such as
/// `Identifier.assigner -> Reference -> Identifier`.
pub(crate) fn get_box_inner_type(ty: &Type) -> Option<&Type> {
    get_wrapped_type(ty, "Box")
}

/// Shape of a field type as seen by the code generators.
#[derive(Clone, Copy)]
pub(crate) struct ElementInfo {
    /// `Element<V, E>` or one of the primitive aliases.
    pub(crate) is_element: bool,
    /// `DecimalElement<E>` or the `Decimal` alias.
    pub(crate) is_decimal_element: bool,
    pub(crate) is_option: bool,
    pub(crate) is_vec: bool,
}

impl ElementInfo {
    pub(crate) fn is_fhir_element(&self) -> bool {
        self.is_element || self.is_decimal_element
    }
}

/// Analyzes a field type, unwrapping `Option`, `Vec`, `Vec<Option<_>>` and
/// `Box` in that order, and reports whether the innermost type is an
/// extensible FHIR primitive.
///
/// ```rust,ignore
/// // Option<String>          -> element, option
/// // Vec<Decimal>            -> decimal element, vec
/// // Option<Vec<Boolean>>    -> element, option, vec
/// // Code<NarrativeStatus>   -> element
/// // Option<Reference>       -> option
/// ```
pub(crate) fn get_element_info(field_ty: &Type) -> ElementInfo {
    let mut info = ElementInfo {
        is_element: false,
        is_decimal_element: false,
        is_option: false,
        is_vec: false,
    };
    let mut current_ty = field_ty;

    if let Some(inner) = get_option_inner_type(current_ty) {
        info.is_option = true;
        current_ty = inner;
    }

    if let Some(inner) = get_vec_inner_type(current_ty) {
        info.is_vec = true;
        current_ty = get_option_inner_type(inner).unwrap_or(inner);
    }

    if let Some(inner) = get_box_inner_type(current_ty) {
        current_ty = inner;
    }

    if let Type::Path(TypePath { path, .. }) = current_ty
        && let Some(segment) = path.segments.last()
    {
        let type_name = segment.ident.to_string();
        // Aliases are only recognised unqualified; `std::string::String` is a plain scalar.
        let is_alias_path = path.segments.len() == 1;
        let is_decimal = type_name == "DecimalElement"
            || (is_alias_path && type_name == KNOWN_DECIMAL_ELEMENT_ALIAS);
        let is_element = !is_decimal
            && (type_name == "Element"
                || (is_alias_path && KNOWN_ELEMENT_ALIASES.contains(&type_name.as_str())));
        info.is_element = is_element;
        info.is_decimal_element = is_decimal;
    }

    info
}

/// Strips every `Option`, `Vec` and `Box` layer.
pub(crate) fn get_base_type(ty: &Type) -> &Type {
    let mut current_ty = ty;
    loop {
        let next = get_option_inner_type(current_ty)
            .or_else(|| get_vec_inner_type(current_ty))
            .or_else(|| get_box_inner_type(current_ty));
        match next {
            Some(inner) => current_ty = inner,
            None => return current_ty,
        }
    }
}

/// The element type inside `Option<Vec<E>>` / `Vec<E>` / `Option<E>`.
pub(crate) fn get_element_type(field_ty: &Type) -> &Type {
    let mut current_ty = field_ty;
    if let Some(inner) = get_option_inner_type(current_ty) {
        current_ty = inner;
    }
    if let Some(inner) = get_vec_inner_type(current_ty) {
        current_ty = inner;
    }
    current_ty
}

/// Maps a primitive alias without generic arguments to the value type it wraps.
/// Keep in sync with the alias declarations in each version's `primitives` module.
pub(crate) fn extract_inner_element_type(type_name: &str) -> &'static str {
    match type_name {
        "Boolean" => "bool",
        "Integer" => "std::primitive::i32",
        "PositiveInt" | "UnsignedInt" => "std::primitive::u32",
        "String" | "Code" | "Base64Binary" | "Canonical" | "Id" | "Oid" | "Uri" | "Url"
        | "Uuid" | "Markdown" | "Xhtml" => "std::string::String",
        "Date" => "crate::date_time::XsDate",
        "DateTime" => "crate::date_time::XsDateTime",
        "Instant" => "crate::date_time::XsInstant",
        "Time" => "crate::date_time::XsTime",
        _ => "std::string::String",
    }
}

/// Resolves the value type `V` of an element-typed field.
///
/// - `Element<V, E>` yields `V`
/// - an alias carrying a type argument (`Code<NarrativeStatus>`) yields the argument
/// - any other alias is looked up in [`extract_inner_element_type`]
pub(crate) fn get_element_value_type(field_ty: &Type) -> proc_macro2::TokenStream {
    let base_type = get_base_type(field_ty);
    let Type::Path(type_path) = base_type else {
        panic!("FhirSerde: element type is not a path");
    };
    let Some(last_segment) = type_path.path.segments.last() else {
        panic!("FhirSerde: empty element type path");
    };
    if let PathArguments::AngleBracketed(generics) = &last_segment.arguments
        && let Some(GenericArgument::Type(inner_v_type)) = generics.args.first()
    {
        return quote! { #inner_v_type };
    }
    if last_segment.ident == "Element" {
        panic!("FhirSerde: Element is missing its value type argument");
    }
    let primitive_type_str = extract_inner_element_type(&last_segment.ident.to_string());
    let primitive_type: Type = syn::parse_str(primitive_type_str)
        .unwrap_or_else(|_| panic!("FhirSerde: bad primitive type {primitive_type_str}"));
    quote! { #primitive_type }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_option_vec_element() {
        let ty: Type = parse_quote!(Option<Vec<String>>);
        let info = get_element_info(&ty);
        assert!(info.is_element && info.is_option && info.is_vec);
        assert!(!info.is_decimal_element);
    }

    #[test]
    fn test_decimal_alias() {
        let ty: Type = parse_quote!(Option<Decimal>);
        let info = get_element_info(&ty);
        assert!(info.is_decimal_element);
        assert!(!info.is_element);
    }

    #[test]
    fn test_complex_type_is_not_element() {
        let ty: Type = parse_quote!(Option<Box<Reference>>);
        let info = get_element_info(&ty);
        assert!(!info.is_fhir_element());
        assert!(info.is_option);
    }

    #[test]
    fn test_qualified_rust_string_is_scalar() {
        let ty: Type = parse_quote!(Option<std::string::String>);
        let info = get_element_info(&ty);
        assert!(!info.is_fhir_element());
    }

    #[test]
    fn test_value_type_of_generic_code() {
        let ty: Type = parse_quote!(Option<Code<NarrativeStatus>>);
        assert_eq!(get_element_value_type(&ty).to_string(), "NarrativeStatus");
    }

    #[test]
    fn test_value_type_of_alias() {
        let ty: Type = parse_quote!(DateTime);
        assert_eq!(
            get_element_value_type(&ty).to_string().replace(' ', ""),
            "crate::date_time::XsDateTime"
        );
    }

    #[test]
    fn test_element_type_unwraps_containers() {
        let ty: Type = parse_quote!(Option<Vec<Uri>>);
        let inner = get_element_type(&ty);
        assert_eq!(quote!(#inner).to_string(), "Uri");
    }
}
