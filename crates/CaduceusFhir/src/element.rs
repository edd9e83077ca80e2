use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A FHIR primitive together with its optional element `id` and extensions.
///
/// FHIR primitives live in two places on the wire: the value under its field
/// name and, when present, an `{ "id", "extension" }` object under the same
/// name prefixed with an underscore:
///
/// ```json
/// { "birthDate": "1970-03-30", "_birthDate": { "id": "bd" } }
/// ```
///
/// The `FhirSerde` derive reunites both halves into one `Element`. Used on
/// its own, `Element` accepts either a bare primitive or an object with
/// `id`, `extension` and `value` keys.
///
/// # Type Parameters
///
/// * `V` - the value type (`std::string::String`, `bool`, `XsDate`, a code enum, ...)
/// * `E` - the extension type of the FHIR version
///
/// ```rust
/// use caduceus_fhir::{Element, r4::Extension};
///
/// let status: Element<String, Extension> = Element::from("active".to_string());
/// assert_eq!(status.value.as_deref(), Some("active"));
/// assert!(status.id.is_none());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(value),
        }
    }
}

// Hashing follows the value only; equal elements always hash alike.
impl<V: Hash, E> Hash for Element<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Reads the `{ "id", "extension", "value" }` object form.
struct ElementObjectVisitor<V, E>(PhantomData<(V, E)>);

impl<'de, V, E> Visitor<'de> for ElementObjectVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an Element object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut element = Element::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "id" => {
                    if element.id.is_some() {
                        return Err(de::Error::duplicate_field("id"));
                    }
                    element.id = map.next_value()?;
                }
                "extension" => {
                    if element.extension.is_some() {
                        return Err(de::Error::duplicate_field("extension"));
                    }
                    element.extension = map.next_value()?;
                }
                "value" => {
                    if element.value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    element.value = map.next_value()?;
                }
                _ => {
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
        }
        Ok(element)
    }
}

/// Accepts any JSON shape a primitive can take.
struct AnyValueVisitor<V, E>(PhantomData<(V, E)>);

impl<V, E> AnyValueVisitor<V, E> {
    fn wrap<'de, D>(deserializer: D) -> Result<Element<V, E>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Element::from)
    }
}

impl<'de, V, E> Visitor<'de> for AnyValueVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a primitive value (string, number, boolean), an object, or null")
    }

    fn visit_bool<Er: de::Error>(self, v: bool) -> Result<Self::Value, Er> {
        Self::wrap(de::value::BoolDeserializer::new(v))
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<Self::Value, Er> {
        Self::wrap(de::value::I64Deserializer::new(v))
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<Self::Value, Er> {
        Self::wrap(de::value::U64Deserializer::new(v))
    }

    fn visit_f64<Er: de::Error>(self, v: f64) -> Result<Self::Value, Er> {
        Self::wrap(de::value::F64Deserializer::new(v))
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<Self::Value, Er> {
        Self::wrap(de::value::StrDeserializer::new(v))
    }

    fn visit_string<Er: de::Error>(self, v: String) -> Result<Self::Value, Er> {
        Self::wrap(de::value::StringDeserializer::new(v))
    }

    fn visit_none<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Element::default())
    }

    fn visit_unit<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Element::default())
    }

    fn visit_some<De>(self, deserializer: De) -> Result<Self::Value, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        de::value::MapAccessDeserializer::new(map).deserialize_map(ElementObjectVisitor(PhantomData))
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AnyValueVisitor(PhantomData))
    }
}

impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.id.is_none() && self.extension.is_none() {
            return match &self.value {
                Some(value) => value.serialize(serializer),
                None => serializer.serialize_none(),
            };
        }

        let len = usize::from(self.id.is_some())
            + usize::from(self.extension.is_some())
            + usize::from(self.value.is_some());
        let mut state = serializer.serialize_struct("Element", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        if let Some(extension) = &self.extension {
            state.serialize_field("extension", extension)?;
        }
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type TestElement<V> = Element<V, serde_json::Value>;

    #[test]
    fn test_bare_primitive() {
        let element: TestElement<String> = serde_json::from_value(json!("final")).unwrap();
        assert_eq!(element, TestElement::from("final".to_string()));
        assert_eq!(serde_json::to_value(&element).unwrap(), json!("final"));
    }

    #[test]
    fn test_object_form_with_id() {
        let element: TestElement<bool> =
            serde_json::from_value(json!({"id": "flag", "value": true, "other": 1})).unwrap();
        assert_eq!(element.id.as_deref(), Some("flag"));
        assert_eq!(element.value, Some(true));
        assert_eq!(
            serde_json::to_value(&element).unwrap(),
            json!({"id": "flag", "value": true})
        );
    }

    #[test]
    fn test_null_is_empty() {
        let element: TestElement<i32> = serde_json::from_value(json!(null)).unwrap();
        assert!(element.is_empty());
    }

    #[test]
    fn test_array_is_rejected() {
        assert!(serde_json::from_value::<TestElement<String>>(json!(["a"])).is_err());
    }

    #[test]
    fn test_hash_follows_value() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TestElement::from(7_i32));
        assert!(set.contains(&TestElement::from(7_i32)));
    }
}
