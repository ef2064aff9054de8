//! Value - Literal-or-intrinsic property values

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::intrinsic::Intrinsic;

/// Free-form JSON property (policy documents, request templates, ...)
pub type Json = serde_json::Value;

/// List property whose items may each be an intrinsic
pub type List<T> = Value<Vec<Value<T>>>;

/// String-keyed map property
pub type Map<T> = Value<BTreeMap<String, Value<T>>>;

/// A property value: either a literal of the declared type or an
/// intrinsic function resolved at deploy time
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Literal(T),
    Intrinsic(Intrinsic),
}

impl<T> Value<T> {
    pub fn intrinsic(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }

    /// `{ "Ref": logical_id }`
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Value::Intrinsic(Intrinsic::reference(logical_id))
    }

    /// `{ "Fn::GetAtt": [logical_id, attribute] }`
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Value::Intrinsic(Intrinsic::get_att(logical_id, attribute))
    }

    /// `{ "Fn::Sub": template }`
    pub fn sub(template: impl Into<String>) -> Self {
        Value::Intrinsic(Intrinsic::sub(template))
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Literal(_) => None,
            Value::Intrinsic(i) => Some(i),
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    pub fn into_literal(self) -> Option<T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }
}

impl<T> Value<Vec<Value<T>>> {
    /// Build a literal list from anything convertible into item values
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<T>>,
    {
        Value::Literal(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Literal(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(v) => v.serialize(serializer),
            Value::Intrinsic(i) => i.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        if let Some(intrinsic) = Intrinsic::from_json(&json).map_err(D::Error::custom)? {
            return Ok(Value::Intrinsic(intrinsic));
        }
        T::deserialize(json)
            .map(Value::Literal)
            .map_err(D::Error::custom)
    }
}

/// Key/value tag shared by every taggable resource that uses the list form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    /// The tag key, 1 to 128 Unicode characters.
    pub key: Value<String>,
    /// The tag value, 0 to 256 Unicode characters.
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: impl Into<Value<String>>, value: impl Into<Value<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn literal_serializes_bare() {
        let v: Value<i64> = 42.into();
        assert_eq!(serde_json::to_value(&v).unwrap(), json!(42));
    }

    #[test]
    fn intrinsic_replaces_literal() {
        let v: Value<i64> = serde_json::from_value(json!({ "Ref": "Port" })).unwrap();
        assert_eq!(v, Value::reference("Port"));
        assert!(v.is_intrinsic());
        assert_eq!(v.as_literal(), None);
    }

    #[test]
    fn literal_type_is_enforced() {
        let result: Result<Value<i64>, _> = serde_json::from_value(json!("not a number"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_intrinsic_is_an_error() {
        let result: Result<Value<String>, _> =
            serde_json::from_value(json!({ "Fn::GetAtt": ["OnlyOne"] }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Fn::GetAtt"), "{}", err);
    }

    #[test]
    fn list_items_accept_intrinsics() {
        let list: List<String> =
            serde_json::from_value(json!(["subnet-1", { "Ref": "SubnetB" }])).unwrap();
        let items = list.as_literal().unwrap();
        assert_eq!(items[0], Value::from("subnet-1"));
        assert_eq!(items[1], Value::reference("SubnetB"));

        let whole: List<String> =
            serde_json::from_value(json!({ "Fn::Split": [",", { "Ref": "Ids" }] })).unwrap();
        assert!(whole.is_intrinsic());
    }

    #[test]
    fn list_builder() {
        let list: List<String> = Value::list(["a", "b"]);
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn map_roundtrip() {
        let json = json!({ "team": "core", "env": { "Ref": "Env" } });
        let map: Map<String> = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&map).unwrap(), json);
    }

    #[test]
    fn tag_rejects_unknown_keys() {
        let result: Result<Tag, _> =
            serde_json::from_value(json!({ "Key": "a", "Value": "b", "Extra": 1 }));
        assert!(result.is_err());
        let tag: Tag = serde_json::from_value(json!({ "Key": "a", "Value": "b" })).unwrap();
        assert_eq!(tag, Tag::new("a", "b"));
    }
}
