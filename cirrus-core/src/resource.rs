//! Resource - A typed resource declaration: type tag, properties and attributes

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attributes::{DeletionPolicy, ResourceAttributes, UpdateReplacePolicy};
use crate::schema::ResourceSchema;
use crate::value::Json;

/// Errors raised while reading a typed resource declaration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    #[error("Resource type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Resource declaration must be an object, got {0}")]
    NotAnObject(String),
}

/// Properties block of one CloudFormation resource type
pub trait ResourceProperties: Serialize + DeserializeOwned {
    /// CloudFormation type tag (e.g., "AWS::ApiGatewayV2::Stage")
    const TYPE: &'static str;

    /// Documentation metadata for this resource type
    fn schema() -> &'static ResourceSchema;
}

/// A resource declaration as it appears under `Resources` in a template
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        self.attributes.add_dependency(logical_id);
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: UpdateReplacePolicy) -> Self {
        self.attributes.update_replace_policy = Some(policy);
        self
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.attributes.metadata = Some(metadata);
        self
    }
}

#[derive(Serialize)]
struct ResourceOut<'a, P> {
    #[serde(rename = "Type")]
    type_name: &'static str,
    #[serde(rename = "Properties")]
    properties: &'a P,
    #[serde(flatten)]
    attributes: &'a ResourceAttributes,
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResourceOut {
            type_name: P::TYPE,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        let Json::Object(mut declaration) = json else {
            return Err(D::Error::custom(ResourceError::NotAnObject(json.to_string())));
        };

        let type_name = declaration
            .remove("Type")
            .ok_or_else(|| D::Error::missing_field("Type"))?;
        if type_name.as_str() != Some(P::TYPE) {
            return Err(D::Error::custom(ResourceError::TypeMismatch {
                expected: P::TYPE,
                found: type_name.to_string(),
            }));
        }

        // A resource with no required properties may omit the block entirely
        let properties = declaration
            .remove("Properties")
            .unwrap_or_else(|| Json::Object(serde_json::Map::new()));
        let properties = P::deserialize(properties).map_err(D::Error::custom)?;
        let attributes =
            ResourceAttributes::deserialize(Json::Object(declaration)).map_err(D::Error::custom)?;

        Ok(Resource {
            properties,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySchema, PropertyType};
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Widget {
        name: Value<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Value<i64>>,
    }

    const WIDGET_SCHEMA: ResourceSchema = ResourceSchema {
        type_name: "AWS::Test::Widget",
        documentation: "",
        properties: &[
            PropertySchema::new("Name", PropertyType::String).required(),
            PropertySchema::new("Size", PropertyType::Integer),
        ],
        attributes: &[],
    };

    impl ResourceProperties for Widget {
        const TYPE: &'static str = "AWS::Test::Widget";

        fn schema() -> &'static ResourceSchema {
            &WIDGET_SCHEMA
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Gadget {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<Value<String>>,
    }

    impl ResourceProperties for Gadget {
        const TYPE: &'static str = "AWS::Test::Gadget";

        fn schema() -> &'static ResourceSchema {
            &WIDGET_SCHEMA
        }
    }

    #[test]
    fn serializes_type_properties_and_attributes() {
        let resource = Resource::new(Widget {
            name: "w".into(),
            size: None,
        })
        .depends_on("Other")
        .with_deletion_policy(DeletionPolicy::Retain);

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "Type": "AWS::Test::Widget",
                "Properties": { "Name": "w" },
                "DependsOn": "Other",
                "DeletionPolicy": "Retain",
            })
        );
    }

    #[test]
    fn roundtrip() {
        let json = json!({
            "Type": "AWS::Test::Widget",
            "Properties": { "Name": { "Ref": "WidgetName" }, "Size": 3 },
            "Condition": "IsProd",
        });
        let resource: Resource<Widget> = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(resource.type_name(), "AWS::Test::Widget");
        assert_eq!(resource.attributes.condition.as_deref(), Some("IsProd"));
        assert_eq!(serde_json::to_value(&resource).unwrap(), json);
    }

    #[test]
    fn type_tag_must_match() {
        let json = json!({ "Type": "AWS::Test::Gadget", "Properties": { "Name": "w" } });
        let err = serde_json::from_value::<Resource<Widget>>(json).unwrap_err();
        assert!(err.to_string().contains("expected AWS::Test::Widget"), "{}", err);

        let missing = json!({ "Properties": { "Name": "w" } });
        assert!(serde_json::from_value::<Resource<Widget>>(missing).is_err());
    }

    #[test]
    fn missing_required_property_fails() {
        let json = json!({ "Type": "AWS::Test::Widget", "Properties": { "Size": 1 } });
        let err = serde_json::from_value::<Resource<Widget>>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `Name`"), "{}", err);
    }

    #[test]
    fn properties_block_is_optional_without_required_fields() {
        let gadget: Resource<Gadget> =
            serde_json::from_value(json!({ "Type": "AWS::Test::Gadget" })).unwrap();
        assert_eq!(gadget.properties, Gadget::default());

        let widget = serde_json::from_value::<Resource<Widget>>(json!({ "Type": "AWS::Test::Widget" }));
        assert!(widget.is_err());
    }

    #[test]
    fn unknown_top_level_keys_fail() {
        let json = json!({ "Type": "AWS::Test::Gadget", "Propertes": {} });
        assert!(serde_json::from_value::<Resource<Gadget>>(json).is_err());
    }
}
