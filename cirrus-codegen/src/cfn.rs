//! CloudFormation registry schema documents

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// CloudFormation resource provider schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnSchema {
    pub type_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    #[serde(default)]
    pub create_only_properties: Vec<String>,
    #[serde(default)]
    pub definitions: BTreeMap<String, CfnProperty>,
}

impl CfnSchema {
    /// Top-level names of `readOnlyProperties`, in `Fn::GetAtt` form
    /// (`/properties/Endpoint/Address` becomes `Endpoint.Address`)
    pub fn attributes(&self) -> Vec<String> {
        self.read_only_properties
            .iter()
            .filter_map(|p| p.strip_prefix("/properties/"))
            .map(|p| p.replace('/', "."))
            .collect()
    }

    pub fn read_only(&self) -> BTreeSet<&str> {
        top_level(&self.read_only_properties)
    }

    pub fn create_only(&self) -> BTreeSet<&str> {
        top_level(&self.create_only_properties)
    }
}

fn top_level(pointers: &[String]) -> BTreeSet<&str> {
    pointers
        .iter()
        .filter_map(|p| p.strip_prefix("/properties/"))
        .filter(|p| !p.contains('/'))
        .collect()
}

/// `type` is either a single name or a list of names
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(_) => None,
        }
    }
}

/// A property or definition in a registry schema
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnProperty {
    #[serde(rename = "type")]
    pub prop_type: Option<TypeValue>,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    pub items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub pattern_properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl CfnProperty {
    pub fn type_name(&self) -> Option<&str> {
        self.prop_type.as_ref().and_then(TypeValue::as_str)
    }

    /// Definition name a `$ref` points at (`#/definitions/Tag` gives `Tag`)
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path
            .as_deref()
            .and_then(|r| r.rsplit('/').next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schema() {
        let schema: CfnSchema = serde_json::from_str(
            r##"{
                "typeName": "AWS::ElastiCache::User",
                "properties": {
                    "UserId": { "type": "string" },
                    "Engine": { "type": "string", "enum": ["redis", "valkey"] },
                    "Tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } },
                    "Arn": { "type": "string" },
                    "Kind": { "type": ["string", "object"] }
                },
                "required": ["UserId", "Engine"],
                "readOnlyProperties": ["/properties/Arn", "/properties/Endpoint/Address"],
                "createOnlyProperties": ["/properties/UserId", "/properties/Auth/Type"],
                "writeOnlyProperties": ["/properties/Passwords"]
            }"##,
        )
        .unwrap();

        assert_eq!(schema.attributes(), vec!["Arn", "Endpoint.Address"]);
        assert!(schema.read_only().contains("Arn"));
        assert_eq!(schema.create_only().into_iter().collect::<Vec<_>>(), vec!["UserId"]);

        let engine = &schema.properties["Engine"];
        assert_eq!(engine.type_name(), Some("string"));
        assert_eq!(engine.enum_values.as_deref().unwrap(), ["redis", "valkey"]);
        let tags = &schema.properties["Tags"];
        assert_eq!(tags.items.as_ref().unwrap().ref_name(), Some("Tag"));
        assert_eq!(schema.properties["Kind"].type_name(), None);
    }
}
