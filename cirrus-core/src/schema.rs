//! Schema - Describe the shape of resource properties
//!
//! Every generated resource module carries `const` schemas next to its
//! structs, so the documentation metadata (required, type, allowed values,
//! update behavior) is available at runtime for listing and skeletons.

use std::fmt;

use serde_json::json;

use crate::value::Json;

/// Allowed values of an enumerated property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumSchema {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

/// Property type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyType {
    /// String
    String,
    /// Integer
    Integer,
    /// Double
    Double,
    /// Boolean
    Boolean,
    /// Free-form JSON object
    Json,
    /// String restricted to allowed values
    Enum(&'static EnumSchema),
    /// List
    List(&'static PropertyType),
    /// Map with string keys
    Map(&'static PropertyType),
    /// Nested property type
    Struct(&'static StructSchema),
}

impl PropertyType {
    pub fn type_name(&self) -> String {
        match self {
            PropertyType::String => "String".to_string(),
            PropertyType::Integer => "Integer".to_string(),
            PropertyType::Double => "Double".to_string(),
            PropertyType::Boolean => "Boolean".to_string(),
            PropertyType::Json => "Json".to_string(),
            PropertyType::Enum(e) => e.name.to_string(),
            PropertyType::List(inner) => format!("List<{}>", inner.type_name()),
            PropertyType::Map(inner) => format!("Map<{}>", inner.type_name()),
            PropertyType::Struct(s) => s.name.to_string(),
        }
    }

    /// Allowed values, if this is (a list of) an enumerated type
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            PropertyType::Enum(e) => Some(e.values),
            PropertyType::List(inner) => inner.allowed_values(),
            _ => None,
        }
    }

    /// A JSON value of this type
    pub fn sample(&self, mode: SampleMode) -> Json {
        match self {
            PropertyType::String => json!("String"),
            PropertyType::Integer => json!(1),
            PropertyType::Double => json!(1.0),
            PropertyType::Boolean => json!(true),
            PropertyType::Json => json!({}),
            PropertyType::Enum(e) => json!(e.values.first().copied().unwrap_or_default()),
            PropertyType::List(inner) => json!([inner.sample(mode)]),
            PropertyType::Map(inner) => json!({ "Key": inner.sample(mode) }),
            PropertyType::Struct(s) => s.sample(mode),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// What an update to a property requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateBehavior {
    /// Updated in place
    Mutable,
    /// Update requires replacement
    Immutable,
}

impl fmt::Display for UpdateBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateBehavior::Mutable => write!(f, "No interruption"),
            UpdateBehavior::Immutable => write!(f, "Replacement"),
        }
    }
}

/// Which properties a sample includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    #[default]
    Full,
    RequiredOnly,
}

/// Property schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySchema {
    /// CloudFormation property name (e.g., "ApiId")
    pub name: &'static str,
    pub property_type: PropertyType,
    pub required: bool,
    pub update: UpdateBehavior,
}

impl PropertySchema {
    pub const fn new(name: &'static str, property_type: PropertyType) -> Self {
        Self {
            name,
            property_type,
            required: false,
            update: UpdateBehavior::Mutable,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn immutable(mut self) -> Self {
        self.update = UpdateBehavior::Immutable;
        self
    }
}

fn sample_properties(properties: &[PropertySchema], mode: SampleMode) -> Json {
    let object = properties
        .iter()
        .filter(|p| mode == SampleMode::Full || p.required)
        .map(|p| (p.name.to_string(), p.property_type.sample(mode)))
        .collect::<serde_json::Map<_, _>>();
    Json::Object(object)
}

/// Nested property type schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructSchema {
    pub name: &'static str,
    pub properties: &'static [PropertySchema],
}

impl StructSchema {
    pub fn property(&self, name: &str) -> Option<&'static PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn sample(&self, mode: SampleMode) -> Json {
        sample_properties(self.properties, mode)
    }
}

/// Resource schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSchema {
    /// CloudFormation type name (e.g., "AWS::ApiGatewayV2::Stage")
    pub type_name: &'static str,
    /// AWS documentation page
    pub documentation: &'static str,
    pub properties: &'static [PropertySchema],
    /// Values available through `Fn::GetAtt`
    pub attributes: &'static [&'static str],
}

impl ResourceSchema {
    /// Service segment of the type name (e.g., "ApiGatewayV2")
    pub fn service(&self) -> &'static str {
        self.type_name.split("::").nth(1).unwrap_or_default()
    }

    /// Resource segment of the type name (e.g., "Stage")
    pub fn resource_name(&self) -> &'static str {
        self.type_name.split("::").nth(2).unwrap_or_default()
    }

    pub fn property(&self, name: &str) -> Option<&'static PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn required_properties(&self) -> impl Iterator<Item = &'static PropertySchema> {
        self.properties.iter().filter(|p| p.required)
    }

    /// A `Properties` object that satisfies this schema
    pub fn sample(&self, mode: SampleMode) -> Json {
        sample_properties(self.properties, mode)
    }
}

/// Schema of the shared `Tag` property type
pub const TAG_SCHEMA: StructSchema = StructSchema {
    name: "Tag",
    properties: &[
        PropertySchema::new("Key", PropertyType::String).required(),
        PropertySchema::new("Value", PropertyType::String).required(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODE_SCHEMA: EnumSchema = EnumSchema {
        name: "Mode",
        values: &["single-az", "cross-az"],
    };

    const SETTINGS_SCHEMA: StructSchema = StructSchema {
        name: "Settings",
        properties: &[
            PropertySchema::new("Level", PropertyType::Enum(&MODE_SCHEMA)).required(),
            PropertySchema::new("Limit", PropertyType::Double),
        ],
    };

    const RESOURCE_SCHEMA: ResourceSchema = ResourceSchema {
        type_name: "AWS::Test::Thing",
        documentation: "https://example.com/thing",
        properties: &[
            PropertySchema::new("Name", PropertyType::String)
                .required()
                .immutable(),
            PropertySchema::new("Count", PropertyType::Integer),
            PropertySchema::new("Ids", PropertyType::List(&PropertyType::String)),
            PropertySchema::new("Labels", PropertyType::Map(&PropertyType::String)),
            PropertySchema::new("Settings", PropertyType::Struct(&SETTINGS_SCHEMA)),
            PropertySchema::new(
                "Tags",
                PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
            ),
        ],
        attributes: &["Arn"],
    };

    #[test]
    fn type_names() {
        let ids = RESOURCE_SCHEMA.property("Ids").unwrap();
        assert_eq!(ids.property_type.type_name(), "List<String>");
        let tags = RESOURCE_SCHEMA.property("Tags").unwrap();
        assert_eq!(tags.property_type.to_string(), "List<Tag>");
        let level = SETTINGS_SCHEMA.property("Level").unwrap();
        assert_eq!(level.property_type.to_string(), "Mode");
        assert_eq!(
            level.property_type.allowed_values(),
            Some(&["single-az", "cross-az"][..])
        );
    }

    #[test]
    fn type_name_segments() {
        assert_eq!(RESOURCE_SCHEMA.service(), "Test");
        assert_eq!(RESOURCE_SCHEMA.resource_name(), "Thing");
    }

    #[test]
    fn builders() {
        let name = RESOURCE_SCHEMA.property("Name").unwrap();
        assert!(name.required);
        assert_eq!(name.update, UpdateBehavior::Immutable);
        let count = RESOURCE_SCHEMA.property("Count").unwrap();
        assert!(!count.required);
        assert_eq!(count.update, UpdateBehavior::Mutable);
        let required: Vec<_> = RESOURCE_SCHEMA
            .required_properties()
            .map(|p| p.name)
            .collect();
        assert_eq!(required, vec!["Name"]);
    }

    #[test]
    fn full_sample() {
        assert_eq!(
            RESOURCE_SCHEMA.sample(SampleMode::Full),
            json!({
                "Name": "String",
                "Count": 1,
                "Ids": ["String"],
                "Labels": { "Key": "String" },
                "Settings": { "Level": "single-az", "Limit": 1.0 },
                "Tags": [{ "Key": "String", "Value": "String" }],
            })
        );
    }

    #[test]
    fn required_only_sample() {
        assert_eq!(
            RESOURCE_SCHEMA.sample(SampleMode::RequiredOnly),
            json!({ "Name": "String" })
        );
        assert_eq!(
            SETTINGS_SCHEMA.sample(SampleMode::RequiredOnly),
            json!({ "Level": "single-az" })
        );
    }
}
