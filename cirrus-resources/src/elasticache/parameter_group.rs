//! ParameterGroup resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::ParameterGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{Map, Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::ElastiCache::ParameterGroup`
///
/// Creates a new cache parameter group. Cache parameter groups control the parameters for a cache
/// cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ParameterGroup {
    /// The name of the cache parameter group family that this cache parameter group is compatible
    /// with.
    pub cache_parameter_group_family: Value<String>,
    /// The description for this cache parameter group.
    pub description: Value<String>,
    /// A comma-delimited list of parameter name/value pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String>>,
    /// A list of tags to be added to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceProperties for ParameterGroup {
    const TYPE: &'static str = "AWS::ElastiCache::ParameterGroup";

    fn schema() -> &'static ResourceSchema {
        &PARAMETER_GROUP_SCHEMA
    }
}

pub const PARAMETER_GROUP_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::ParameterGroup",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-parametergroup.html",
    properties: &[
        PropertySchema::new("CacheParameterGroupFamily", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("Description", PropertyType::String)
            .required(),
        PropertySchema::new("Properties", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
    ],
    attributes: &["CacheParameterGroupName"],
};
