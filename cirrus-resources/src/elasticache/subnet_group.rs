//! SubnetGroup resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::SubnetGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::ElastiCache::SubnetGroup`
///
/// Creates a cache subnet group. A cache subnet group is a collection of subnets in a VPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SubnetGroup {
    /// The name for the cache subnet group. This value is stored as a lowercase string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_subnet_group_name: Option<Value<String>>,
    /// The description for the cache subnet group.
    pub description: Value<String>,
    /// The EC2 subnet IDs for the cache subnet group.
    pub subnet_ids: List<String>,
    /// A list of tags to be added to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceProperties for SubnetGroup {
    const TYPE: &'static str = "AWS::ElastiCache::SubnetGroup";

    fn schema() -> &'static ResourceSchema {
        &SUBNET_GROUP_SCHEMA
    }
}

pub const SUBNET_GROUP_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::SubnetGroup",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-subnetgroup.html",
    properties: &[
        PropertySchema::new("CacheSubnetGroupName", PropertyType::String)
            .immutable(),
        PropertySchema::new("Description", PropertyType::String)
            .required(),
        PropertySchema::new("SubnetIds", PropertyType::List(&PropertyType::String))
            .required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
    ],
    attributes: &[],
};
