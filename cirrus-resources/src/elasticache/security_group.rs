//! SecurityGroup resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::SecurityGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::ElastiCache::SecurityGroup`
///
/// Creates a cache security group. Use a cache security group to control access to one or more
/// clusters outside a VPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SecurityGroup {
    /// A description for the cache security group.
    pub description: Value<String>,
    /// A tag that can be added to an ElastiCache security group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceProperties for SecurityGroup {
    const TYPE: &'static str = "AWS::ElastiCache::SecurityGroup";

    fn schema() -> &'static ResourceSchema {
        &SECURITY_GROUP_SCHEMA
    }
}

pub const SECURITY_GROUP_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::SecurityGroup",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-securitygroup.html",
    properties: &[
        PropertySchema::new("Description", PropertyType::String)
            .required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
    ],
    attributes: &[],
};
