//! UserGroup resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::UserGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `Engine`
    pub enum UserGroupEngine {
        Redis = "redis",
        Valkey = "valkey",
    }
}

/// `AWS::ElastiCache::UserGroup`
///
/// For Valkey 7.2 and onwards, or Redis OSS engine version 6.0 and onwards: creates a user group
/// for role-based access control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UserGroup {
    /// The current supported values are valkey and redis.
    pub engine: Value<UserGroupEngine>,
    /// A list of tags to be added to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The ID of the user group.
    pub user_group_id: Value<String>,
    /// The list of user IDs that belong to the user group. A user named default must be included.
    pub user_ids: List<String>,
}

impl ResourceProperties for UserGroup {
    const TYPE: &'static str = "AWS::ElastiCache::UserGroup";

    fn schema() -> &'static ResourceSchema {
        &USER_GROUP_SCHEMA
    }
}

pub const USER_GROUP_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::UserGroup",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-usergroup.html",
    properties: &[
        PropertySchema::new("Engine", PropertyType::Enum(&UserGroupEngine::SCHEMA))
            .required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("UserGroupId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("UserIds", PropertyType::List(&PropertyType::String))
            .required(),
    ],
    attributes: &["Arn", "Status"],
};
