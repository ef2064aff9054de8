//! SecurityGroupIngress resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::SecurityGroupIngress
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema};
use cirrus_core::Value;
use serde::{Deserialize, Serialize};

/// `AWS::ElastiCache::SecurityGroupIngress`
///
/// Authorizes ingress to a cache security group from hosts in specified Amazon EC2 security groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SecurityGroupIngress {
    /// The name of the Cache Security Group to authorize.
    pub cache_security_group_name: Value<String>,
    /// Name of the EC2 Security Group to include in the authorization.
    #[serde(rename = "EC2SecurityGroupName")]
    pub ec2_security_group_name: Value<String>,
    /// Specifies the AWS Account ID of the owner of the EC2 security group specified in the
    /// EC2SecurityGroupName property.
    #[serde(rename = "EC2SecurityGroupOwnerId", default, skip_serializing_if = "Option::is_none")]
    pub ec2_security_group_owner_id: Option<Value<String>>,
}

impl ResourceProperties for SecurityGroupIngress {
    const TYPE: &'static str = "AWS::ElastiCache::SecurityGroupIngress";

    fn schema() -> &'static ResourceSchema {
        &SECURITY_GROUP_INGRESS_SCHEMA
    }
}

pub const SECURITY_GROUP_INGRESS_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::SecurityGroupIngress",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-securitygroupingress.html",
    properties: &[
        PropertySchema::new("CacheSecurityGroupName", PropertyType::String)
            .required(),
        PropertySchema::new("EC2SecurityGroupName", PropertyType::String)
            .required(),
        PropertySchema::new("EC2SecurityGroupOwnerId", PropertyType::String),
    ],
    attributes: &[],
};
