//! VpcLink resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::VpcLink
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema};
use cirrus_core::{List, Map, Value};
use serde::{Deserialize, Serialize};

/// `AWS::ApiGatewayV2::VpcLink`
///
/// A VPC link. A VPC link enables you to create private integrations that access resources in a
/// VPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VpcLink {
    /// The name of the VPC link.
    pub name: Value<String>,
    /// A list of security group IDs for the VPC link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<List<String>>,
    /// A list of subnet IDs to include in the VPC link.
    pub subnet_ids: List<String>,
    /// The collection of tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Map<String>>,
}

impl ResourceProperties for VpcLink {
    const TYPE: &'static str = "AWS::ApiGatewayV2::VpcLink";

    fn schema() -> &'static ResourceSchema {
        &VPC_LINK_SCHEMA
    }
}

pub const VPC_LINK_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::VpcLink",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-vpclink.html",
    properties: &[
        PropertySchema::new("Name", PropertyType::String).required(),
        PropertySchema::new(
            "SecurityGroupIds",
            PropertyType::List(&PropertyType::String),
        )
        .immutable(),
        PropertySchema::new("SubnetIds", PropertyType::List(&PropertyType::String))
            .required()
            .immutable(),
        PropertySchema::new("Tags", PropertyType::Map(&PropertyType::String)),
    ],
    attributes: &["VpcLinkId"],
};
