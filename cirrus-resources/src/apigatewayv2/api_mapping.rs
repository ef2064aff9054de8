//! ApiMapping resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::ApiMapping
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema};
use cirrus_core::Value;
use serde::{Deserialize, Serialize};

/// `AWS::ApiGatewayV2::ApiMapping`
///
/// An API mapping that connects an API stage to a custom domain name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ApiMapping {
    /// The identifier of the API.
    pub api_id: Value<String>,
    /// The API mapping key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_mapping_key: Option<Value<String>>,
    /// The domain name.
    pub domain_name: Value<String>,
    /// The API stage.
    pub stage: Value<String>,
}

impl ResourceProperties for ApiMapping {
    const TYPE: &'static str = "AWS::ApiGatewayV2::ApiMapping";

    fn schema() -> &'static ResourceSchema {
        &API_MAPPING_SCHEMA
    }
}

pub const API_MAPPING_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::ApiMapping",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-apimapping.html",
    properties: &[
        PropertySchema::new("ApiId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("ApiMappingKey", PropertyType::String),
        PropertySchema::new("DomainName", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("Stage", PropertyType::String)
            .required(),
    ],
    attributes: &["ApiMappingId"],
};
