//! Deployment resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::Deployment
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema};
use cirrus_core::Value;
use serde::{Deserialize, Serialize};

/// `AWS::ApiGatewayV2::Deployment`
///
/// Creates a deployment for an API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Deployment {
    /// The API identifier.
    pub api_id: Value<String>,
    /// The description for the deployment resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The name of an existing stage to associate with the deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_name: Option<Value<String>>,
}

impl ResourceProperties for Deployment {
    const TYPE: &'static str = "AWS::ApiGatewayV2::Deployment";

    fn schema() -> &'static ResourceSchema {
        &DEPLOYMENT_SCHEMA
    }
}

pub const DEPLOYMENT_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::Deployment",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-deployment.html",
    properties: &[
        PropertySchema::new("ApiId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new("StageName", PropertyType::String),
    ],
    attributes: &["DeploymentId"],
};
