//! Route resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::Route
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::collections::BTreeMap;

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{Json, List, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `AuthorizationType`
    pub enum RouteAuthorizationType {
        None = "NONE",
        AwsIam = "AWS_IAM",
        Custom = "CUSTOM",
        Jwt = "JWT",
    }
}

/// `AWS::ApiGatewayV2::Route`
///
/// A route for an API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Route {
    /// The API identifier.
    pub api_id: Value<String>,
    /// Specifies whether an API key is required for the route. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_required: Option<Value<bool>>,
    /// The authorization scopes supported by this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_scopes: Option<List<String>>,
    /// The authorization type for the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_type: Option<Value<RouteAuthorizationType>>,
    /// The identifier of the Authorizer resource to be associated with this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer_id: Option<Value<String>>,
    /// The model selection expression for the route. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_selection_expression: Option<Value<String>>,
    /// The operation name for the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<Value<String>>,
    /// The request models for the route. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_models: Option<Json>,
    /// The request parameters for the route. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_parameters: Option<BTreeMap<String, ParameterConstraints>>,
    /// The route key for the route.
    pub route_key: Value<String>,
    /// The route response selection expression for the route. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_response_selection_expression: Option<Value<String>>,
    /// The target for the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value<String>>,
}

impl ResourceProperties for Route {
    const TYPE: &'static str = "AWS::ApiGatewayV2::Route";

    fn schema() -> &'static ResourceSchema {
        &ROUTE_SCHEMA
    }
}

pub const ROUTE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::Route",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-route.html",
    properties: &[
        PropertySchema::new("ApiId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("ApiKeyRequired", PropertyType::Boolean),
        PropertySchema::new(
            "AuthorizationScopes",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new(
            "AuthorizationType",
            PropertyType::Enum(&RouteAuthorizationType::SCHEMA),
        ),
        PropertySchema::new("AuthorizerId", PropertyType::String),
        PropertySchema::new("ModelSelectionExpression", PropertyType::String),
        PropertySchema::new("OperationName", PropertyType::String),
        PropertySchema::new("RequestModels", PropertyType::Json),
        PropertySchema::new(
            "RequestParameters",
            PropertyType::Map(&PropertyType::Struct(&PARAMETER_CONSTRAINTS_SCHEMA)),
        ),
        PropertySchema::new("RouteKey", PropertyType::String)
            .required(),
        PropertySchema::new("RouteResponseSelectionExpression", PropertyType::String),
        PropertySchema::new("Target", PropertyType::String),
    ],
    attributes: &["RouteId"],
};

/// Specifies whether a route request parameter is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ParameterConstraints {
    /// Specifies whether the parameter is required.
    pub required: Value<bool>,
}

pub const PARAMETER_CONSTRAINTS_SCHEMA: StructSchema = StructSchema {
    name: "ParameterConstraints",
    properties: &[
        PropertySchema::new("Required", PropertyType::Boolean)
            .required(),
    ],
};
