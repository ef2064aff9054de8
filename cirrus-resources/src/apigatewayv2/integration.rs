//! Integration resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::Integration
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::collections::BTreeMap;

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{Map, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `ConnectionType`
    pub enum IntegrationConnectionType {
        Internet = "INTERNET",
        VpcLink = "VPC_LINK",
    }
}

allowed_values! {
    /// Allowed values for `ContentHandlingStrategy`
    pub enum IntegrationContentHandlingStrategy {
        ConvertToBinary = "CONVERT_TO_BINARY",
        ConvertToText = "CONVERT_TO_TEXT",
    }
}

allowed_values! {
    /// Allowed values for `IntegrationType`
    pub enum IntegrationIntegrationType {
        Aws = "AWS",
        AwsProxy = "AWS_PROXY",
        Http = "HTTP",
        HttpProxy = "HTTP_PROXY",
        Mock = "MOCK",
    }
}

allowed_values! {
    /// Allowed values for `PassthroughBehavior`
    pub enum IntegrationPassthroughBehavior {
        WhenNoMatch = "WHEN_NO_MATCH",
        Never = "NEVER",
        WhenNoTemplates = "WHEN_NO_TEMPLATES",
    }
}

/// `AWS::ApiGatewayV2::Integration`
///
/// An integration for an API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Integration {
    /// The API identifier.
    pub api_id: Value<String>,
    /// The ID of the VPC link for a private integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<Value<String>>,
    /// The type of the network connection to the integration endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<Value<IntegrationConnectionType>>,
    /// Specifies how to handle response payload content type conversions. Supported only for
    /// WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_handling_strategy: Option<Value<IntegrationContentHandlingStrategy>>,
    /// Specifies the credentials required for the integration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_arn: Option<Value<String>>,
    /// The description of the integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// Specifies the integration's HTTP method type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_method: Option<Value<String>>,
    /// Supported only for HTTP API AWS_PROXY integrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_subtype: Option<Value<String>>,
    /// The integration type of an integration.
    pub integration_type: Value<IntegrationIntegrationType>,
    /// For a Lambda integration, specify the URI of a Lambda function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_uri: Option<Value<String>>,
    /// Specifies the pass-through behavior for incoming requests based on the Content-Type header
    /// in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passthrough_behavior: Option<Value<IntegrationPassthroughBehavior>>,
    /// Specifies the format of the payload sent to an integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_format_version: Option<Value<String>>,
    /// For WebSocket APIs, a key-value map specifying request parameters that are passed from the
    /// method request to the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_parameters: Option<Map<String>>,
    /// Represents a map of Velocity templates that are applied on the request payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_templates: Option<Map<String>>,
    /// Supported only for HTTP APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_parameters: Option<BTreeMap<String, ResponseParameterMap>>,
    /// The template selection expression for the integration. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_selection_expression: Option<Value<String>>,
    /// Custom timeout between 50 and 29,000 milliseconds for WebSocket APIs and between 50 and
    /// 30,000 milliseconds for HTTP APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_in_millis: Option<Value<i64>>,
    /// The TLS configuration for a private integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
}

impl ResourceProperties for Integration {
    const TYPE: &'static str = "AWS::ApiGatewayV2::Integration";

    fn schema() -> &'static ResourceSchema {
        &INTEGRATION_SCHEMA
    }
}

pub const INTEGRATION_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::Integration",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-integration.html",
    properties: &[
        PropertySchema::new("ApiId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("ConnectionId", PropertyType::String),
        PropertySchema::new(
            "ConnectionType",
            PropertyType::Enum(&IntegrationConnectionType::SCHEMA),
        ),
        PropertySchema::new(
            "ContentHandlingStrategy",
            PropertyType::Enum(&IntegrationContentHandlingStrategy::SCHEMA),
        ),
        PropertySchema::new("CredentialsArn", PropertyType::String),
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new("IntegrationMethod", PropertyType::String),
        PropertySchema::new("IntegrationSubtype", PropertyType::String),
        PropertySchema::new(
            "IntegrationType",
            PropertyType::Enum(&IntegrationIntegrationType::SCHEMA),
        )
        .required(),
        PropertySchema::new("IntegrationUri", PropertyType::String),
        PropertySchema::new(
            "PassthroughBehavior",
            PropertyType::Enum(&IntegrationPassthroughBehavior::SCHEMA),
        ),
        PropertySchema::new("PayloadFormatVersion", PropertyType::String),
        PropertySchema::new(
            "RequestParameters",
            PropertyType::Map(&PropertyType::String),
        ),
        PropertySchema::new("RequestTemplates", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new(
            "ResponseParameters",
            PropertyType::Map(&PropertyType::Struct(&RESPONSE_PARAMETER_MAP_SCHEMA)),
        ),
        PropertySchema::new("TemplateSelectionExpression", PropertyType::String),
        PropertySchema::new("TimeoutInMillis", PropertyType::Integer),
        PropertySchema::new("TlsConfig", PropertyType::Struct(&TLS_CONFIG_SCHEMA)),
    ],
    attributes: &["IntegrationId"],
};

/// Response parameters for one HTTP status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResponseParameterMap {
    /// Supported only for HTTP APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_parameters: Option<Vec<ResponseParameter>>,
}

pub const RESPONSE_PARAMETER_MAP_SCHEMA: StructSchema = StructSchema {
    name: "ResponseParameterMap",
    properties: &[
        PropertySchema::new(
            "ResponseParameters",
            PropertyType::List(&PropertyType::Struct(&RESPONSE_PARAMETER_SCHEMA)),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResponseParameter {
    /// Specifies the location of the response to modify, and how to modify it.
    pub destination: Value<String>,
    /// Specifies the data to update the parameter with.
    pub source: Value<String>,
}

pub const RESPONSE_PARAMETER_SCHEMA: StructSchema = StructSchema {
    name: "ResponseParameter",
    properties: &[
        PropertySchema::new("Destination", PropertyType::String)
            .required(),
        PropertySchema::new("Source", PropertyType::String)
            .required(),
    ],
};

/// The TLS configuration for a private integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TlsConfig {
    /// If you specify a server name, API Gateway uses it to verify the hostname on the
    /// integration's certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name_to_verify: Option<Value<String>>,
}

pub const TLS_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "TlsConfig",
    properties: &[
        PropertySchema::new("ServerNameToVerify", PropertyType::String),
    ],
};
