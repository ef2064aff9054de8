//! Api resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::Api
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{Json, List, Map, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `IpAddressType`
    pub enum ApiIpAddressType {
        Ipv4 = "ipv4",
        Dualstack = "dualstack",
    }
}

allowed_values! {
    /// Allowed values for `ProtocolType`
    pub enum ApiProtocolType {
        Http = "HTTP",
        Websocket = "WEBSOCKET",
    }
}

/// `AWS::ApiGatewayV2::Api`
///
/// Creates an API. For HTTP APIs a route and integration can be created in the same step through
/// quick create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Api {
    /// An API key selection expression. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_selection_expression: Option<Value<String>>,
    /// Specifies how to interpret the base path of the API during import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<Value<String>>,
    /// The OpenAPI definition. Supported only for HTTP APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Json>,
    /// The S3 location of an OpenAPI definition. Supported only for HTTP APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_s3_location: Option<BodyS3Location>,
    /// A CORS configuration. Supported only for HTTP APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_configuration: Option<Cors>,
    /// This property is part of quick create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_arn: Option<Value<String>>,
    /// The description of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// Specifies whether clients can invoke your API by using the default execute-api endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_execute_api_endpoint: Option<Value<bool>>,
    /// Avoid validating models when creating a deployment. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_schema_validation: Option<Value<bool>>,
    /// Specifies whether to rollback the API creation when a warning is encountered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_warnings: Option<Value<bool>>,
    /// The IP address types that can invoke the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<Value<ApiIpAddressType>>,
    /// The name of the API. Required unless you specify an OpenAPI definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,
    /// The API protocol. Required unless you specify an OpenAPI definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<Value<ApiProtocolType>>,
    /// This property is part of quick create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_key: Option<Value<String>>,
    /// The route selection expression for the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_selection_expression: Option<Value<String>>,
    /// The collection of tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Map<String>>,
    /// This property is part of quick create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value<String>>,
    /// A version identifier for the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value<String>>,
}

impl ResourceProperties for Api {
    const TYPE: &'static str = "AWS::ApiGatewayV2::Api";

    fn schema() -> &'static ResourceSchema {
        &API_SCHEMA
    }
}

pub const API_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::Api",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-api.html",
    properties: &[
        PropertySchema::new("ApiKeySelectionExpression", PropertyType::String),
        PropertySchema::new("BasePath", PropertyType::String),
        PropertySchema::new("Body", PropertyType::Json),
        PropertySchema::new(
            "BodyS3Location",
            PropertyType::Struct(&BODY_S3_LOCATION_SCHEMA),
        ),
        PropertySchema::new("CorsConfiguration", PropertyType::Struct(&CORS_SCHEMA)),
        PropertySchema::new("CredentialsArn", PropertyType::String),
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new("DisableExecuteApiEndpoint", PropertyType::Boolean),
        PropertySchema::new("DisableSchemaValidation", PropertyType::Boolean),
        PropertySchema::new("FailOnWarnings", PropertyType::Boolean),
        PropertySchema::new(
            "IpAddressType",
            PropertyType::Enum(&ApiIpAddressType::SCHEMA),
        ),
        PropertySchema::new("Name", PropertyType::String),
        PropertySchema::new("ProtocolType", PropertyType::Enum(&ApiProtocolType::SCHEMA))
            .immutable(),
        PropertySchema::new("RouteKey", PropertyType::String),
        PropertySchema::new("RouteSelectionExpression", PropertyType::String),
        PropertySchema::new("Tags", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new("Target", PropertyType::String),
        PropertySchema::new("Version", PropertyType::String),
    ],
    attributes: &["ApiEndpoint", "ApiId"],
};

/// The S3 bucket location of an OpenAPI definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BodyS3Location {
    /// The S3 bucket that contains the OpenAPI definition to import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<Value<String>>,
    /// The Etag of the S3 object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<Value<String>>,
    /// The key of the S3 object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value<String>>,
    /// The version of the S3 object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value<String>>,
}

pub const BODY_S3_LOCATION_SCHEMA: StructSchema = StructSchema {
    name: "BodyS3Location",
    properties: &[
        PropertySchema::new("Bucket", PropertyType::String),
        PropertySchema::new("Etag", PropertyType::String),
        PropertySchema::new("Key", PropertyType::String),
        PropertySchema::new("Version", PropertyType::String),
    ],
};

/// A CORS configuration for an HTTP API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Cors {
    /// Specifies whether credentials are included in the CORS request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Value<bool>>,
    /// Represents a collection of allowed headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<List<String>>,
    /// Represents a collection of allowed HTTP methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_methods: Option<List<String>>,
    /// Represents a collection of allowed origins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_origins: Option<List<String>>,
    /// Represents a collection of exposed headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<List<String>>,
    /// The number of seconds that the browser should cache preflight request results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<Value<i64>>,
}

pub const CORS_SCHEMA: StructSchema = StructSchema {
    name: "Cors",
    properties: &[
        PropertySchema::new("AllowCredentials", PropertyType::Boolean),
        PropertySchema::new("AllowHeaders", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("AllowMethods", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("AllowOrigins", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("ExposeHeaders", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("MaxAge", PropertyType::Integer),
    ],
};
