//! Authorizer resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::Authorizer
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{List, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `AuthorizerType`
    pub enum AuthorizerAuthorizerType {
        Request = "REQUEST",
        Jwt = "JWT",
    }
}

/// `AWS::ApiGatewayV2::Authorizer`
///
/// An authorizer for an API, used to control access to routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Authorizer {
    /// The API identifier.
    pub api_id: Value<String>,
    /// Specifies the required credentials as an IAM role for API Gateway to invoke the authorizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer_credentials_arn: Option<Value<String>>,
    /// Specifies the format of the payload sent to an HTTP API Lambda authorizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer_payload_format_version: Option<Value<String>>,
    /// The time to live, in seconds, of cached authorizer results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer_result_ttl_in_seconds: Option<Value<i64>>,
    /// The authorizer type.
    pub authorizer_type: Value<AuthorizerAuthorizerType>,
    /// The authorizer's Uniform Resource Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer_uri: Option<Value<String>>,
    /// Specifies whether a Lambda authorizer returns a response in a simple format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_simple_responses: Option<Value<bool>>,
    /// The identity source for which authorization is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_source: Option<List<String>>,
    /// This parameter is not used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_validation_expression: Option<Value<String>>,
    /// The JWTConfiguration property specifies the configuration of a JWT authorizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_configuration: Option<JwtConfiguration>,
    /// The name of the authorizer.
    pub name: Value<String>,
}

impl ResourceProperties for Authorizer {
    const TYPE: &'static str = "AWS::ApiGatewayV2::Authorizer";

    fn schema() -> &'static ResourceSchema {
        &AUTHORIZER_SCHEMA
    }
}

pub const AUTHORIZER_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::Authorizer",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-authorizer.html",
    properties: &[
        PropertySchema::new("ApiId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("AuthorizerCredentialsArn", PropertyType::String),
        PropertySchema::new("AuthorizerPayloadFormatVersion", PropertyType::String),
        PropertySchema::new("AuthorizerResultTtlInSeconds", PropertyType::Integer),
        PropertySchema::new(
            "AuthorizerType",
            PropertyType::Enum(&AuthorizerAuthorizerType::SCHEMA),
        )
        .required(),
        PropertySchema::new("AuthorizerUri", PropertyType::String),
        PropertySchema::new("EnableSimpleResponses", PropertyType::Boolean),
        PropertySchema::new("IdentitySource", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("IdentityValidationExpression", PropertyType::String),
        PropertySchema::new(
            "JwtConfiguration",
            PropertyType::Struct(&JWT_CONFIGURATION_SCHEMA),
        ),
        PropertySchema::new("Name", PropertyType::String).required(),
    ],
    attributes: &["AuthorizerId"],
};

/// The configuration of a JWT authorizer. Required for the JWT authorizer type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JwtConfiguration {
    /// A list of the intended recipients of the JWT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<List<String>>,
    /// The base domain of the identity provider that issues JSON Web Tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Value<String>>,
}

pub const JWT_CONFIGURATION_SCHEMA: StructSchema = StructSchema {
    name: "JWTConfiguration",
    properties: &[
        PropertySchema::new("Audience", PropertyType::List(&PropertyType::String)),
        PropertySchema::new("Issuer", PropertyType::String),
    ],
};
