//! Stage resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGatewayV2::Stage
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::collections::BTreeMap;

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{Map, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `LoggingLevel`
    pub enum RouteSettingsLoggingLevel {
        Error = "ERROR",
        Info = "INFO",
        Off = "OFF",
    }
}

/// `AWS::ApiGatewayV2::Stage`
///
/// A stage for an API. Each stage is a named reference to a deployment of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Stage {
    /// Settings for logging access in this stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_log_settings: Option<AccessLogSettings>,
    /// This parameter is not currently supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_policy_id: Option<Value<String>>,
    /// The API identifier.
    pub api_id: Value<String>,
    /// Specifies whether updates to an API automatically trigger a new deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_deploy: Option<Value<bool>>,
    /// The identifier of a client certificate for a Stage. Supported only for WebSocket APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate_id: Option<Value<String>>,
    /// The default route settings for the stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_route_settings: Option<RouteSettings>,
    /// The deployment identifier for the API stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<Value<String>>,
    /// The description for the API stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// Route settings for the stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_settings: Option<BTreeMap<String, RouteSettings>>,
    /// The stage name.
    pub stage_name: Value<String>,
    /// A map that defines the stage variables for a Stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_variables: Option<Map<String>>,
    /// The collection of tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Map<String>>,
}

impl ResourceProperties for Stage {
    const TYPE: &'static str = "AWS::ApiGatewayV2::Stage";

    fn schema() -> &'static ResourceSchema {
        &STAGE_SCHEMA
    }
}

pub const STAGE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ApiGatewayV2::Stage",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigatewayv2-stage.html",
    properties: &[
        PropertySchema::new(
            "AccessLogSettings",
            PropertyType::Struct(&ACCESS_LOG_SETTINGS_SCHEMA),
        ),
        PropertySchema::new("AccessPolicyId", PropertyType::String),
        PropertySchema::new("ApiId", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("AutoDeploy", PropertyType::Boolean),
        PropertySchema::new("ClientCertificateId", PropertyType::String),
        PropertySchema::new(
            "DefaultRouteSettings",
            PropertyType::Struct(&ROUTE_SETTINGS_SCHEMA),
        ),
        PropertySchema::new("DeploymentId", PropertyType::String),
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new(
            "RouteSettings",
            PropertyType::Map(&PropertyType::Struct(&ROUTE_SETTINGS_SCHEMA)),
        ),
        PropertySchema::new("StageName", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("StageVariables", PropertyType::Map(&PropertyType::String)),
        PropertySchema::new("Tags", PropertyType::Map(&PropertyType::String)),
    ],
    attributes: &[],
};

/// Settings for logging access in a stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AccessLogSettings {
    /// The ARN of the CloudWatch Logs log group to receive access logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_arn: Option<Value<String>>,
    /// A single line format of the access logs of data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Value<String>>,
}

pub const ACCESS_LOG_SETTINGS_SCHEMA: StructSchema = StructSchema {
    name: "AccessLogSettings",
    properties: &[
        PropertySchema::new("DestinationArn", PropertyType::String),
        PropertySchema::new("Format", PropertyType::String),
    ],
};

/// Route settings for a stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RouteSettings {
    /// Specifies whether data trace logging is enabled for this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_trace_enabled: Option<Value<bool>>,
    /// Specifies whether detailed metrics are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_metrics_enabled: Option<Value<bool>>,
    /// Specifies the logging level for this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_level: Option<Value<RouteSettingsLoggingLevel>>,
    /// Specifies the throttling burst limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling_burst_limit: Option<Value<i64>>,
    /// Specifies the throttling rate limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling_rate_limit: Option<Value<f64>>,
}

pub const ROUTE_SETTINGS_SCHEMA: StructSchema = StructSchema {
    name: "RouteSettings",
    properties: &[
        PropertySchema::new("DataTraceEnabled", PropertyType::Boolean),
        PropertySchema::new("DetailedMetricsEnabled", PropertyType::Boolean),
        PropertySchema::new(
            "LoggingLevel",
            PropertyType::Enum(&RouteSettingsLoggingLevel::SCHEMA),
        ),
        PropertySchema::new("ThrottlingBurstLimit", PropertyType::Integer),
        PropertySchema::new("ThrottlingRateLimit", PropertyType::Double),
    ],
};
