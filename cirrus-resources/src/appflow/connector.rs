//! Connector resource type
//!
//! Auto-generated from CloudFormation schema: AWS::AppFlow::Connector
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::Value;
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `ConnectorProvisioningType`
    pub enum ConnectorConnectorProvisioningType {
        Lambda = "LAMBDA",
    }
}

/// `AWS::AppFlow::Connector`
///
/// Registers a new custom connector with your AWS account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Connector {
    /// The label used for registering the connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_label: Option<Value<String>>,
    /// The configuration required for registering the connector.
    pub connector_provisioning_config: ConnectorProvisioningConfig,
    /// The provisioning type used to register the connector.
    pub connector_provisioning_type: Value<ConnectorConnectorProvisioningType>,
    /// A description about the connector runtime setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
}

impl ResourceProperties for Connector {
    const TYPE: &'static str = "AWS::AppFlow::Connector";

    fn schema() -> &'static ResourceSchema {
        &CONNECTOR_SCHEMA
    }
}

pub const CONNECTOR_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::AppFlow::Connector",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appflow-connector.html",
    properties: &[
        PropertySchema::new("ConnectorLabel", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "ConnectorProvisioningConfig",
            PropertyType::Struct(&CONNECTOR_PROVISIONING_CONFIG_SCHEMA),
        )
        .required(),
        PropertySchema::new(
            "ConnectorProvisioningType",
            PropertyType::Enum(&ConnectorConnectorProvisioningType::SCHEMA),
        )
        .required(),
        PropertySchema::new("Description", PropertyType::String),
    ],
    attributes: &["ConnectorArn"],
};

/// Contains information about the configuration of the connector being registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectorProvisioningConfig {
    /// Contains information about the configuration of the lambda which is being registered as the
    /// connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<LambdaConnectorProvisioningConfig>,
}

pub const CONNECTOR_PROVISIONING_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "ConnectorProvisioningConfig",
    properties: &[
        PropertySchema::new(
            "Lambda",
            PropertyType::Struct(&LAMBDA_CONNECTOR_PROVISIONING_CONFIG_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LambdaConnectorProvisioningConfig {
    /// Lambda ARN of the connector being registered.
    pub lambda_arn: Value<String>,
}

pub const LAMBDA_CONNECTOR_PROVISIONING_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "LambdaConnectorProvisioningConfig",
    properties: &[
        PropertySchema::new("LambdaArn", PropertyType::String)
            .required(),
    ],
};
