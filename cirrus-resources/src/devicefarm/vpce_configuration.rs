//! VpceConfiguration resource type
//!
//! Auto-generated from CloudFormation schema: AWS::DeviceFarm::VPCEConfiguration
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::DeviceFarm::VPCEConfiguration`
///
/// Creates a configuration record in Device Farm for your Amazon Virtual Private Cloud (VPC)
/// endpoint service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VpceConfiguration {
    /// The DNS name that Device Farm will use to map to the private service you want to access.
    pub service_dns_name: Value<String>,
    /// An array of key-value pairs to apply to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// An optional description that provides details about your VPC endpoint configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpce_configuration_description: Option<Value<String>>,
    /// The friendly name you give to your VPC endpoint configuration to manage your configurations
    /// more easily.
    pub vpce_configuration_name: Value<String>,
    /// The name of the VPC endpoint service that you want to access from Device Farm.
    pub vpce_service_name: Value<String>,
}

impl ResourceProperties for VpceConfiguration {
    const TYPE: &'static str = "AWS::DeviceFarm::VPCEConfiguration";

    fn schema() -> &'static ResourceSchema {
        &VPCE_CONFIGURATION_SCHEMA
    }
}

pub const VPCE_CONFIGURATION_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::DeviceFarm::VPCEConfiguration",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-devicefarm-vpceconfiguration.html",
    properties: &[
        PropertySchema::new("ServiceDnsName", PropertyType::String)
            .required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("VpceConfigurationDescription", PropertyType::String),
        PropertySchema::new("VpceConfigurationName", PropertyType::String)
            .required(),
        PropertySchema::new("VpceServiceName", PropertyType::String)
            .required(),
    ],
    attributes: &["Arn"],
};
