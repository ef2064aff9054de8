//! Project resource type
//!
//! Auto-generated from CloudFormation schema: AWS::DeviceFarm::Project
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::DeviceFarm::Project`
///
/// Creates a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Project {
    /// Sets the execution timeout value (in minutes) for a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_job_timeout_minutes: Option<Value<i64>>,
    /// The project's name.
    pub name: Value<String>,
    /// An array of key-value pairs to apply to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The VPC security groups and subnets that are attached to a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
}

impl ResourceProperties for Project {
    const TYPE: &'static str = "AWS::DeviceFarm::Project";

    fn schema() -> &'static ResourceSchema {
        &PROJECT_SCHEMA
    }
}

pub const PROJECT_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::DeviceFarm::Project",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-devicefarm-project.html",
    properties: &[
        PropertySchema::new("DefaultJobTimeoutMinutes", PropertyType::Integer),
        PropertySchema::new("Name", PropertyType::String).required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("VpcConfig", PropertyType::Struct(&VPC_CONFIG_SCHEMA)),
    ],
    attributes: &["Arn"],
};

/// The VPC security groups and subnets attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VpcConfig {
    /// A list of VPC security group IDs.
    pub security_group_ids: List<String>,
    /// A list of VPC subnet IDs.
    pub subnet_ids: List<String>,
    /// The ID of the Amazon VPC.
    pub vpc_id: Value<String>,
}

pub const VPC_CONFIG_SCHEMA: StructSchema = StructSchema {
    name: "VpcConfig",
    properties: &[
        PropertySchema::new(
            "SecurityGroupIds",
            PropertyType::List(&PropertyType::String),
        )
        .required(),
        PropertySchema::new("SubnetIds", PropertyType::List(&PropertyType::String))
            .required(),
        PropertySchema::new("VpcId", PropertyType::String)
            .required(),
    ],
};
