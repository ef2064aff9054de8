//! InstanceProfile resource type
//!
//! Auto-generated from CloudFormation schema: AWS::DeviceFarm::InstanceProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::DeviceFarm::InstanceProfile`
///
/// Creates a profile that can be applied to one or more private fleet device instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InstanceProfile {
    /// The description of the instance profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// An array of strings containing the list of app packages that should not be cleaned up from
    /// the device after a test run completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_app_packages_from_cleanup: Option<List<String>>,
    /// The name of the instance profile.
    pub name: Value<String>,
    /// When set to true, Device Farm removes app packages after a test run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_cleanup: Option<Value<bool>>,
    /// When set to true, Device Farm reboots the instance after a test run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reboot_after_use: Option<Value<bool>>,
    /// An array of key-value pairs to apply to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceProperties for InstanceProfile {
    const TYPE: &'static str = "AWS::DeviceFarm::InstanceProfile";

    fn schema() -> &'static ResourceSchema {
        &INSTANCE_PROFILE_SCHEMA
    }
}

pub const INSTANCE_PROFILE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::DeviceFarm::InstanceProfile",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-devicefarm-instanceprofile.html",
    properties: &[
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new(
            "ExcludeAppPackagesFromCleanup",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new("Name", PropertyType::String).required(),
        PropertySchema::new("PackageCleanup", PropertyType::Boolean),
        PropertySchema::new("RebootAfterUse", PropertyType::Boolean),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
    ],
    attributes: &["Arn"],
};
