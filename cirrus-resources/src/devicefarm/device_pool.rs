//! DevicePool resource type
//!
//! Auto-generated from CloudFormation schema: AWS::DeviceFarm::DevicePool
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};
use cirrus_core::{Tag, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `Attribute`
    pub enum RuleAttribute {
        Arn = "ARN",
        Platform = "PLATFORM",
        FormFactor = "FORM_FACTOR",
        Manufacturer = "MANUFACTURER",
        RemoteAccessEnabled = "REMOTE_ACCESS_ENABLED",
        RemoteDebugEnabled = "REMOTE_DEBUG_ENABLED",
        AppiumVersion = "APPIUM_VERSION",
        InstanceArn = "INSTANCE_ARN",
        InstanceLabels = "INSTANCE_LABELS",
        FleetType = "FLEET_TYPE",
        OsVersion = "OS_VERSION",
        Model = "MODEL",
        Availability = "AVAILABILITY",
    }
}

allowed_values! {
    /// Allowed values for `Operator`
    pub enum RuleOperator {
        Equals = "EQUALS",
        LessThan = "LESS_THAN",
        LessThanOrEquals = "LESS_THAN_OR_EQUALS",
        GreaterThan = "GREATER_THAN",
        GreaterThanOrEquals = "GREATER_THAN_OR_EQUALS",
        In = "IN",
        NotIn = "NOT_IN",
        Contains = "CONTAINS",
    }
}

/// `AWS::DeviceFarm::DevicePool`
///
/// Represents a request to the create device pool operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DevicePool {
    /// The device pool's description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The number of devices that Device Farm can add to your device pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_devices: Option<Value<i64>>,
    /// The device pool's name.
    pub name: Value<String>,
    /// The ARN of the project for the device pool.
    pub project_arn: Value<String>,
    /// The device pool's rules.
    pub rules: Vec<Rule>,
    /// An array of key-value pairs to apply to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceProperties for DevicePool {
    const TYPE: &'static str = "AWS::DeviceFarm::DevicePool";

    fn schema() -> &'static ResourceSchema {
        &DEVICE_POOL_SCHEMA
    }
}

pub const DEVICE_POOL_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::DeviceFarm::DevicePool",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-devicefarm-devicepool.html",
    properties: &[
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new("MaxDevices", PropertyType::Integer),
        PropertySchema::new("Name", PropertyType::String).required(),
        PropertySchema::new("ProjectArn", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new(
            "Rules",
            PropertyType::List(&PropertyType::Struct(&RULE_SCHEMA)),
        )
        .required(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
    ],
    attributes: &["Arn"],
};

/// Represents a condition for a device pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Rule {
    /// The rule's stringified attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Value<RuleAttribute>>,
    /// Specifies how Device Farm compares the rule's attribute to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Value<RuleOperator>>,
    /// The rule's value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value<String>>,
}

pub const RULE_SCHEMA: StructSchema = StructSchema {
    name: "Rule",
    properties: &[
        PropertySchema::new("Attribute", PropertyType::Enum(&RuleAttribute::SCHEMA)),
        PropertySchema::new("Operator", PropertyType::Enum(&RuleOperator::SCHEMA)),
        PropertySchema::new("Value", PropertyType::String),
    ],
};
