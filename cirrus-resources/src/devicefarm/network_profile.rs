//! NetworkProfile resource type
//!
//! Auto-generated from CloudFormation schema: AWS::DeviceFarm::NetworkProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, TAG_SCHEMA};
use cirrus_core::{Tag, Value};
use serde::{Deserialize, Serialize};

/// `AWS::DeviceFarm::NetworkProfile`
///
/// Creates a network profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct NetworkProfile {
    /// The description of the network profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The data throughput rate in bits per second, as an integer from 0 to 104857600.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downlink_bandwidth_bits: Option<Value<i64>>,
    /// Delay time for all packets to destination in milliseconds as an integer from 0 to 2000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downlink_delay_ms: Option<Value<i64>>,
    /// Time variation in the delay of received packets in milliseconds as an integer from 0 to
    /// 2000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downlink_jitter_ms: Option<Value<i64>>,
    /// Proportion of received packets that fail to arrive from 0 to 100 percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downlink_loss_percent: Option<Value<i64>>,
    /// The name of the network profile.
    pub name: Value<String>,
    /// The Amazon Resource Name (ARN) of the specified project.
    pub project_arn: Value<String>,
    /// An array of key-value pairs to apply to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// The data throughput rate in bits per second, as an integer from 0 to 104857600.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplink_bandwidth_bits: Option<Value<i64>>,
    /// Delay time for all packets to destination in milliseconds as an integer from 0 to 2000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplink_delay_ms: Option<Value<i64>>,
    /// Time variation in the delay of received packets in milliseconds as an integer from 0 to
    /// 2000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplink_jitter_ms: Option<Value<i64>>,
    /// Proportion of transmitted packets that fail to arrive from 0 to 100 percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uplink_loss_percent: Option<Value<i64>>,
}

impl ResourceProperties for NetworkProfile {
    const TYPE: &'static str = "AWS::DeviceFarm::NetworkProfile";

    fn schema() -> &'static ResourceSchema {
        &NETWORK_PROFILE_SCHEMA
    }
}

pub const NETWORK_PROFILE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::DeviceFarm::NetworkProfile",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-devicefarm-networkprofile.html",
    properties: &[
        PropertySchema::new("Description", PropertyType::String),
        PropertySchema::new("DownlinkBandwidthBits", PropertyType::Integer),
        PropertySchema::new("DownlinkDelayMs", PropertyType::Integer),
        PropertySchema::new("DownlinkJitterMs", PropertyType::Integer),
        PropertySchema::new("DownlinkLossPercent", PropertyType::Integer),
        PropertySchema::new("Name", PropertyType::String).required(),
        PropertySchema::new("ProjectArn", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("UplinkBandwidthBits", PropertyType::Integer),
        PropertySchema::new("UplinkDelayMs", PropertyType::Integer),
        PropertySchema::new("UplinkJitterMs", PropertyType::Integer),
        PropertySchema::new("UplinkLossPercent", PropertyType::Integer),
    ],
    attributes: &["Arn"],
};
