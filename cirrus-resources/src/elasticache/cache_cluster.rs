//! CacheCluster resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::CacheCluster
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema, TAG_SCHEMA};
use cirrus_core::{List, Tag, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// IP version used to discover cluster nodes
    pub enum IpDiscovery {
        Ipv4 = "ipv4",
        Ipv6 = "ipv6",
    }
}

allowed_values! {
    /// IP versions a cluster accepts connections on
    pub enum NetworkType {
        Ipv4 = "ipv4",
        Ipv6 = "ipv6",
        DualStack = "dual_stack",
    }
}

allowed_values! {
    /// Allowed values for `AZMode`
    pub enum CacheClusterAzMode {
        SingleAz = "single-az",
        CrossAz = "cross-az",
    }
}

allowed_values! {
    /// Allowed values for `DestinationType`
    pub enum LogDeliveryConfigurationRequestDestinationType {
        CloudwatchLogs = "cloudwatch-logs",
        KinesisFirehose = "kinesis-firehose",
    }
}

allowed_values! {
    /// Allowed values for `LogFormat`
    pub enum LogDeliveryConfigurationRequestLogFormat {
        Text = "text",
        Json = "json",
    }
}

allowed_values! {
    /// Allowed values for `LogType`
    pub enum LogDeliveryConfigurationRequestLogType {
        SlowLog = "slow-log",
        EngineLog = "engine-log",
    }
}

/// `AWS::ElastiCache::CacheCluster`
///
/// Creates a cluster. All nodes in the cluster run the same protocol-compliant cache engine
/// software, either Memcached, Valkey or Redis OSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CacheCluster {
    /// Specifies whether the nodes in this Memcached cluster are created in a single Availability
    /// Zone or created across multiple Availability Zones.
    #[serde(rename = "AZMode", default, skip_serializing_if = "Option::is_none")]
    pub az_mode: Option<Value<CacheClusterAzMode>>,
    /// If you are running Redis OSS engine version 6.0 or later, set this parameter to yes to opt
    /// in to the next minor version upgrade campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<Value<bool>>,
    /// The compute and memory capacity of the nodes in the node group (shard).
    pub cache_node_type: Value<String>,
    /// The name of the parameter group to associate with this cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_parameter_group_name: Option<Value<String>>,
    /// A list of security group names to associate with this cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_security_group_names: Option<List<String>>,
    /// The name of the subnet group to be used for the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_subnet_group_name: Option<Value<String>>,
    /// A name for the cache cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<Value<String>>,
    /// The name of the cache engine to be used for this cluster.
    pub engine: Value<String>,
    /// The version number of the cache engine to be used for this cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<Value<String>>,
    /// The network type you choose when modifying a cluster, either ipv4 or ipv6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_discovery: Option<Value<IpDiscovery>>,
    /// Specifies the destination, format and type of the logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_delivery_configurations: Option<Vec<LogDeliveryConfigurationRequest>>,
    /// Must be either ipv4, ipv6 or dual_stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<Value<NetworkType>>,
    /// The Amazon Resource Name (ARN) of the Amazon Simple Notification Service (SNS) topic to
    /// which notifications are sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_topic_arn: Option<Value<String>>,
    /// The number of cache nodes that the cache cluster should have.
    pub num_cache_nodes: Value<i64>,
    /// The port number on which each of the cache nodes accepts connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value<i64>>,
    /// The EC2 Availability Zone in which the cluster is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_availability_zone: Option<Value<String>>,
    /// A list of the Availability Zones in which cache nodes are created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_availability_zones: Option<List<String>>,
    /// Specifies the weekly time range during which maintenance on the cluster is performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<Value<String>>,
    /// A single-element string list containing an Amazon Resource Name (ARN) that uniquely
    /// identifies a Redis OSS RDB snapshot file stored in Amazon S3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_arns: Option<List<String>>,
    /// The name of a Redis OSS snapshot from which to restore data into the new node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_name: Option<Value<String>>,
    /// The number of days for which ElastiCache retains automatic snapshots before deleting them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_retention_limit: Option<Value<i64>>,
    /// The daily time range (in UTC) during which ElastiCache begins taking a daily snapshot of
    /// your node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_window: Option<Value<String>>,
    /// A list of tags to be added to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// A flag that enables in-transit encryption when set to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_encryption_enabled: Option<Value<bool>>,
    /// One or more VPC security groups associated with the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<List<String>>,
}

impl ResourceProperties for CacheCluster {
    const TYPE: &'static str = "AWS::ElastiCache::CacheCluster";

    fn schema() -> &'static ResourceSchema {
        &CACHE_CLUSTER_SCHEMA
    }
}

pub const CACHE_CLUSTER_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::CacheCluster",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-cachecluster.html",
    properties: &[
        PropertySchema::new("AZMode", PropertyType::Enum(&CacheClusterAzMode::SCHEMA)),
        PropertySchema::new("AutoMinorVersionUpgrade", PropertyType::Boolean),
        PropertySchema::new("CacheNodeType", PropertyType::String)
            .required(),
        PropertySchema::new("CacheParameterGroupName", PropertyType::String),
        PropertySchema::new(
            "CacheSecurityGroupNames",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new("CacheSubnetGroupName", PropertyType::String)
            .immutable(),
        PropertySchema::new("ClusterName", PropertyType::String)
            .immutable(),
        PropertySchema::new("Engine", PropertyType::String)
            .required()
            .immutable(),
        PropertySchema::new("EngineVersion", PropertyType::String),
        PropertySchema::new("IpDiscovery", PropertyType::Enum(&IpDiscovery::SCHEMA)),
        PropertySchema::new(
            "LogDeliveryConfigurations",
            PropertyType::List(&PropertyType::Struct(&LOG_DELIVERY_CONFIGURATION_REQUEST_SCHEMA)),
        ),
        PropertySchema::new("NetworkType", PropertyType::Enum(&NetworkType::SCHEMA))
            .immutable(),
        PropertySchema::new("NotificationTopicArn", PropertyType::String),
        PropertySchema::new("NumCacheNodes", PropertyType::Integer)
            .required(),
        PropertySchema::new("Port", PropertyType::Integer)
            .immutable(),
        PropertySchema::new("PreferredAvailabilityZone", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "PreferredAvailabilityZones",
            PropertyType::List(&PropertyType::String),
        )
        .immutable(),
        PropertySchema::new("PreferredMaintenanceWindow", PropertyType::String),
        PropertySchema::new("SnapshotArns", PropertyType::List(&PropertyType::String))
            .immutable(),
        PropertySchema::new("SnapshotName", PropertyType::String)
            .immutable(),
        PropertySchema::new("SnapshotRetentionLimit", PropertyType::Integer),
        PropertySchema::new("SnapshotWindow", PropertyType::String),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("TransitEncryptionEnabled", PropertyType::Boolean),
        PropertySchema::new(
            "VpcSecurityGroupIds",
            PropertyType::List(&PropertyType::String),
        ),
    ],
    attributes: &[
        "ConfigurationEndpoint.Address",
        "ConfigurationEndpoint.Port",
        "RedisEndpoint.Address",
        "RedisEndpoint.Port",
    ],
};

/// Specifies the destination, format and type of the logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LogDeliveryConfigurationRequest {
    /// Configuration details of either a CloudWatch Logs destination or Kinesis Data Firehose
    /// destination.
    pub destination_details: DestinationDetails,
    /// Specify either CloudWatch Logs or Kinesis Data Firehose as the destination type.
    pub destination_type: Value<LogDeliveryConfigurationRequestDestinationType>,
    /// Valid values are either json or text.
    pub log_format: Value<LogDeliveryConfigurationRequestLogFormat>,
    /// Valid value is either slow-log, which refers to slow-log or engine-log.
    pub log_type: Value<LogDeliveryConfigurationRequestLogType>,
}

pub const LOG_DELIVERY_CONFIGURATION_REQUEST_SCHEMA: StructSchema = StructSchema {
    name: "LogDeliveryConfigurationRequest",
    properties: &[
        PropertySchema::new(
            "DestinationDetails",
            PropertyType::Struct(&DESTINATION_DETAILS_SCHEMA),
        )
        .required(),
        PropertySchema::new(
            "DestinationType",
            PropertyType::Enum(&LogDeliveryConfigurationRequestDestinationType::SCHEMA),
        )
        .required(),
        PropertySchema::new(
            "LogFormat",
            PropertyType::Enum(&LogDeliveryConfigurationRequestLogFormat::SCHEMA),
        )
        .required(),
        PropertySchema::new(
            "LogType",
            PropertyType::Enum(&LogDeliveryConfigurationRequestLogType::SCHEMA),
        )
        .required(),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DestinationDetails {
    /// The configuration details of the CloudWatch Logs destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_watch_logs_details: Option<CloudWatchLogsDestinationDetails>,
    /// The configuration details of the Kinesis Data Firehose destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinesis_firehose_details: Option<KinesisFirehoseDestinationDetails>,
}

pub const DESTINATION_DETAILS_SCHEMA: StructSchema = StructSchema {
    name: "DestinationDetails",
    properties: &[
        PropertySchema::new(
            "CloudWatchLogsDetails",
            PropertyType::Struct(&CLOUD_WATCH_LOGS_DESTINATION_DETAILS_SCHEMA),
        ),
        PropertySchema::new(
            "KinesisFirehoseDetails",
            PropertyType::Struct(&KINESIS_FIREHOSE_DESTINATION_DETAILS_SCHEMA),
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CloudWatchLogsDestinationDetails {
    /// The name of the CloudWatch Logs log group.
    pub log_group: Value<String>,
}

pub const CLOUD_WATCH_LOGS_DESTINATION_DETAILS_SCHEMA: StructSchema = StructSchema {
    name: "CloudWatchLogsDestinationDetails",
    properties: &[
        PropertySchema::new("LogGroup", PropertyType::String)
            .required(),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct KinesisFirehoseDestinationDetails {
    /// The name of the Kinesis Data Firehose delivery stream.
    pub delivery_stream: Value<String>,
}

pub const KINESIS_FIREHOSE_DESTINATION_DETAILS_SCHEMA: StructSchema = StructSchema {
    name: "KinesisFirehoseDestinationDetails",
    properties: &[
        PropertySchema::new("DeliveryStream", PropertyType::String)
            .required(),
    ],
};
