//! ReplicationGroup resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::ReplicationGroup
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
    /// Allowed values for `ClusterMode`
    pub enum ReplicationGroupClusterMode {
        Enabled = "enabled",
        Disabled = "disabled",
        Compatible = "compatible",
    }
}

allowed_values! {
    /// Allowed values for `TransitEncryptionMode`
    pub enum ReplicationGroupTransitEncryptionMode {
        Preferred = "preferred",
        Required = "required",
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

/// `AWS::ElastiCache::ReplicationGroup`
///
/// Creates a Valkey or Redis OSS (cluster mode disabled) or a Valkey or Redis OSS (cluster mode
/// enabled) replication group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ReplicationGroup {
    /// A flag that enables encryption at rest when set to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_rest_encryption_enabled: Option<Value<bool>>,
    /// Reserved parameter. The password used to access a password protected server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<Value<String>>,
    /// If you are running Valkey 7.2 or later, or Redis OSS engine version 6.0 or later, set this
    /// parameter to yes if you want to opt-in to the next minor version upgrade campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<Value<bool>>,
    /// Specifies whether a read-only replica is automatically promoted to read/write primary if the
    /// existing primary fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_failover_enabled: Option<Value<bool>>,
    /// The compute and memory capacity of the nodes in the node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_node_type: Option<Value<String>>,
    /// The name of the parameter group to associate with this replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_parameter_group_name: Option<Value<String>>,
    /// A list of cache security group names to associate with this replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_security_group_names: Option<List<String>>,
    /// The name of the cache subnet group to be used for the replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_subnet_group_name: Option<Value<String>>,
    /// Enabled or Disabled. To modify cluster mode from Disabled to Enabled, you must first set the
    /// cluster mode to Compatible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_mode: Option<Value<ReplicationGroupClusterMode>>,
    /// Enables data tiering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_tiering_enabled: Option<Value<bool>>,
    /// The name of the cache engine to be used for the clusters in this replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Value<String>>,
    /// The version number of the cache engine to be used for the clusters in this replication
    /// group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<Value<String>>,
    /// The name of the Global datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_replication_group_id: Option<Value<String>>,
    /// The network type you choose when creating a replication group, either ipv4 or ipv6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_discovery: Option<Value<IpDiscovery>>,
    /// The ID of the KMS key used to encrypt the disk on the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,
    /// Specifies the destination, format and type of the logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_delivery_configurations: Option<Vec<LogDeliveryConfigurationRequest>>,
    /// A flag indicating if you have Multi-AZ enabled to enhance fault tolerance.
    #[serde(rename = "MultiAZEnabled", default, skip_serializing_if = "Option::is_none")]
    pub multi_az_enabled: Option<Value<bool>>,
    /// Must be either ipv4, ipv6 or dual_stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<Value<NetworkType>>,
    /// NodeGroupConfiguration is a property of the replication group that configures an Amazon
    /// ElastiCache node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_group_configuration: Option<Vec<NodeGroupConfiguration>>,
    /// The Amazon Resource Name (ARN) of the Amazon Simple Notification Service (SNS) topic to
    /// which notifications are sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_topic_arn: Option<Value<String>>,
    /// The number of clusters this replication group initially has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cache_clusters: Option<Value<i64>>,
    /// An optional parameter that specifies the number of node groups (shards) for this Valkey or
    /// Redis OSS (cluster mode enabled) replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_node_groups: Option<Value<i64>>,
    /// The port number on which each member of the replication group accepts connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value<i64>>,
    /// A list of EC2 Availability Zones in which the replication group's clusters are created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_cache_cluster_a_zs: Option<List<String>>,
    /// Specifies the weekly time range during which maintenance on the cluster is performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<Value<String>>,
    /// The identifier of the cluster that serves as the primary for this replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cluster_id: Option<Value<String>>,
    /// An optional parameter that specifies the number of replica nodes in each node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas_per_node_group: Option<Value<i64>>,
    /// A user-created description for the replication group.
    pub replication_group_description: Value<String>,
    /// The replication group identifier. This parameter is stored as a lowercase string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_group_id: Option<Value<String>>,
    /// One or more Amazon VPC security groups associated with this replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<List<String>>,
    /// A list of Amazon Resource Names (ARN) that uniquely identify the Valkey or Redis OSS RDB
    /// snapshot files stored in Amazon S3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_arns: Option<List<String>>,
    /// The name of a snapshot from which to restore data into the new replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_name: Option<Value<String>>,
    /// The number of days for which ElastiCache retains automatic snapshots before deleting them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_retention_limit: Option<Value<i64>>,
    /// The daily time range (in UTC) during which ElastiCache begins taking a daily snapshot of
    /// your node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_window: Option<Value<String>>,
    /// The cluster ID that is used as the daily snapshot source for the replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshotting_cluster_id: Option<Value<String>>,
    /// A list of tags to be added to this resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// A flag that enables in-transit encryption when set to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_encryption_enabled: Option<Value<bool>>,
    /// A setting that allows you to migrate your clients to use in-transit encryption, with no
    /// downtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_encryption_mode: Option<Value<ReplicationGroupTransitEncryptionMode>>,
    /// The ID of user group to associate with the replication group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<List<String>>,
}

impl ResourceProperties for ReplicationGroup {
    const TYPE: &'static str = "AWS::ElastiCache::ReplicationGroup";

    fn schema() -> &'static ResourceSchema {
        &REPLICATION_GROUP_SCHEMA
    }
}

pub const REPLICATION_GROUP_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::ReplicationGroup",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-replicationgroup.html",
    properties: &[
        PropertySchema::new("AtRestEncryptionEnabled", PropertyType::Boolean)
            .immutable(),
        PropertySchema::new("AuthToken", PropertyType::String),
        PropertySchema::new("AutoMinorVersionUpgrade", PropertyType::Boolean),
        PropertySchema::new("AutomaticFailoverEnabled", PropertyType::Boolean),
        PropertySchema::new("CacheNodeType", PropertyType::String),
        PropertySchema::new("CacheParameterGroupName", PropertyType::String),
        PropertySchema::new(
            "CacheSecurityGroupNames",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new("CacheSubnetGroupName", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "ClusterMode",
            PropertyType::Enum(&ReplicationGroupClusterMode::SCHEMA),
        ),
        PropertySchema::new("DataTieringEnabled", PropertyType::Boolean)
            .immutable(),
        PropertySchema::new("Engine", PropertyType::String),
        PropertySchema::new("EngineVersion", PropertyType::String),
        PropertySchema::new("GlobalReplicationGroupId", PropertyType::String)
            .immutable(),
        PropertySchema::new("IpDiscovery", PropertyType::Enum(&IpDiscovery::SCHEMA)),
        PropertySchema::new("KmsKeyId", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "LogDeliveryConfigurations",
            PropertyType::List(&PropertyType::Struct(&LOG_DELIVERY_CONFIGURATION_REQUEST_SCHEMA)),
        ),
        PropertySchema::new("MultiAZEnabled", PropertyType::Boolean),
        PropertySchema::new("NetworkType", PropertyType::Enum(&NetworkType::SCHEMA))
            .immutable(),
        PropertySchema::new(
            "NodeGroupConfiguration",
            PropertyType::List(&PropertyType::Struct(&NODE_GROUP_CONFIGURATION_SCHEMA)),
        ),
        PropertySchema::new("NotificationTopicArn", PropertyType::String),
        PropertySchema::new("NumCacheClusters", PropertyType::Integer),
        PropertySchema::new("NumNodeGroups", PropertyType::Integer),
        PropertySchema::new("Port", PropertyType::Integer)
            .immutable(),
        PropertySchema::new(
            "PreferredCacheClusterAZs",
            PropertyType::List(&PropertyType::String),
        )
        .immutable(),
        PropertySchema::new("PreferredMaintenanceWindow", PropertyType::String),
        PropertySchema::new("PrimaryClusterId", PropertyType::String),
        PropertySchema::new("ReplicasPerNodeGroup", PropertyType::Integer)
            .immutable(),
        PropertySchema::new("ReplicationGroupDescription", PropertyType::String)
            .required(),
        PropertySchema::new("ReplicationGroupId", PropertyType::String)
            .immutable(),
        PropertySchema::new(
            "SecurityGroupIds",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new("SnapshotArns", PropertyType::List(&PropertyType::String))
            .immutable(),
        PropertySchema::new("SnapshotName", PropertyType::String)
            .immutable(),
        PropertySchema::new("SnapshotRetentionLimit", PropertyType::Integer),
        PropertySchema::new("SnapshotWindow", PropertyType::String),
        PropertySchema::new("SnapshottingClusterId", PropertyType::String),
        PropertySchema::new(
            "Tags",
            PropertyType::List(&PropertyType::Struct(&TAG_SCHEMA)),
        ),
        PropertySchema::new("TransitEncryptionEnabled", PropertyType::Boolean),
        PropertySchema::new(
            "TransitEncryptionMode",
            PropertyType::Enum(&ReplicationGroupTransitEncryptionMode::SCHEMA),
        ),
        PropertySchema::new("UserGroupIds", PropertyType::List(&PropertyType::String)),
    ],
    attributes: &[
        "ConfigurationEndPoint.Address",
        "ConfigurationEndPoint.Port",
        "PrimaryEndPoint.Address",
        "PrimaryEndPoint.Port",
        "ReadEndPoint.Addresses",
        "ReadEndPoint.Ports",
        "ReaderEndPoint.Address",
        "ReaderEndPoint.Port",
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

/// Configures an Amazon ElastiCache node group (shard).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct NodeGroupConfiguration {
    /// Either the ElastiCache supplied 4-digit id or a user supplied id for the node group these
    /// configuration values apply to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_group_id: Option<Value<String>>,
    /// The Availability Zone where the primary node of this node group (shard) is launched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_availability_zone: Option<Value<String>>,
    /// A list of Availability Zones to be used for the read replicas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_availability_zones: Option<List<String>>,
    /// The number of read replica nodes in this node group (shard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<Value<i64>>,
    /// A string of comma-separated values where the first set of values are the slot numbers (zero
    /// based), and the second set of values are the keyspaces for each slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Value<String>>,
}

pub const NODE_GROUP_CONFIGURATION_SCHEMA: StructSchema = StructSchema {
    name: "NodeGroupConfiguration",
    properties: &[
        PropertySchema::new("NodeGroupId", PropertyType::String),
        PropertySchema::new("PrimaryAvailabilityZone", PropertyType::String),
        PropertySchema::new(
            "ReplicaAvailabilityZones",
            PropertyType::List(&PropertyType::String),
        ),
        PropertySchema::new("ReplicaCount", PropertyType::Integer),
        PropertySchema::new("Slots", PropertyType::String),
    ],
};
