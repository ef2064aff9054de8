//! GlobalReplicationGroup resource type
//!
//! Auto-generated from CloudFormation schema: AWS::ElastiCache::GlobalReplicationGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use cirrus_core::allowed_values;
use cirrus_core::resource::ResourceProperties;
use cirrus_core::schema::{PropertySchema, PropertyType, ResourceSchema, StructSchema};
use cirrus_core::{List, Value};
use serde::{Deserialize, Serialize};

allowed_values! {
    /// Allowed values for `Role`
    pub enum GlobalReplicationGroupMemberRole {
        Primary = "PRIMARY",
        Secondary = "SECONDARY",
    }
}

/// `AWS::ElastiCache::GlobalReplicationGroup`
///
/// Consists of a primary cluster that accepts writes and an associated secondary cluster that
/// resides in a different AWS region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GlobalReplicationGroup {
    /// Specifies whether a read-only replica is automatically promoted to read/write primary if the
    /// existing primary fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_failover_enabled: Option<Value<bool>>,
    /// The cache node type of the Global datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_node_type: Option<Value<String>>,
    /// The name of the cache parameter group to use with the Global datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_parameter_group_name: Option<Value<String>>,
    /// The ElastiCache engine. For Valkey or Redis OSS only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Value<String>>,
    /// The Elasticache Valkey or Redis OSS engine version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<Value<String>>,
    /// The number of node groups that comprise the Global Datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_node_group_count: Option<Value<i64>>,
    /// The optional description of the Global datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_replication_group_description: Option<Value<String>>,
    /// The suffix name of a Global Datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_replication_group_id_suffix: Option<Value<String>>,
    /// The replication groups that comprise the Global datastore.
    pub members: Vec<GlobalReplicationGroupMember>,
    /// The Regions that comprise the Global Datastore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_configurations: Option<Vec<RegionalConfiguration>>,
}

impl ResourceProperties for GlobalReplicationGroup {
    const TYPE: &'static str = "AWS::ElastiCache::GlobalReplicationGroup";

    fn schema() -> &'static ResourceSchema {
        &GLOBAL_REPLICATION_GROUP_SCHEMA
    }
}

pub const GLOBAL_REPLICATION_GROUP_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "AWS::ElastiCache::GlobalReplicationGroup",
    documentation: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-elasticache-globalreplicationgroup.html",
    properties: &[
        PropertySchema::new("AutomaticFailoverEnabled", PropertyType::Boolean),
        PropertySchema::new("CacheNodeType", PropertyType::String),
        PropertySchema::new("CacheParameterGroupName", PropertyType::String),
        PropertySchema::new("Engine", PropertyType::String),
        PropertySchema::new("EngineVersion", PropertyType::String),
        PropertySchema::new("GlobalNodeGroupCount", PropertyType::Integer),
        PropertySchema::new("GlobalReplicationGroupDescription", PropertyType::String),
        PropertySchema::new("GlobalReplicationGroupIdSuffix", PropertyType::String),
        PropertySchema::new(
            "Members",
            PropertyType::List(&PropertyType::Struct(&GLOBAL_REPLICATION_GROUP_MEMBER_SCHEMA)),
        )
        .required(),
        PropertySchema::new(
            "RegionalConfigurations",
            PropertyType::List(&PropertyType::Struct(&REGIONAL_CONFIGURATION_SCHEMA)),
        ),
    ],
    attributes: &["GlobalReplicationGroupId", "Status"],
};

/// A member of a Global datastore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GlobalReplicationGroupMember {
    /// The replication group id of the Global datastore member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_group_id: Option<Value<String>>,
    /// The Amazon region of the Global datastore member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_group_region: Option<Value<String>>,
    /// Indicates the role of the replication group, PRIMARY or SECONDARY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Value<GlobalReplicationGroupMemberRole>>,
}

pub const GLOBAL_REPLICATION_GROUP_MEMBER_SCHEMA: StructSchema = StructSchema {
    name: "GlobalReplicationGroupMember",
    properties: &[
        PropertySchema::new("ReplicationGroupId", PropertyType::String),
        PropertySchema::new("ReplicationGroupRegion", PropertyType::String),
        PropertySchema::new(
            "Role",
            PropertyType::Enum(&GlobalReplicationGroupMemberRole::SCHEMA),
        ),
    ],
};

/// A list of the replication groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RegionalConfiguration {
    /// The name of the secondary cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_group_id: Option<Value<String>>,
    /// The Amazon region where the cluster is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_group_region: Option<Value<String>>,
    /// A list of PreferredAvailabilityZones objects that specifies the configuration of a node
    /// group in the resharded cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resharding_configurations: Option<Vec<ReshardingConfiguration>>,
}

pub const REGIONAL_CONFIGURATION_SCHEMA: StructSchema = StructSchema {
    name: "RegionalConfiguration",
    properties: &[
        PropertySchema::new("ReplicationGroupId", PropertyType::String),
        PropertySchema::new("ReplicationGroupRegion", PropertyType::String),
        PropertySchema::new(
            "ReshardingConfigurations",
            PropertyType::List(&PropertyType::Struct(&RESHARDING_CONFIGURATION_SCHEMA)),
        ),
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ReshardingConfiguration {
    /// Either the ElastiCache supplied 4-digit id or a user supplied id for the node group these
    /// configuration values apply to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_group_id: Option<Value<String>>,
    /// A list of preferred availability zones for the nodes in this cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_availability_zones: Option<List<String>>,
}

pub const RESHARDING_CONFIGURATION_SCHEMA: StructSchema = StructSchema {
    name: "ReshardingConfiguration",
    properties: &[
        PropertySchema::new("NodeGroupId", PropertyType::String),
        PropertySchema::new(
            "PreferredAvailabilityZones",
            PropertyType::List(&PropertyType::String),
        ),
    ],
};
