//! AWS::ElastiCache resource types
//!
//! Amazon ElastiCache: clusters, replication groups, Global datastores, parameter, security and
//! subnet groups, and role-based access control users and user groups.
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

pub mod cache_cluster;
pub mod global_replication_group;
pub mod parameter_group;
pub mod replication_group;
pub mod security_group;
pub mod security_group_ingress;
pub mod subnet_group;
pub mod user;
pub mod user_group;

pub use cache_cluster::CacheCluster;
pub use global_replication_group::GlobalReplicationGroup;
pub use parameter_group::ParameterGroup;
pub use replication_group::ReplicationGroup;
pub use security_group::SecurityGroup;
pub use security_group_ingress::SecurityGroupIngress;
pub use subnet_group::SubnetGroup;
pub use user::User;
pub use user_group::UserGroup;

use cirrus_core::catalog::Catalog;

/// Register every AWS::ElastiCache resource type
pub fn register(catalog: &mut Catalog) {
    catalog.register::<CacheCluster>();
    catalog.register::<GlobalReplicationGroup>();
    catalog.register::<ParameterGroup>();
    catalog.register::<ReplicationGroup>();
    catalog.register::<SecurityGroup>();
    catalog.register::<SecurityGroupIngress>();
    catalog.register::<SubnetGroup>();
    catalog.register::<User>();
    catalog.register::<UserGroup>();
}
