//! Cirrus Resources
//!
//! Typed `Properties` blocks for AWS CloudFormation resource types.
//!
//! ## Module Structure
//!
//! - `apigatewayv2` - AWS::ApiGatewayV2 (HTTP and WebSocket APIs)
//! - `appflow` - AWS::AppFlow (connectors, connector profiles, flows)
//! - `devicefarm` - AWS::DeviceFarm (projects, pools, profiles)
//! - `ec2` - AWS::EC2 (Spot Fleet)
//! - `elasticache` - AWS::ElastiCache (clusters, replication groups, RBAC)
//!
//! Resource modules are generated by `cirrus-codegen` from the
//! CloudFormation registry schemas.

pub mod apigatewayv2;
pub mod appflow;
pub mod devicefarm;
pub mod ec2;
pub mod elasticache;

use cirrus_core::catalog::Catalog;

/// Catalog of every resource type in this crate
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    apigatewayv2::register(&mut catalog);
    appflow::register(&mut catalog);
    devicefarm::register(&mut catalog);
    ec2::register(&mut catalog);
    elasticache::register(&mut catalog);
    catalog
}

#[cfg(test)]
mod tests;
