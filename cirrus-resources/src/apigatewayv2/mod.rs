//! AWS::ApiGatewayV2 resource types
//!
//! HTTP and WebSocket APIs: APIs, routes, integrations, authorizers, stages, deployments, custom
//! domain names and VPC links.
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

pub mod api;
pub mod api_mapping;
pub mod authorizer;
pub mod deployment;
pub mod domain_name;
pub mod integration;
pub mod route;
pub mod stage;
pub mod vpc_link;

pub use api::Api;
pub use api_mapping::ApiMapping;
pub use authorizer::Authorizer;
pub use deployment::Deployment;
pub use domain_name::DomainName;
pub use integration::Integration;
pub use route::Route;
pub use stage::Stage;
pub use vpc_link::VpcLink;

use cirrus_core::catalog::Catalog;

/// Register every AWS::ApiGatewayV2 resource type
pub fn register(catalog: &mut Catalog) {
    catalog.register::<Api>();
    catalog.register::<ApiMapping>();
    catalog.register::<Authorizer>();
    catalog.register::<Deployment>();
    catalog.register::<DomainName>();
    catalog.register::<Integration>();
    catalog.register::<Route>();
    catalog.register::<Stage>();
    catalog.register::<VpcLink>();
}
