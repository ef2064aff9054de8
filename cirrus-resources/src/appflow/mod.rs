//! AWS::AppFlow resource types
//!
//! Amazon AppFlow: custom connectors, connector profiles and the flows that move data between them.
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

pub mod connector;
pub mod connector_profile;
pub mod flow;

pub use connector::Connector;
pub use connector_profile::ConnectorProfile;
pub use flow::Flow;

use cirrus_core::catalog::Catalog;

/// Register every AWS::AppFlow resource type
pub fn register(catalog: &mut Catalog) {
    catalog.register::<Connector>();
    catalog.register::<ConnectorProfile>();
    catalog.register::<Flow>();
}
