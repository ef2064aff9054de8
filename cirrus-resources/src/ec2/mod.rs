//! AWS::EC2 resource types
//!
//! Amazon EC2 Spot Fleet requests.
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

pub mod spot_fleet;

pub use spot_fleet::SpotFleet;

use cirrus_core::catalog::Catalog;

/// Register every AWS::EC2 resource type
pub fn register(catalog: &mut Catalog) {
    catalog.register::<SpotFleet>();
}
