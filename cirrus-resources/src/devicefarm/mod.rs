//! AWS::DeviceFarm resource types
//!
//! AWS Device Farm: projects, device pools, instance and network profiles, Selenium testing
//! projects and VPC endpoint configurations.
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

pub mod device_pool;
pub mod instance_profile;
pub mod network_profile;
pub mod project;
pub mod test_grid_project;
pub mod vpce_configuration;

pub use device_pool::DevicePool;
pub use instance_profile::InstanceProfile;
pub use network_profile::NetworkProfile;
pub use project::Project;
pub use test_grid_project::TestGridProject;
pub use vpce_configuration::VpceConfiguration;

use cirrus_core::catalog::Catalog;

/// Register every AWS::DeviceFarm resource type
pub fn register(catalog: &mut Catalog) {
    catalog.register::<DevicePool>();
    catalog.register::<InstanceProfile>();
    catalog.register::<NetworkProfile>();
    catalog.register::<Project>();
    catalog.register::<TestGridProject>();
    catalog.register::<VpceConfiguration>();
}
