//! Cirrus Core
//!
//! Shared building blocks for the typed AWS CloudFormation resource catalog:
//! literal-or-intrinsic values, resource-level attributes, property schemas
//! and the registry that ties resource types to them.

pub mod allowed_values;
pub mod attributes;
pub mod catalog;
pub mod intrinsic;
pub mod render;
pub mod resource;
pub mod schema;
pub mod template;
pub mod value;

pub use attributes::ResourceAttributes;
pub use intrinsic::Intrinsic;
pub use resource::{Resource, ResourceProperties};
pub use value::{Json, List, Map, Tag, Value};
